//! Gallery View
//!
//! A single scrollable page showing the card with different kinds of content.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::components::primitives::card::{card, Card};
use crate::theme::colors::CardColors;

/// Gallery of card examples
pub struct Gallery;

impl Gallery {
    pub fn new() -> Self {
        Self
    }

    fn render_section(title: &'static str, body: impl IntoElement) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(CardColors::text_secondary())
                    .child(SharedString::from(title)),
            )
            .child(body)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("card-gallery")
            .size_full()
            .overflow_y_scroll()
            .bg(CardColors::background())
            .text_color(CardColors::text_primary())
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .child(Self::render_section("Text", card("Hello")))
            .child(Self::render_section(
                "Two items",
                Card::new().child("First item").child("Second item"),
            ))
            .child(Self::render_section("Empty", Card::new()))
            .child(Self::render_section(
                "Nested",
                card(div().bg(CardColors::content_bg()).child(card("Inside another card"))),
            ))
    }
}
