//! Card Component
//!
//! Wraps arbitrary content in a fixed frame: a 1px solid light gray border,
//! 10px of padding on every side and 8px rounded corners. The content is
//! placed inside untouched.

use gpui::{
    div, px, AnyElement, App, Div, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::theme::colors::CardColors;

/// Fixed frame measurements, in pixels. The border is always `border_1()`.
pub struct CardFrame;

impl CardFrame {
    pub const PADDING: f32 = 10.0;
    pub const CORNER_RADIUS: f32 = 8.0;
}

/// A bordered, padded, rounded container
#[derive(IntoElement, Default)]
pub struct Card {
    children: Vec<AnyElement>,
}

impl Card {
    /// Create an empty card
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the framed element holding this card's content
    pub fn frame(self) -> Div {
        div()
            .border_1()
            .border_color(CardColors::card_border())
            .p(px(CardFrame::PADDING))
            .rounded(px(CardFrame::CORNER_RADIUS))
            .children(self.children)
    }
}

/// Create a card holding a single piece of content
pub fn card(content: impl IntoElement) -> Card {
    Card::new().child(content)
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.frame()
    }
}
