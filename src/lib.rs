//! Card Library
//!
//! A single presentational component for GPUI: a container that renders its
//! content inside a bordered, padded, rounded box. The `app` module hosts a
//! small gallery window used to show the component in context.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod theme;

pub use components::primitives::card::{Card, CardFrame, card};
