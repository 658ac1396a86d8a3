//! Application Layer
//!
//! Contains app initialization, window management and the gallery view.

pub mod application;
pub mod gallery;
