//! Theme - Fixed colors used by the card and the gallery

pub mod colors;
