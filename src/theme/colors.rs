//! Colors - Card Palette

use gpui::{rgb, Rgba};

/// Card color palette - All colors are accessed via associated functions
pub struct CardColors;

impl CardColors {
    // Card colors
    /// Card border - Light gray
    pub fn card_border() -> Rgba { rgb(0xdddddd) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
}
