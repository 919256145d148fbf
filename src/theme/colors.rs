//! Colors - MDT Theme Colors
//!
//! Dark purple ("durple") palette shared by every panel.

use gpui::{Rgba, rgb};

/// MDT color palette - All colors are accessed via associated functions
pub struct MdtColors;

impl MdtColors {
    // Background colors (durple ramp, darkest outward)
    /// Window background
    pub fn background() -> Rgba { rgb(0x1d1b26) }
    /// Panel chrome: table frame, header bar, pagination strip
    pub fn surface() -> Rgba { rgb(0x25222e) }
    /// Raised surfaces: table cells, modals
    pub fn surface_raised() -> Rgba { rgb(0x2b2837) }
    /// Cards and interactive controls
    pub fn card_bg() -> Rgba { rgb(0x322e40) }
    /// Hover on controls
    pub fn control_hover() -> Rgba { rgb(0x4d4861) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0x211e2b) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0xe9e8ef) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0xb9b6c9) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x8a87a0) }
    /// Disabled controls
    pub fn text_disabled() -> Rgba { rgb(0x5d5975) }

    // Accent and status colors
    /// Primary accent - Blue (avatars, active page)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }
    /// Danger - Red (delete actions)
    pub fn danger() -> Rgba { rgb(0xe03131) }
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x2f9e44) }

    // Borders
    /// Default border
    pub fn border() -> Rgba { rgb(0x3a3650) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0x25222e) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0x383349) }
}
