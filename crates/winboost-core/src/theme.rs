//! Static theme tables shared by every screen.

/// Palette as hex strings.
pub mod colors {
    pub const PRIMARY: &str = "#5B21B6";
    pub const SECONDARY: &str = "#06B6D4";
    pub const ACCENT: &str = "#EC4899";
    pub const NOTIFICATION: &str = "#FEF7FF";
    pub const BACKGROUND_LIGHT: &str = "#FAFBFC";
    pub const TEXT_DARK: &str = "#334155";
    pub const TEXT_SECONDARY: &str = "#64748B";
    pub const SUCCESS: &str = "#10B981";
    pub const WARNING: &str = "#F59E0B";
    pub const ERROR: &str = "#EF4444";
    pub const WHITE: &str = "#FFFFFF";
    pub const GRAY_100: &str = "#F1F5F9";
    pub const GRAY_200: &str = "#E2E8F0";
    pub const GRAY_300: &str = "#CBD5E1";

    // Energy bar fills
    pub const ENERGY_LOW: &str = "#FF6B6B";
    pub const ENERGY_MEDIUM: &str = "#FFB84D";
    pub const ENERGY_HIGH: &str = "#4ECDC4";
}

/// Spacing scale in layout units.
pub mod spacing {
    pub const XS: u16 = 4;
    pub const SM: u16 = 8;
    pub const MD: u16 = 16;
    pub const LG: u16 = 24;
    pub const XL: u16 = 32;
    pub const XXL: u16 = 48;
}

/// Corner radii in layout units.
pub mod border_radius {
    pub const SM: u16 = 8;
    pub const MD: u16 = 12;
    pub const LG: u16 = 16;
    pub const XL: u16 = 24;
    pub const FULL: u16 = 9999;
}

/// Parse a `#RRGGBB` hex color into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
