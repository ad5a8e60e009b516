//! Design tokens for Todo Smart
//!
//! This module provides the color, spacing, border radius and shadow
//! token sets. Each set is available two ways: as constants in a module
//! (`spacing::MD`) and as a struct value (`SpacingTokens`) that the theme
//! aggregates. Typography tokens live in [`crate::typography`].
//!
//! Keys are fixed at compile time. Lookup by name returns `None` for keys
//! that do not exist.

use serde::{Deserialize, Serialize};

/// A color represented as a hex string (e.g. "#FFFFFF" or "#000")
pub type Color = String;

/// Parse a hex color string to RGB components
///
/// Accepts `#RRGGBB` and the shorthand `#RGB`, with or without `#`.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let expand = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Color palette: pastel, light background
pub mod colors {
    /// Screen background
    pub const BG: &str = "#FFFFFF";
    /// Card/surface background
    pub const SURFACE: &str = "#F7F8FF";
    /// Pastel blue
    pub const PRIMARY: &str = "#A8D8FF";
    /// Pastel pink
    pub const SECONDARY: &str = "#FFC7E6";
    /// Pastel red/coral
    pub const ACCENT: &str = "#FF9AA2";
    /// Primary text
    pub const TEXT: &str = "#1F2430";
    /// Secondary text
    pub const TEXT_MUTED: &str = "#6B7280";
    /// Success state
    pub const SUCCESS: &str = "#A7F3D0";
    /// Warning state
    pub const WARNING: &str = "#FDE68A";
    /// Danger state
    pub const DANGER: &str = "#FCA5A5";

    /// Get color value by name
    pub fn get(name: &str) -> Option<&'static str> {
        match name {
            "bg" => Some(BG),
            "surface" => Some(SURFACE),
            "primary" => Some(PRIMARY),
            "secondary" => Some(SECONDARY),
            "accent" => Some(ACCENT),
            "text" => Some(TEXT),
            "textMuted" => Some(TEXT_MUTED),
            "success" => Some(SUCCESS),
            "warning" => Some(WARNING),
            "danger" => Some(DANGER),
            _ => None,
        }
    }
}

/// Color token set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Screen background
    pub bg: Color,
    /// Card/surface background
    pub surface: Color,
    /// Pastel blue
    pub primary: Color,
    /// Pastel pink
    pub secondary: Color,
    /// Pastel coral
    pub accent: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text
    pub text_muted: Color,
    /// Success state
    pub success: Color,
    /// Warning state
    pub warning: Color,
    /// Danger state
    pub danger: Color,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            bg: colors::BG.to_string(),
            surface: colors::SURFACE.to_string(),
            primary: colors::PRIMARY.to_string(),
            secondary: colors::SECONDARY.to_string(),
            accent: colors::ACCENT.to_string(),
            text: colors::TEXT.to_string(),
            text_muted: colors::TEXT_MUTED.to_string(),
            success: colors::SUCCESS.to_string(),
            warning: colors::WARNING.to_string(),
            danger: colors::DANGER.to_string(),
        }
    }
}

impl ColorTokens {
    /// Token keys in declaration order
    pub const KEYS: [&'static str; 10] = [
        "bg",
        "surface",
        "primary",
        "secondary",
        "accent",
        "text",
        "textMuted",
        "success",
        "warning",
        "danger",
    ];

    /// Get a color by key
    pub fn get(&self, key: &str) -> Option<&str> {
        let color = match key {
            "bg" => &self.bg,
            "surface" => &self.surface,
            "primary" => &self.primary,
            "secondary" => &self.secondary,
            "accent" => &self.accent,
            "text" => &self.text,
            "textMuted" => &self.text_muted,
            "success" => &self.success,
            "warning" => &self.warning,
            "danger" => &self.danger,
            _ => return None,
        };
        Some(color)
    }

    /// Whether a color value belongs to this set
    pub fn contains(&self, value: &str) -> bool {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k))
            .any(|c| c.eq_ignore_ascii_case(value))
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on an 8pt grid with t-shirt sizes
pub mod spacing {
    /// 4px - Extra extra small
    pub const XXS: f32 = 4.0;
    /// 8px - Extra small
    pub const XS: f32 = 8.0;
    /// 12px - Small
    pub const SM: f32 = 12.0;
    /// 16px - Medium
    pub const MD: f32 = 16.0;
    /// 20px - Large
    pub const LG: f32 = 20.0;
    /// 24px - Extra large
    pub const XL: f32 = 24.0;
    /// 32px - 2x large
    pub const XXL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xxs" => Some(XXS),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

/// Spacing token set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    /// 4px
    pub xxs: f32,
    /// 8px
    pub xs: f32,
    /// 12px
    pub sm: f32,
    /// 16px
    pub md: f32,
    /// 20px
    pub lg: f32,
    /// 24px
    pub xl: f32,
    /// 32px
    pub xxl: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: spacing::XXS,
            xs: spacing::XS,
            sm: spacing::SM,
            md: spacing::MD,
            lg: spacing::LG,
            xl: spacing::XL,
            xxl: spacing::XXL,
        }
    }
}

impl SpacingTokens {
    /// Token keys in ascending order
    pub const KEYS: [&'static str; 7] = ["xxs", "xs", "sm", "md", "lg", "xl", "xxl"];

    /// Get a spacing value by key
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "xxs" => Some(self.xxs),
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            "xxl" => Some(self.xxl),
            _ => None,
        }
    }

    /// Iterate over `(key, value)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        Self::KEYS.iter().filter_map(move |k| self.get(k).map(|v| (*k, v)))
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (10px)
    pub const SM: f32 = 10.0;
    /// Medium radius (14px)
    pub const MD: f32 = 14.0;
    /// Large radius (18px)
    pub const LG: f32 = 18.0;
    /// Extra large radius (24px)
    pub const XL: f32 = 24.0;

    /// Get radius value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            _ => None,
        }
    }
}

/// Border radius token set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    /// 10px
    pub sm: f32,
    /// 14px
    pub md: f32,
    /// 18px
    pub lg: f32,
    /// 24px
    pub xl: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: radius::SM,
            md: radius::MD,
            lg: radius::LG,
            xl: radius::XL,
        }
    }
}

impl RadiusTokens {
    /// Token keys in ascending order
    pub const KEYS: [&'static str; 4] = ["sm", "md", "lg", "xl"];

    /// Get a radius value by key
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            _ => None,
        }
    }

    /// Iterate over `(key, value)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        Self::KEYS.iter().filter_map(move |k| self.get(k).map(|v| (*k, v)))
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// Shadow definition, in the shape native mobile toolkits expect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color
    pub shadow_color: Color,
    /// Shadow opacity (0.0 - 1.0)
    pub shadow_opacity: f32,
    /// Blur radius
    pub shadow_radius: f32,
    /// Offset
    pub shadow_offset: ShadowOffset,
    /// Android elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(color: &str, opacity: f32, radius: f32, offset: (f32, f32), elevation: f32) -> Self {
        Self {
            shadow_color: color.to_string(),
            shadow_opacity: opacity,
            shadow_radius: radius,
            shadow_offset: ShadowOffset {
                width: offset.0,
                height: offset.1,
            },
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Soft card shadow
    pub fn card() -> Shadow {
        Shadow::new("#000", 0.06, 10.0, (0.0, 4.0), 2.0)
    }

    /// Get shadow by name
    pub fn get(name: &str) -> Option<Shadow> {
        match name {
            "card" => Some(card()),
            _ => None,
        }
    }
}

/// Shadow token set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    /// Soft card shadow
    pub card: Shadow,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            card: shadows::card(),
        }
    }
}

impl ShadowTokens {
    /// Token keys
    pub const KEYS: [&'static str; 1] = ["card"];

    /// Get a shadow by key
    pub fn get(&self, key: &str) -> Option<&Shadow> {
        match key {
            "card" => Some(&self.card),
            _ => None,
        }
    }
}
