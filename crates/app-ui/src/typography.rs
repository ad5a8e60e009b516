//! Typography system for Todo Smart
//!
//! This module provides the typography token set (font families, size
//! scale, line heights), the [`TextStyle`] value used by text components,
//! and the manifest of bundled font assets.

use crate::tokens::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Families
// =============================================================================

/// Font family names (Vazirmatn, a Persian typeface)
pub mod font_family {
    /// Regular weight
    pub const REGULAR: &str = "Vazirmatn-Regular";
    /// Medium weight
    pub const MEDIUM: &str = "Vazirmatn-Medium";
    /// Bold weight
    pub const BOLD: &str = "Vazirmatn-Bold";
}

/// Font size scale in pixels
pub mod font_size {
    /// Extra small (12px)
    pub const XS: f32 = 12.0;
    /// Small (14px)
    pub const SM: f32 = 14.0;
    /// Medium (16px)
    pub const MD: f32 = 16.0;
    /// Large (20px)
    pub const LG: f32 = 20.0;
    /// Extra large (24px)
    pub const XL: f32 = 24.0;
}

/// Line heights in pixels
pub mod line_height {
    /// For medium text (22px)
    pub const MD: f32 = 22.0;
    /// For large text (28px)
    pub const LG: f32 = 28.0;
}

/// Font family variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular (400)
    #[default]
    Regular,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// All variants, lightest first
    pub fn all() -> [FontWeight; 3] {
        [FontWeight::Regular, FontWeight::Medium, FontWeight::Bold]
    }

    /// Numeric CSS weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

// =============================================================================
// Typography Token Set
// =============================================================================

/// Font families by weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    /// Regular weight family
    pub regular: String,
    /// Medium weight family
    pub medium: String,
    /// Bold weight family
    pub bold: String,
}

impl FontFamilies {
    /// Family for a weight
    pub fn for_weight(&self, weight: FontWeight) -> &str {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Medium => &self.medium,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Get family by key
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "regular" => Some(&self.regular),
            "medium" => Some(&self.medium),
            "bold" => Some(&self.bold),
            _ => None,
        }
    }
}

/// Font size scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// 12px
    pub xs: f32,
    /// 14px
    pub sm: f32,
    /// 16px
    pub md: f32,
    /// 20px
    pub lg: f32,
    /// 24px
    pub xl: f32,
}

impl FontSizes {
    /// Keys in ascending order
    pub const KEYS: [&'static str; 5] = ["xs", "sm", "md", "lg", "xl"];

    /// Get size by key
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            _ => None,
        }
    }
}

/// Line heights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    /// 22px
    pub md: f32,
    /// 28px
    pub lg: f32,
}

impl LineHeights {
    /// Keys in ascending order
    pub const KEYS: [&'static str; 2] = ["md", "lg"];

    /// Get line height by key
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            _ => None,
        }
    }
}

/// Typography token set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    /// Font families
    pub font_family: FontFamilies,
    /// Size scale
    pub size: FontSizes,
    /// Line heights
    pub line_height: LineHeights,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                regular: font_family::REGULAR.to_string(),
                medium: font_family::MEDIUM.to_string(),
                bold: font_family::BOLD.to_string(),
            },
            size: FontSizes {
                xs: font_size::XS,
                sm: font_size::SM,
                md: font_size::MD,
                lg: font_size::LG,
                xl: font_size::XL,
            },
            line_height: LineHeights {
                md: line_height::MD,
                lg: line_height::LG,
            },
        }
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Line height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    /// Create an empty text style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = Some(lh);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Font Assets
// =============================================================================

/// Directory bundled fonts are packaged under
pub const FONT_ASSET_DIR: &str = "assets/fonts";

/// A bundled font file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontAsset {
    /// Family name the renderer registers
    pub family: String,
    /// Weight variant
    pub weight: FontWeight,
    /// Path relative to the package root
    pub path: String,
}

/// Fonts the packaging step must supply
///
/// Files are not checked here; a missing file surfaces in the renderer.
pub fn font_assets(typography: &TypographyTokens) -> Vec<FontAsset> {
    FontWeight::all()
        .into_iter()
        .map(|weight| {
            let family = typography.font_family.for_weight(weight).to_string();
            FontAsset {
                path: format!("{}/{}.ttf", FONT_ASSET_DIR, family),
                family,
                weight,
            }
        })
        .collect()
}
