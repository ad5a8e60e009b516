//! Theme for Todo Smart
//!
//! The theme composes the five token sets into one immutable value:
//!
//! - `colors` - [`ColorTokens`]
//! - `spacing` - [`SpacingTokens`]
//! - `typography` - [`TypographyTokens`]
//! - `radius` - [`RadiusTokens`]
//! - `shadows` - [`ShadowTokens`]
//!
//! A single instance is built at startup and shared by reference with
//! every render call. There are no theme variants.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::Theme;
//!
//! let theme = Theme::shared();
//! let bg = &theme.colors.bg;
//! let padding = theme.spacing.md;
//! assert_eq!(bg, "#FFFFFF");
//! assert_eq!(padding, 16.0);
//! ```

use crate::tokens::{ColorTokens, RadiusTokens, ShadowTokens, SpacingTokens};
use crate::typography::TypographyTokens;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Color tokens
    pub colors: ColorTokens,
    /// Spacing scale
    pub spacing: SpacingTokens,
    /// Typography tokens
    pub typography: TypographyTokens,
    /// Border radius scale
    pub radius: RadiusTokens,
    /// Shadow presets
    pub shadows: ShadowTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Category names, in field order
    pub const CATEGORIES: [&'static str; 5] =
        ["colors", "spacing", "typography", "radius", "shadows"];

    /// Compose the theme from the token sets
    pub fn new() -> Self {
        Self {
            colors: ColorTokens::default(),
            spacing: SpacingTokens::default(),
            typography: TypographyTokens::default(),
            radius: RadiusTokens::default(),
            shadows: ShadowTokens::default(),
        }
    }

    /// Compose the theme behind a shared pointer
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}
