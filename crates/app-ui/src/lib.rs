//! User interface for Todo Smart
//!
//! This crate provides the UI layer: design tokens, the theme, a small
//! component tree, the application screens and navigation.
//!
//! # Design System
//!
//! The design system is a pastel palette on a white background with the
//! Vazirmatn typeface. Layout is right-to-left throughout.
//! - Primary: pastel blue (#A8D8FF)
//! - Secondary: pastel pink (#FFC7E6)
//! - Accent: coral (#FF9AA2)
//!
//! # Modules
//!
//! - [`tokens`] - Color, spacing, radius and shadow tokens
//! - [`typography`] - Typography tokens, text styles and font assets
//! - [`theme`] - The aggregated theme
//! - [`components`] - Serializable component tree
//! - [`screens`] - Application screens
//! - [`navigation`] - Navigation topology, state and deep-link router
//!
//! # Example
//!
//! ```rust
//! use app_core::AppConfig;
//! use app_ui::navigation::{RouteParams, Router};
//! use app_ui::screens::{RenderContext, ScreenRegistry};
//! use app_ui::theme::Theme;
//!
//! let theme = Theme::shared();
//! let config = AppConfig::from_name(Some("Todo".to_string())).unwrap();
//! let screens = ScreenRegistry::new();
//!
//! let route = Router::new().match_path("/settings").unwrap();
//! let params: RouteParams = route.params();
//! let screen = screens.get(route.screen()).unwrap();
//! let tree = screen.render(&RenderContext::new(&theme, &config, &params));
//! assert!(tree.texts().contains(&"تنظیمات"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::Theme;

pub use tokens::{
    colors, radius, shadows, spacing, Color, ColorTokens, RadiusTokens, Shadow, ShadowTokens,
    SpacingTokens,
};

pub use typography::{font_assets, font_size, FontAsset, FontWeight, TextStyle, TypographyTokens};

pub use components::{Element, Pressable, StyleProps, Text, View};

pub use screens::{PressOutcome, RenderContext, Screen, ScreenId, ScreenRegistry};

pub use navigation::{
    GroupKind, NavGroup, NavLeaf, NavNode, NavTree, NavigationError, NavigationState,
    NavigationTab, Route, RouteParams, Router,
};
