//! Application screens
//!
//! Each screen is a stateless unit that renders a component tree from the
//! shared theme, the app configuration and the route parameters. Screens
//! never depend on each other.

mod analytics;
mod home;
mod settings;
mod task_detail;
mod task_new;

pub use analytics::AnalyticsScreen;
pub use home::{HomeScreen, ADD_TASK_ACTION};
pub use settings::SettingsScreen;
pub use task_detail::TaskDetailScreen;
pub use task_new::NewTaskScreen;

use crate::components::{Element, Spacing, Text, View};
use crate::navigation::RouteParams;
use crate::theme::Theme;
use crate::typography::TextStyle;
use app_core::AppConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Screen Contract
// =============================================================================

/// Identifies a screen component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    /// Home (task list placeholder)
    Home,
    /// Reports and charts placeholder
    Analytics,
    /// Settings placeholder
    Settings,
    /// Task creation form placeholder
    NewTask,
    /// Task detail placeholder
    TaskDetail,
}

impl ScreenId {
    /// All screens
    pub fn all() -> [ScreenId; 5] {
        [
            ScreenId::Home,
            ScreenId::Analytics,
            ScreenId::Settings,
            ScreenId::NewTask,
            ScreenId::TaskDetail,
        ]
    }
}

/// Everything a screen may read while rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Shared theme
    pub theme: &'a Theme,
    /// Application configuration
    pub config: &'a AppConfig,
    /// Route parameters of the active route
    pub params: &'a RouteParams,
}

impl<'a> RenderContext<'a> {
    /// Create a render context
    pub fn new(theme: &'a Theme, config: &'a AppConfig, params: &'a RouteParams) -> Self {
        Self {
            theme,
            config,
            params,
        }
    }

    /// Get a route parameter
    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Result of delivering a press event to a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The screen owns the handler
    Handled,
    /// The handler is not one of this screen's controls
    Unhandled,
}

/// A renderable screen
pub trait Screen: Send + Sync {
    /// Screen identifier
    fn id(&self) -> ScreenId;

    /// Render the component tree
    fn render(&self, ctx: &RenderContext<'_>) -> Element;

    /// Handle activation of a pressable control
    fn on_press(&self, _handler: &str) -> PressOutcome {
        PressOutcome::Unhandled
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Lookup from screen identifier to screen implementation
pub struct ScreenRegistry {
    screens: HashMap<ScreenId, Box<dyn Screen>>,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRegistry {
    /// Registry with every application screen
    pub fn new() -> Self {
        let screens: Vec<Box<dyn Screen>> = vec![
            Box::new(HomeScreen),
            Box::new(AnalyticsScreen),
            Box::new(SettingsScreen),
            Box::new(NewTaskScreen),
            Box::new(TaskDetailScreen),
        ];
        Self {
            screens: screens.into_iter().map(|s| (s.id(), s)).collect(),
        }
    }

    /// Get a screen
    pub fn get(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.screens.get(&id).map(|s| s.as_ref())
    }

    /// Number of registered screens
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

// =============================================================================
// Shared Layout
// =============================================================================

/// Full-screen root view: background, padding and writing direction
pub(crate) fn screen_root(ctx: &RenderContext<'_>, id: &str) -> View {
    View::new()
        .with_id(id)
        .with_flex(1.0)
        .with_background(ctx.theme.colors.bg.clone())
        .with_padding(Spacing::uniform(ctx.theme.spacing.md))
        .with_direction(ctx.config.direction())
}

/// Screen title
pub(crate) fn title(ctx: &RenderContext<'_>, content: &str) -> Text {
    let typo = &ctx.theme.typography;
    Text::new(content).with_text_style(
        TextStyle::new()
            .with_font_family(typo.font_family.bold.clone())
            .with_font_size(typo.size.xl)
            .with_color(ctx.theme.colors.text.clone()),
    )
}

/// Secondary line under the title
pub(crate) fn body(ctx: &RenderContext<'_>, content: &str) -> Text {
    Text::new(content)
        .with_margin_top(ctx.theme.spacing.sm)
        .with_text_style(TextStyle::new().with_color(ctx.theme.colors.text_muted.clone()))
}

/// Title plus one line of placeholder text
pub(crate) fn placeholder(ctx: &RenderContext<'_>, id: &str, heading: &str, line: &str) -> View {
    screen_root(ctx, id)
        .child(title(ctx, heading))
        .child(body(ctx, line))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use i18n::TextDirection;

    #[test]
    fn test_registry_has_every_screen() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.len(), 5);
        for id in ScreenId::all() {
            let screen = registry.get(id).expect("screen registered");
            assert_eq!(screen.id(), id);
        }
    }

    #[test]
    fn test_every_screen_uses_shared_root() {
        let registry = ScreenRegistry::new();
        let theme = Theme::new();
        for id in ScreenId::all() {
            let tree = render(registry.get(id).unwrap(), &RouteParams::new());
            let style = tree.style();
            assert_eq!(style.flex, Some(1.0));
            assert_eq!(style.background_color.as_deref(), Some(theme.colors.bg.as_str()));
            assert_eq!(style.padding, Some(Spacing::Uniform(theme.spacing.md)));
            assert_eq!(style.direction, Some(TextDirection::Rtl));
        }
    }

    #[test]
    fn test_screens_only_read_theme_values() {
        let registry = ScreenRegistry::new();
        let theme = Theme::new();
        let spacing: Vec<f32> = theme.spacing.entries().map(|(_, v)| v).collect();
        let radii: Vec<f32> = theme.radius.entries().map(|(_, v)| v).collect();
        let families = ["regular", "medium", "bold"]
            .map(|k| theme.typography.font_family.get(k).unwrap().to_string());

        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());

        for id in ScreenId::all() {
            let tree = render(registry.get(id).unwrap(), &params);
            for color in tree.colors() {
                assert!(theme.colors.contains(color), "{:?} uses {}", id, color);
            }
            for el in tree.descendants() {
                let style = el.style();
                if let Some(m) = style.margin_top {
                    assert!(spacing.contains(&m), "{:?} margin {}", id, m);
                }
                if let Some(p) = &style.padding {
                    for v in p.values().into_iter().filter(|v| *v != 0.0) {
                        assert!(spacing.contains(&v), "{:?} padding {}", id, v);
                    }
                }
                if let Some(r) = style.border_radius {
                    assert!(radii.contains(&r), "{:?} radius {}", id, r);
                }
                if let Element::Text(t) = el {
                    if let Some(f) = &t.text_style.font_family {
                        assert!(families.contains(f), "{:?} font {}", id, f);
                    }
                    if let Some(size) = t.text_style.font_size {
                        assert!(theme.typography.size.get("xs").unwrap() <= size);
                    }
                }
            }
        }
    }

    #[test]
    fn test_render_context_param() {
        let theme = Theme::new();
        let config = config();
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "7".to_string());
        let ctx = RenderContext::new(&theme, &config, &params);
        assert_eq!(ctx.param("id"), Some("7"));
        assert_eq!(ctx.param("missing"), None);
    }

    #[test]
    fn test_default_press_is_unhandled() {
        assert_eq!(AnalyticsScreen.on_press("anything"), PressOutcome::Unhandled);
    }
}
