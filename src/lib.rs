//! Todo Smart application shell
//!
//! The shell owns the process-wide values: one configuration, one theme,
//! the navigation tree and state, and the screen registry. Theme and
//! configuration are passed by shared reference into every render.
//!
//! # Example
//!
//! ```rust
//! use app_core::AppConfig;
//! use todo_smart::App;
//!
//! let config = AppConfig::from_name(Some("Todo".to_string())).unwrap();
//! let mut app = App::new(config).unwrap();
//!
//! app.open_path("todo-smart://task/42").unwrap();
//! let tree = app.render_current().unwrap();
//! assert!(tree.texts().contains(&"شناسه: 42"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use app_core::{AppConfig, ConfigError};
use app_ui::components::Element;
use app_ui::navigation::{
    NavTree, NavigationError, NavigationState, NavigationTab, Route, Router,
};
use app_ui::screens::{PressOutcome, RenderContext, ScreenId, ScreenRegistry};
use app_ui::theme::Theme;
use std::sync::Arc;

pub use app_core;
pub use app_ui;
pub use i18n;

/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Navigation failed
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// A route is bound to a screen that is not registered
    #[error("No screen registered for {0:?}")]
    MissingScreen(ScreenId),
}

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// The running application
pub struct App {
    config: Arc<AppConfig>,
    theme: Arc<Theme>,
    tree: NavTree,
    navigation: NavigationState,
    router: Router,
    screens: ScreenRegistry,
}

impl App {
    /// Boot the application with a loaded configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let tree = NavTree::app()?;
        tree.validate()?;

        let screens = ScreenRegistry::new();
        for leaf in tree.leaves() {
            if screens.get(leaf.screen).is_none() {
                return Err(AppError::MissingScreen(leaf.screen));
            }
        }

        let navigation = NavigationState::for_tree(&tree);
        tracing::info!(
            name = %config.name(),
            route = navigation.current_route().name(),
            screens = screens.len(),
            "Application started"
        );

        Ok(Self {
            config: Arc::new(config),
            theme: Theme::shared(),
            tree,
            navigation,
            router: Router::new(),
            screens,
        })
    }

    /// Boot the application from the process environment
    ///
    /// Fails before anything renders when `APP_NAME` is missing.
    pub fn from_env() -> Result<Self> {
        Self::new(AppConfig::from_env()?)
    }

    /// Shared configuration
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Shared theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.theme)
    }

    /// Navigation topology
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Active route
    pub fn current_route(&self) -> Route {
        self.navigation.current_route()
    }

    /// Render a route
    pub fn render(&self, route: &Route) -> Result<Element> {
        let id = route.screen();
        let screen = self.screens.get(id).ok_or(AppError::MissingScreen(id))?;
        let params = route.params();
        Ok(screen.render(&RenderContext::new(&self.theme, &self.config, &params)))
    }

    /// Render the active route
    pub fn render_current(&self) -> Result<Element> {
        self.render(&self.current_route())
    }

    /// Open a path or deep link
    pub fn open_path(&mut self, path: &str) -> Result<Route> {
        let route = self.router.match_path(path)?;
        tracing::debug!(path, route = route.name(), "open path");
        self.navigate(route.clone());
        Ok(route)
    }

    /// Navigate to a route
    pub fn navigate(&mut self, route: Route) {
        self.navigation.navigate(route);
    }

    /// Select a tab, dismissing any pushed detail screens
    pub fn select_tab(&mut self, tab: NavigationTab) {
        self.navigation.switch_tab(tab);
    }

    /// Pop the top detail screen; `false` at the root
    pub fn go_back(&mut self) -> bool {
        self.navigation.go_back()
    }

    /// Deliver a press to the active screen
    pub fn press(&self, handler: &str) -> PressOutcome {
        let id = self.current_route().screen();
        let outcome = self
            .screens
            .get(id)
            .map(|screen| screen.on_press(handler))
            .unwrap_or(PressOutcome::Unhandled);
        tracing::debug!(handler, screen = ?id, outcome = ?outcome, "press");
        outcome
    }
}
