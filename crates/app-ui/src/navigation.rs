//! Navigation system for Todo Smart
//!
//! This module provides:
//! - Route definitions with deep linking support
//! - The navigation topology, an explicit tree of groups and leaves
//! - Tab navigation with a stack of detail screens on top
//! - A path router for deep links
//!
//! The topology is:
//!
//! ```text
//! (root) stack
//! ├── (tabs) tabs
//! │   ├── index       خانه
//! │   ├── analytics   گزارش‌ها
//! │   └── settings    تنظیمات
//! ├── task/new
//! └── task/[id]
//! ```

use crate::screens::ScreenId;
use app_core::branding;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No route matches the path
    #[error("No route matches path: {0}")]
    UnknownPath(String),

    /// No leaf has this route name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// A required route parameter is absent
    #[error("Route {route} requires parameter '{param}'")]
    MissingParam {
        /// Route name
        route: &'static str,
        /// Parameter name
        param: &'static str,
    },

    /// Two children of one group share a name
    #[error("Duplicate route '{name}' in group '{group}'")]
    DuplicateRoute {
        /// Group name
        group: String,
        /// Child name
        name: String,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// Route names as declared in the topology
pub mod route_name {
    /// Root stack group
    pub const ROOT: &str = "(root)";
    /// Tab group
    pub const TABS: &str = "(tabs)";
    /// Home tab
    pub const HOME: &str = "index";
    /// Analytics tab
    pub const ANALYTICS: &str = "analytics";
    /// Settings tab
    pub const SETTINGS: &str = "settings";
    /// Task creation
    pub const TASK_NEW: &str = "task/new";
    /// Task detail
    pub const TASK_DETAIL: &str = "task/[id]";
}

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Home tab
    Home,
    /// Analytics tab
    Analytics,
    /// Settings tab
    Settings,
    /// Task creation
    NewTask,
    /// Task detail
    TaskDetail {
        /// Task identifier
        id: String,
    },
}

impl Route {
    /// Leaf name in the topology
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => route_name::HOME,
            Route::Analytics => route_name::ANALYTICS,
            Route::Settings => route_name::SETTINGS,
            Route::NewTask => route_name::TASK_NEW,
            Route::TaskDetail { .. } => route_name::TASK_DETAIL,
        }
    }

    /// Screen bound to this route
    pub fn screen(&self) -> ScreenId {
        match self {
            Route::Home => ScreenId::Home,
            Route::Analytics => ScreenId::Analytics,
            Route::Settings => ScreenId::Settings,
            Route::NewTask => ScreenId::NewTask,
            Route::TaskDetail { .. } => ScreenId::TaskDetail,
        }
    }

    /// Parameters carried by this route
    pub fn params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        if let Route::TaskDetail { id } = self {
            params.insert("id".to_string(), id.clone());
        }
        params
    }

    /// Resolve a leaf name and parameters to a route
    pub fn from_name(name: &str, params: &RouteParams) -> Result<Self> {
        match name {
            route_name::HOME => Ok(Route::Home),
            route_name::ANALYTICS => Ok(Route::Analytics),
            route_name::SETTINGS => Ok(Route::Settings),
            route_name::TASK_NEW => Ok(Route::NewTask),
            route_name::TASK_DETAIL => {
                let id = params
                    .get("id")
                    .filter(|id| !id.is_empty())
                    .ok_or(NavigationError::MissingParam {
                        route: route_name::TASK_DETAIL,
                        param: "id",
                    })?;
                Ok(Route::TaskDetail { id: id.clone() })
            }
            other => Err(NavigationError::UnknownRoute(other.to_string())),
        }
    }

    /// Convert route to URL path
    ///
    /// The mapping is lossy for a task whose id is `new`: its path is
    /// `/task/new`, which routes back to [`Route::NewTask`].
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Analytics => "/analytics".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NewTask => "/task/new".to_string(),
            Route::TaskDetail { id } => format!("/task/{}", urlencoding::encode(id)),
        }
    }

    /// Deep-link URL for this route
    pub fn to_deep_link(&self) -> String {
        branding::deep_link(&self.to_path())
    }

    /// Tab this route is the root of, if any
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Route::Home => Some(NavigationTab::Home),
            Route::Analytics => Some(NavigationTab::Analytics),
            Route::Settings => Some(NavigationTab::Settings),
            _ => None,
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "خانه",
            Route::Analytics => "گزارش‌ها",
            Route::Settings => "تنظیمات",
            Route::NewTask => "افزودن وظیفه",
            Route::TaskDetail { .. } => "جزئیات وظیفه",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Analytics tab
    Analytics,
    /// Settings tab
    Settings,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Analytics => Route::Analytics,
            NavigationTab::Settings => Route::Settings,
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        self.root_route().title()
    }

    /// Find the tab whose leaf has this name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|tab| tab.root_route().name() == name)
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 3] {
        [
            NavigationTab::Home,
            NavigationTab::Analytics,
            NavigationTab::Settings,
        ]
    }
}

// =============================================================================
// Navigation Topology
// =============================================================================

/// How a group presents its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Children pushed on top of each other
    Stack,
    /// Children selected from a tab bar
    Tabs,
}

/// Per-screen presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenOptions {
    /// Whether the navigator draws a header
    pub header_shown: bool,
    /// Title shown in the tab bar or header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            header_shown: false,
            title: None,
        }
    }
}

/// A leaf: one route bound to one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLeaf {
    /// Route name, unique within the parent group
    pub name: String,
    /// Bound screen
    pub screen: ScreenId,
    /// Presentation options
    pub options: ScreenOptions,
}

impl NavLeaf {
    /// Create a leaf
    pub fn new(name: impl Into<String>, screen: ScreenId) -> Self {
        Self {
            name: name.into(),
            screen,
            options: ScreenOptions::default(),
        }
    }

    /// Set the title option
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }
}

/// A group: ordered children, one active at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Group name
    pub name: String,
    /// Presentation
    pub kind: GroupKind,
    /// Options applied to every child
    pub screen_options: ScreenOptions,
    /// Children in declaration order
    children: Vec<NavNode>,
}

impl NavGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            screen_options: ScreenOptions::default(),
            children: Vec::new(),
        }
    }

    /// Append a child; names must be unique within the group
    pub fn with_child(mut self, child: impl Into<NavNode>) -> Result<Self> {
        let child = child.into();
        if self.children.iter().any(|c| c.name() == child.name()) {
            return Err(NavigationError::DuplicateRoute {
                group: self.name.clone(),
                name: child.name().to_string(),
            });
        }
        self.children.push(child);
        Ok(self)
    }

    /// Children in declaration order
    pub fn children(&self) -> &[NavNode] {
        &self.children
    }

    /// First-declared child
    pub fn initial_child(&self) -> Option<&NavNode> {
        self.children.first()
    }
}

/// A node of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum NavNode {
    /// Group of nodes
    Group(NavGroup),
    /// Single screen
    Leaf(NavLeaf),
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        NavNode::Group(group)
    }
}

impl From<NavLeaf> for NavNode {
    fn from(leaf: NavLeaf) -> Self {
        NavNode::Leaf(leaf)
    }
}

impl NavNode {
    /// Node name
    pub fn name(&self) -> &str {
        match self {
            NavNode::Group(g) => &g.name,
            NavNode::Leaf(l) => &l.name,
        }
    }
}

/// The application navigation tree, built once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    root: NavGroup,
}

impl NavTree {
    /// Wrap a root group
    pub fn new(root: NavGroup) -> Self {
        Self { root }
    }

    /// The application topology
    pub fn app() -> Result<Self> {
        let tabs = NavTabsBuilder::default()
            .tab(NavigationTab::Home)
            .tab(NavigationTab::Analytics)
            .tab(NavigationTab::Settings)
            .build()?;

        let root = NavGroup::new(route_name::ROOT, GroupKind::Stack)
            .with_child(tabs)?
            .with_child(NavLeaf::new(route_name::TASK_NEW, ScreenId::NewTask))?
            .with_child(NavLeaf::new(route_name::TASK_DETAIL, ScreenId::TaskDetail))?;

        Ok(Self::new(root))
    }

    /// Root group
    pub fn root(&self) -> &NavGroup {
        &self.root
    }

    /// All leaves, depth-first in declaration order
    pub fn leaves(&self) -> Vec<&NavLeaf> {
        let mut out = Vec::new();
        let mut stack: Vec<&NavNode> = self.root.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                NavNode::Leaf(leaf) => out.push(leaf),
                NavNode::Group(group) => stack.extend(group.children.iter().rev()),
            }
        }
        out
    }

    /// Find a leaf by route name
    pub fn find_leaf(&self, name: &str) -> Option<&NavLeaf> {
        self.leaves().into_iter().find(|leaf| leaf.name == name)
    }

    /// Group names from the root down to the leaf with this name
    pub fn path_to(&self, name: &str) -> Option<Vec<&str>> {
        fn walk<'a>(group: &'a NavGroup, name: &str, trail: &mut Vec<&'a str>) -> bool {
            trail.push(&group.name);
            for child in &group.children {
                match child {
                    NavNode::Leaf(leaf) if leaf.name == name => return true,
                    NavNode::Group(g) if walk(g, name, trail) => return true,
                    _ => {}
                }
            }
            trail.pop();
            false
        }

        let mut trail = Vec::new();
        walk(&self.root, name, &mut trail).then_some(trail)
    }

    /// Leaf reached by following first-declared children from the root
    pub fn initial_leaf(&self) -> Option<&NavLeaf> {
        let mut node = self.root.initial_child()?;
        loop {
            match node {
                NavNode::Leaf(leaf) => return Some(leaf),
                NavNode::Group(group) => node = group.initial_child()?,
            }
        }
    }

    /// Whether leaf names are unique within every group
    pub fn validate(&self) -> Result<()> {
        fn check(group: &NavGroup) -> Result<()> {
            let mut seen = HashSet::new();
            for child in &group.children {
                if !seen.insert(child.name()) {
                    return Err(NavigationError::DuplicateRoute {
                        group: group.name.clone(),
                        name: child.name().to_string(),
                    });
                }
                if let NavNode::Group(g) = child {
                    check(g)?;
                }
            }
            Ok(())
        }
        check(&self.root)
    }
}

/// Builds the tab group from [`NavigationTab`]s
#[derive(Debug, Default)]
struct NavTabsBuilder {
    tabs: Vec<NavigationTab>,
}

impl NavTabsBuilder {
    fn tab(mut self, tab: NavigationTab) -> Self {
        self.tabs.push(tab);
        self
    }

    fn build(self) -> Result<NavGroup> {
        self.tabs
            .into_iter()
            .try_fold(NavGroup::new(route_name::TABS, GroupKind::Tabs), |group, tab| {
                let route = tab.root_route();
                group.with_child(NavLeaf::new(route.name(), route.screen()).with_title(tab.label()))
            })
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
///
/// The active route is either the root of the active tab or the top of
/// the detail stack pushed over the tab group. Selecting a tab dismisses
/// the detail stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Detail routes pushed over the tabs (bottom to top)
    stack: Vec<Route>,
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the topology's initial leaf
    pub fn for_tree(tree: &NavTree) -> Self {
        let active_tab = tree
            .initial_leaf()
            .and_then(|leaf| NavigationTab::from_name(&leaf.name))
            .unwrap_or_default();
        Self {
            active_tab,
            ..Self::default()
        }
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        match self.stack.last() {
            Some(route) => route.clone(),
            None => self.active_tab.root_route(),
        }
    }

    /// Detail routes pushed over the tabs
    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    /// Navigate to a route
    ///
    /// Tab routes select the tab; other routes are pushed.
    pub fn navigate(&mut self, route: Route) {
        match route.tab() {
            Some(tab) => self.switch_tab(tab),
            None => {
                tracing::debug!(route = route.name(), "push");
                self.stack.push(route);
            }
        }
    }

    /// Navigate to a route by leaf name
    pub fn navigate_to_name(&mut self, name: &str, params: &RouteParams) -> Result<()> {
        let route = Route::from_name(name, params)?;
        self.navigate(route);
        Ok(())
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        if self.stack.pop().is_none() {
            return false;
        }
        tracing::debug!(route = self.current_route().name(), "pop");
        true
    }

    /// Switch to a tab, dismissing pushed details
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if self.active_tab == tab && self.stack.is_empty() {
            return;
        }
        tracing::debug!(tab = tab.root_route().name(), dismissed = self.stack.len(), "switch tab");
        self.stack.clear();
        self.active_tab = tab;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Reset entire navigation state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths and deep links to routes
pub struct Router {
    /// Route patterns, tried in registration order
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/analytics", |_| Some(Route::Analytics));
        router.add_route("/settings", |_| Some(Route::Settings));
        // Literal before the parameterized detail route
        router.add_route("/task/new", |_| Some(Route::NewTask));
        router.add_route("/task/:id", |params| {
            Some(Route::TaskDetail {
                id: params.get("id")?.clone(),
            })
        });

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path or deep link to a route
    ///
    /// Accepts `/task/42`, `todo-smart://task/42` and group-qualified
    /// paths such as `/(tabs)/analytics`.
    pub fn match_path(&self, path: &str) -> Result<Route> {
        let prefix = branding::deep_link_prefix();
        let stripped = path.strip_prefix(prefix.as_str()).unwrap_or(path);

        let pathname = match stripped.find(['?', '#']) {
            Some(idx) => &stripped[..idx],
            None => stripped,
        };

        let path_segments: Vec<&str> = pathname
            .split('/')
            .filter(|s| !s.is_empty())
            .filter(|s| !(s.starts_with('(') && s.ends_with(')')))
            .collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments) {
                if let Some(route) = (pattern.builder)(params) {
                    return Ok(route);
                }
            }
        }

        Err(NavigationError::UnknownPath(path.to_string()))
    }

    /// Match a pattern against path segments
    fn match_pattern(&self, pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(
                        name.clone(),
                        urlencoding::decode(actual).ok()?.into_owned(),
                    );
                }
            }
        }

        Some(params)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> Route {
        Route::TaskDetail { id: id.to_string() }
    }

    // ==========================================================================
    // Route Tests
    // ==========================================================================

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Analytics.to_path(), "/analytics");
        assert_eq!(Route::NewTask.to_path(), "/task/new");
        assert_eq!(detail("42").to_path(), "/task/42");
        assert_eq!(detail("a b").to_path(), "/task/a%20b");
    }

    #[test]
    fn test_route_deep_link() {
        assert_eq!(detail("42").to_deep_link(), "todo-smart://task/42");
        assert_eq!(Route::Home.to_deep_link(), "todo-smart://");
    }

    #[test]
    fn test_route_names_and_screens() {
        assert_eq!(Route::Home.name(), "index");
        assert_eq!(detail("1").name(), "task/[id]");
        assert_eq!(Route::NewTask.screen(), ScreenId::NewTask);
        assert_eq!(detail("1").params().get("id").map(String::as_str), Some("1"));
        assert!(Route::Settings.params().is_empty());
    }

    #[test]
    fn test_route_from_name() {
        let mut params = RouteParams::new();
        assert_eq!(Route::from_name("analytics", &params), Ok(Route::Analytics));
        assert_eq!(
            Route::from_name("task/[id]", &params),
            Err(NavigationError::MissingParam {
                route: "task/[id]",
                param: "id"
            })
        );
        params.insert("id".to_string(), "9".to_string());
        assert_eq!(Route::from_name("task/[id]", &params), Ok(detail("9")));
        assert!(matches!(
            Route::from_name("profile", &params),
            Err(NavigationError::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_route_title() {
        assert_eq!(Route::Home.title(), "خانه");
        assert_eq!(NavigationTab::Analytics.label(), "گزارش‌ها");
        assert_eq!(NavigationTab::Settings.label(), "تنظیمات");
    }

    // ==========================================================================
    // Topology Tests
    // ==========================================================================

    #[test]
    fn test_tree_has_five_unique_leaves() {
        let tree = NavTree::app().unwrap();
        let names: Vec<&str> = tree.leaves().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names.len(), 5);

        let unique: HashSet<&str> = names.iter().copied().collect();
        let expected: HashSet<&str> = ["task/new", "task/[id]", "index", "analytics", "settings"]
            .into_iter()
            .collect();
        assert_eq!(unique, expected);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_tree_shape() {
        let tree = NavTree::app().unwrap();
        let root = tree.root();
        assert_eq!(root.kind, GroupKind::Stack);
        assert_eq!(root.children().len(), 3);

        match &root.children()[0] {
            NavNode::Group(tabs) => {
                assert_eq!(tabs.name, "(tabs)");
                assert_eq!(tabs.kind, GroupKind::Tabs);
                assert!(!tabs.screen_options.header_shown);
                let titles: Vec<_> = tabs
                    .children()
                    .iter()
                    .map(|c| match c {
                        NavNode::Leaf(l) => l.options.title.clone().unwrap(),
                        NavNode::Group(_) => panic!("tabs hold leaves only"),
                    })
                    .collect();
                assert_eq!(titles, vec!["خانه", "گزارش‌ها", "تنظیمات"]);
            }
            other => panic!("expected tab group, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_leaf_is_home() {
        let tree = NavTree::app().unwrap();
        let leaf = tree.initial_leaf().unwrap();
        assert_eq!(leaf.name, "index");
        assert_eq!(leaf.screen, ScreenId::Home);
    }

    #[test]
    fn test_path_to() {
        let tree = NavTree::app().unwrap();
        assert_eq!(tree.path_to("settings"), Some(vec!["(root)", "(tabs)"]));
        assert_eq!(tree.path_to("task/new"), Some(vec!["(root)"]));
        assert_eq!(tree.path_to("missing"), None);
        assert!(tree.find_leaf("task/[id]").is_some());
    }

    #[test]
    fn test_duplicate_leaf_rejected() {
        let result = NavGroup::new("g", GroupKind::Stack)
            .with_child(NavLeaf::new("a", ScreenId::Home))
            .and_then(|g| g.with_child(NavLeaf::new("a", ScreenId::Settings)));
        assert_eq!(
            result,
            Err(NavigationError::DuplicateRoute {
                group: "g".to_string(),
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_same_name_in_different_groups_allowed() {
        let inner = NavGroup::new("inner", GroupKind::Tabs)
            .with_child(NavLeaf::new("a", ScreenId::Home))
            .unwrap();
        let tree = NavTree::new(
            NavGroup::new("outer", GroupKind::Stack)
                .with_child(inner)
                .and_then(|g| g.with_child(NavLeaf::new("a", ScreenId::Settings)))
                .unwrap(),
        );
        assert!(tree.validate().is_ok());
        assert_eq!(tree.leaves().len(), 2);
    }

    // ==========================================================================
    // Navigation State Tests
    // ==========================================================================

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::new();
        assert_eq!(state.active_tab, NavigationTab::Home);
        assert_eq!(state.current_route(), Route::Home);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_state_for_tree() {
        let state = NavigationState::for_tree(&NavTree::app().unwrap());
        assert_eq!(state.current_route(), Route::Home);
    }

    #[test]
    fn test_push_and_pop() {
        let mut state = NavigationState::new();
        state.navigate(Route::NewTask);
        assert_eq!(state.current_route(), Route::NewTask);
        assert!(state.can_go_back());

        state.navigate(detail("3"));
        assert_eq!(state.stack().len(), 2);

        assert!(state.go_back());
        assert_eq!(state.current_route(), Route::NewTask);
        assert!(state.go_back());
        assert_eq!(state.current_route(), Route::Home);

        // Can't pop past the tabs
        assert!(!state.go_back());
        assert_eq!(state.current_route(), Route::Home);
    }

    #[test]
    fn test_switch_tab() {
        let mut state = NavigationState::new();
        state.switch_tab(NavigationTab::Analytics);
        assert_eq!(state.current_route(), Route::Analytics);

        let before = state.clone();
        state.switch_tab(NavigationTab::Analytics);
        assert_eq!(state, before);
    }

    #[test]
    fn test_switch_tab_dismisses_details() {
        let mut state = NavigationState::new();
        state.navigate(Route::NewTask);
        state.navigate(detail("8"));

        state.switch_tab(NavigationTab::Settings);
        assert_eq!(state.active_tab, NavigationTab::Settings);
        assert_eq!(state.current_route(), Route::Settings);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_reselect_active_tab_dismisses_details() {
        let mut state = NavigationState::new();
        state.switch_tab(NavigationTab::Analytics);
        state.navigate(Route::NewTask);

        state.switch_tab(NavigationTab::Analytics);
        assert_eq!(state.current_route(), Route::Analytics);
        assert!(state.stack().is_empty());
    }

    #[test]
    fn test_navigate_to_tab_route_clears_stack() {
        let mut state = NavigationState::new();
        state.navigate(detail("1"));
        state.navigate(Route::Settings);
        assert!(!state.can_go_back());
        assert_eq!(state.active_tab, NavigationTab::Settings);
        assert_eq!(state.current_route(), Route::Settings);
    }

    #[test]
    fn test_detail_over_non_home_tab() {
        let mut state = NavigationState::new();
        state.switch_tab(NavigationTab::Settings);
        state.navigate(Route::NewTask);
        assert!(state.go_back());
        assert_eq!(state.current_route(), Route::Settings);
    }

    #[test]
    fn test_navigate_to_name() {
        let mut state = NavigationState::new();
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "5".to_string());
        state.navigate_to_name("task/[id]", &params).unwrap();
        assert_eq!(state.current_route(), detail("5"));

        assert!(state.navigate_to_name("nope", &params).is_err());
        assert_eq!(state.current_route(), detail("5"));
    }

    #[test]
    fn test_reset() {
        let mut state = NavigationState::new();
        state.switch_tab(NavigationTab::Settings);
        state.navigate(Route::NewTask);
        state.reset();
        assert_eq!(state, NavigationState::new());
    }

    // ==========================================================================
    // Router Tests
    // ==========================================================================

    #[test]
    fn test_router_match_tabs() {
        let router = Router::new();
        assert_eq!(router.match_path("/"), Ok(Route::Home));
        assert_eq!(router.match_path(""), Ok(Route::Home));
        assert_eq!(router.match_path("/analytics"), Ok(Route::Analytics));
        assert_eq!(router.match_path("/settings/"), Ok(Route::Settings));
    }

    #[test]
    fn test_router_new_task_precedes_detail() {
        let router = Router::new();
        assert_eq!(router.match_path("/task/new"), Ok(Route::NewTask));
        assert_eq!(router.match_path("/task/42"), Ok(detail("42")));
    }

    #[test]
    fn test_router_decodes_params() {
        let router = Router::new();
        assert_eq!(router.match_path("/task/a%20b"), Ok(detail("a b")));
        assert_eq!(router.match_path("/task/7?from=push"), Ok(detail("7")));
    }

    #[test]
    fn test_router_deep_links_and_groups() {
        let router = Router::new();
        assert_eq!(router.match_path("todo-smart://task/42"), Ok(detail("42")));
        assert_eq!(router.match_path("todo-smart://"), Ok(Route::Home));
        assert_eq!(router.match_path("/(tabs)/settings"), Ok(Route::Settings));
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(
            router.match_path("/nonexistent/path"),
            Err(NavigationError::UnknownPath("/nonexistent/path".to_string()))
        );
        assert!(router.match_path("/task").is_err());
    }

    #[test]
    fn test_router_round_trips_routes() {
        let router = Router::new();
        for route in [
            Route::Home,
            Route::Analytics,
            Route::Settings,
            Route::NewTask,
            detail("x/y"),
        ] {
            assert_eq!(router.match_path(&route.to_path()), Ok(route.clone()));
        }
    }

    #[test]
    fn test_detail_id_new_resolves_to_task_creation() {
        let router = Router::new();
        let path = detail("new").to_path();
        assert_eq!(path, "/task/new");
        assert_eq!(router.match_path(&path), Ok(Route::NewTask));
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_value(detail("42")).unwrap();
        assert_eq!(json["route"], "TaskDetail");
        assert_eq!(json["params"]["id"], "42");
        let parsed: Route = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, detail("42"));
    }

    #[test]
    fn test_tree_serialization() {
        let tree = NavTree::app().unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["root"]["children"][0]["node"], "group");
        assert_eq!(json["root"]["children"][1]["name"], "task/new");
    }
}
