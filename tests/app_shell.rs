//! Application shell integration tests
//!
//! Boot, rendering and press dispatch through the public `App` API.

use app_core::{AppConfig, ConfigError, APP_NAME_VAR};
use app_ui::components::Element;
use app_ui::screens::{PressOutcome, ADD_TASK_ACTION};
use app_ui::tokens::Color;
use i18n::TextDirection;
use todo_smart::{App, AppError};

fn app() -> App {
    App::new(AppConfig::from_name(Some("Todo".to_string())).unwrap()).unwrap()
}

/// The only test in this binary that touches the process environment
#[test]
fn test_boot_from_environment() {
    std::env::set_var(APP_NAME_VAR, "Todo");
    let app = App::from_env().unwrap();
    assert_eq!(app.config().name(), "Todo");
    assert_eq!(app.config().locale().to_string(), "fa-IR");
    assert_eq!(app.config().direction(), TextDirection::Rtl);

    std::env::set_var(APP_NAME_VAR, "  ");
    assert!(matches!(
        App::from_env(),
        Err(AppError::Config(ConfigError::MissingAppName(_)))
    ));

    std::env::remove_var(APP_NAME_VAR);
    assert!(matches!(
        App::from_env(),
        Err(AppError::Config(ConfigError::MissingAppName(_)))
    ));
}

#[test]
fn test_boot_starts_on_home() {
    let app = app();
    let tree = app.render_current().unwrap();
    assert_eq!(
        tree.texts(),
        vec![
            "سلام 👋",
            "لیست کارها اینجا نمایش داده می‌شود.",
            "+ افزودن وظیفه"
        ]
    );
    assert!(!app.navigation().can_go_back());
}

#[test]
fn test_deserialized_config_keeps_invariants() {
    let empty = serde_json::from_str::<AppConfig>(
        r#"{"name":"","locale":"en-US","direction":"ltr"}"#,
    );
    assert!(empty.is_err());

    let config: AppConfig =
        serde_json::from_str(r#"{"name":"Todo","locale":"en-US","direction":"ltr"}"#).unwrap();
    let app = App::new(config).unwrap();
    let json = serde_json::to_value(app.render_current().unwrap()).unwrap();
    assert_eq!(json["style"]["direction"], "rtl");
    assert_eq!(app.config().locale().to_string(), "fa-IR");
}

#[test]
fn test_config_serializes_as_record() {
    let app = app();
    let json = serde_json::to_value(app.config().as_ref()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Todo", "locale": "fa-IR", "direction": "rtl"})
    );
}

#[test]
fn test_theme_and_config_are_shared() {
    let app = app();
    assert!(std::sync::Arc::ptr_eq(&app.theme(), &app.theme()));
    assert!(std::sync::Arc::ptr_eq(&app.config(), &app.config()));
}

#[test]
fn test_home_press_is_noop() {
    let mut app = app();
    app.open_path("/analytics").unwrap();
    app.open_path("/").unwrap();

    let before = app.navigation().clone();
    let tree = app.render_current().unwrap();
    assert!(tree.find_pressable(ADD_TASK_ACTION).is_some());

    assert_eq!(app.press(ADD_TASK_ACTION), PressOutcome::Handled);
    assert_eq!(app.press(ADD_TASK_ACTION), PressOutcome::Handled);
    assert_eq!(app.navigation(), &before);
    assert_eq!(app.render_current().unwrap(), tree);
}

#[test]
fn test_press_on_other_screen_is_unhandled() {
    let mut app = app();
    app.open_path("/settings").unwrap();
    assert_eq!(app.press(ADD_TASK_ACTION), PressOutcome::Unhandled);
}

#[test]
fn test_every_route_renders_theme_values_only() {
    let mut app = app();
    let theme = app.theme();
    let mut palette: Vec<Color> = app_ui::tokens::ColorTokens::KEYS
        .iter()
        .filter_map(|k| theme.colors.get(k).map(str::to_string))
        .collect();
    palette.push(theme.shadows.card.shadow_color.clone());

    for path in ["/", "/analytics", "/settings", "/task/new", "/task/7"] {
        app.open_path(path).unwrap();
        let tree = app.render_current().unwrap();
        assert!(matches!(tree, Element::View(_)), "{} root is a view", path);
        for color in tree.colors() {
            assert!(
                palette.iter().any(|c| c.eq_ignore_ascii_case(color)),
                "{} uses {}",
                path,
                color
            );
        }
    }
}

#[test]
fn test_rendered_tree_serializes() {
    let mut app = app();
    app.open_path("/task/new").unwrap();
    let json = serde_json::to_value(app.render_current().unwrap()).unwrap();
    assert_eq!(json["type"], "view");
    assert_eq!(json["style"]["direction"], "rtl");
    assert_eq!(json["children"][0]["content"], "افزودن وظیفه");
}
