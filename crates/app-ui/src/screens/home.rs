//! Home tab: task list placeholder and the add-task control

use super::{body, screen_root, title, PressOutcome, RenderContext, Screen, ScreenId};
use crate::components::{Alignment, Element, Pressable, Spacing, StyleProps, Text};
use crate::typography::TextStyle;

/// Handler identifier of the "+ add task" control
pub const ADD_TASK_ACTION: &str = "home.add_task";

const GREETING: &str = "سلام 👋";
const LIST_PLACEHOLDER: &str = "لیست کارها اینجا نمایش داده می‌شود.";
const ADD_TASK_LABEL: &str = "+ افزودن وظیفه";

/// Home screen
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeScreen;

impl HomeScreen {
    fn add_task_button(ctx: &RenderContext<'_>) -> Pressable {
        let theme = ctx.theme;
        Pressable::new(ADD_TASK_ACTION)
            .with_id("home-add-task")
            .with_accessibility_label(ADD_TASK_LABEL)
            .with_style(StyleProps {
                margin_top: Some(theme.spacing.lg),
                padding: Some(Spacing::vertical(theme.spacing.sm)),
                border_radius: Some(theme.radius.lg),
                background_color: Some(theme.colors.primary.clone()),
                align_items: Some(Alignment::Center),
                ..Default::default()
            })
            .child(
                Text::new(ADD_TASK_LABEL).with_text_style(
                    TextStyle::new()
                        .with_font_family(theme.typography.font_family.medium.clone())
                        .with_color(theme.colors.text.clone()),
                ),
            )
    }
}

impl Screen for HomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Home
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        screen_root(ctx, "home")
            .child(title(ctx, GREETING))
            .child(body(ctx, LIST_PLACEHOLDER))
            .child(Self::add_task_button(ctx))
            .into()
    }

    fn on_press(&self, handler: &str) -> PressOutcome {
        if handler != ADD_TASK_ACTION {
            return PressOutcome::Unhandled;
        }
        // Task creation has no data layer yet; activation is a no-op.
        tracing::debug!(handler, "add task pressed");
        PressOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use super::*;
    use crate::navigation::RouteParams;
    use crate::theme::Theme;

    #[test]
    fn test_home_texts() {
        let tree = render(&HomeScreen, &RouteParams::new());
        assert_eq!(tree.texts(), vec![GREETING, LIST_PLACEHOLDER, ADD_TASK_LABEL]);
    }

    #[test]
    fn test_add_task_button_style() {
        let theme = Theme::new();
        let tree = render(&HomeScreen, &RouteParams::new());
        let button = tree.find_pressable(ADD_TASK_ACTION).expect("add task button");

        assert_eq!(button.style.margin_top, Some(theme.spacing.lg));
        assert_eq!(button.style.padding, Some(Spacing::vertical(theme.spacing.sm)));
        assert_eq!(button.style.border_radius, Some(theme.radius.lg));
        assert_eq!(button.style.background_color.as_deref(), Some("#A8D8FF"));
        assert_eq!(button.style.align_items, Some(Alignment::Center));

        match &button.children[0] {
            Element::Text(label) => {
                assert_eq!(label.text_style.font_family.as_deref(), Some("Vazirmatn-Medium"));
                assert_eq!(label.text_style.color.as_deref(), Some("#1F2430"));
            }
            other => panic!("expected label text, got {:?}", other),
        }
    }

    #[test]
    fn test_title_style() {
        let tree = render(&HomeScreen, &RouteParams::new());
        match &tree.children()[0] {
            Element::Text(t) => {
                assert_eq!(t.text_style.font_family.as_deref(), Some("Vazirmatn-Bold"));
                assert_eq!(t.text_style.font_size, Some(24.0));
                assert_eq!(t.text_style.color.as_deref(), Some("#1F2430"));
            }
            other => panic!("expected title text, got {:?}", other),
        }
    }

    #[test]
    fn test_add_task_press_is_noop() {
        let before = render(&HomeScreen, &RouteParams::new());
        assert_eq!(HomeScreen.on_press(ADD_TASK_ACTION), PressOutcome::Handled);
        assert_eq!(HomeScreen.on_press(ADD_TASK_ACTION), PressOutcome::Handled);
        let after = render(&HomeScreen, &RouteParams::new());
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_press() {
        assert_eq!(HomeScreen.on_press("settings.save"), PressOutcome::Unhandled);
    }
}
