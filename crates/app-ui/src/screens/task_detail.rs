//! Task detail placeholder, addressed by the `id` route parameter

use super::{placeholder, RenderContext, Screen, ScreenId};
use crate::components::Element;
use crate::components::Text;
use crate::typography::TextStyle;

const TITLE: &str = "جزئیات وظیفه";
const BODY: &str = "جزئیات وظیفه با شناسه‌ی مسیر اینجا نمایش داده می‌شود.";
const ID_LABEL: &str = "شناسه";

/// Task detail screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskDetailScreen;

impl Screen for TaskDetailScreen {
    fn id(&self) -> ScreenId {
        ScreenId::TaskDetail
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let mut view = placeholder(ctx, "task-detail", TITLE, BODY);
        if let Some(id) = ctx.param("id") {
            let theme = ctx.theme;
            view = view.child(
                Text::new(format!("{}: {}", ID_LABEL, id))
                    .with_id("task-detail-id")
                    .with_margin_top(theme.spacing.xs)
                    .with_text_style(
                        TextStyle::new()
                            .with_font_family(theme.typography.font_family.regular.clone())
                            .with_font_size(theme.typography.size.sm)
                            .with_color(theme.colors.text_muted.clone()),
                    ),
            );
        }
        view.into()
    }
}
