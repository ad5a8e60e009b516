//! Analytics tab placeholder

use super::{placeholder, RenderContext, Screen, ScreenId};
use crate::components::Element;

const TITLE: &str = "گزارش‌ها";
const BODY: &str = "نمودارها و خلاصه‌ها اینجا نمایش داده می‌شود.";

/// Reports screen
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsScreen;

impl Screen for AnalyticsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Analytics
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        placeholder(ctx, "analytics", TITLE, BODY).into()
    }
}
