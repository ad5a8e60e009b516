//! Settings tab placeholder

use super::{placeholder, RenderContext, Screen, ScreenId};
use crate::components::Element;

const TITLE: &str = "تنظیمات";
const BODY: &str = "تنظیمات نوتیفیکیشن و اپ اینجا خواهد بود.";

/// Settings screen
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Settings
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        placeholder(ctx, "settings", TITLE, BODY).into()
    }
}
