//! Task creation placeholder
//!
//! The form and the write to a task store are not built yet.

use super::{placeholder, RenderContext, Screen, ScreenId};
use crate::components::Element;

const TITLE: &str = "افزودن وظیفه";
const BODY: &str = "فرم ایجاد وظیفه اینجا ساخته می‌شود.";

/// New task screen
#[derive(Debug, Clone, Copy, Default)]
pub struct NewTaskScreen;

impl Screen for NewTaskScreen {
    fn id(&self) -> ScreenId {
        ScreenId::NewTask
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        placeholder(ctx, "task-new", TITLE, BODY).into()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use super::*;
    use crate::navigation::RouteParams;

    #[test]
    fn test_new_task_texts() {
        let tree = render(&NewTaskScreen, &RouteParams::new());
        assert_eq!(tree.texts(), vec![TITLE, BODY]);
        assert!(tree.find_pressable("task.save").is_none());
    }
}
