//! Recording fakes for the dialog and navigation ports.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use time::macros::datetime;

use crate::application::ui::{ConfirmPrompt, Decision, Dialogs, Navigator, Notice};
use crate::domain::entities::{Post, PostId};

pub(crate) fn sample_post(id: PostId, title: &str, category: &str) -> Post {
    Post {
        id,
        title: title.into(),
        content: format!("{title} explained in more than ten characters"),
        category: category.into(),
        date: datetime!(2024-06-01 12:00 UTC),
        image_url: None,
    }
}

/// Answers confirmations from a script (cancelling once it runs dry) and
/// records every prompt and notice.
#[derive(Default)]
pub(crate) struct ScriptedDialogs {
    decisions: Mutex<VecDeque<Decision>>,
    prompts: Mutex<Vec<ConfirmPrompt>>,
    notices: Mutex<Vec<Notice>>,
}

impl ScriptedDialogs {
    pub(crate) fn new(decisions: Vec<Decision>) -> Self {
        Self {
            decisions: Mutex::new(decisions.into()),
            ..Default::default()
        }
    }

    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub(crate) fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Decision {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.decisions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Decision::Cancelled)
    }

    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Edit(PostId),
    List,
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_form_for_edit(&self, id: PostId) {
        self.routes.lock().unwrap().push(Route::Edit(id));
    }

    fn navigate_to_list(&self) {
        self.routes.lock().unwrap().push(Route::List);
    }
}
