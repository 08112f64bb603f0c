use std::sync::Mutex;

use crate::application::ui::Navigator;
use crate::domain::entities::PostId;
use crate::infra::lock::mutex_lock;

const SOURCE: &str = "infra::shell::router";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    EditPost(PostId),
}

/// Navigator that parks the most recent request until the shell picks it up.
#[derive(Debug, Default)]
pub struct Router {
    pending: Mutex<Option<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Route> {
        mutex_lock(&self.pending, SOURCE, "take").take()
    }

    fn request(&self, route: Route) {
        *mutex_lock(&self.pending, SOURCE, "request") = Some(route);
    }
}

impl Navigator for Router {
    fn open_form_for_edit(&self, id: PostId) {
        self.request(Route::EditPost(id));
    }

    fn navigate_to_list(&self) {
        self.request(Route::List);
    }
}
