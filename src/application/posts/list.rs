use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::store::{PostSnapshot, PostStore};
use crate::application::ui::{Decision, Dialogs, Navigator};
use crate::domain::categories::CategoryCatalog;
use crate::domain::entities::{Post, PostId};
use crate::domain::error::DomainError;
use crate::domain::filter::FilterState;

use super::types::{
    DeleteOutcome, PostListError, delete_prompt, deleted_notice, store_failure_notice,
};

/// Drives the post list: owns the filter criteria and derives the visible
/// posts from the store's latest snapshot on every read.
pub struct PostListController {
    store: Arc<dyn PostStore>,
    dialogs: Arc<dyn Dialogs>,
    navigator: Arc<dyn Navigator>,
    catalog: CategoryCatalog,
    posts: watch::Receiver<PostSnapshot>,
    filter: FilterState,
}

impl PostListController {
    pub fn new(
        store: Arc<dyn PostStore>,
        dialogs: Arc<dyn Dialogs>,
        navigator: Arc<dyn Navigator>,
        catalog: CategoryCatalog,
    ) -> Self {
        let posts = store.posts();
        let filter = FilterState::new(catalog.unselected());
        Self {
            store,
            dialogs,
            navigator,
            catalog,
            posts,
            filter,
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        debug!(
            target = "postdesk::list",
            search = %self.filter.search_text,
            "search text changed"
        );
    }

    /// Switch a catalog category on or off. Names are matched case-insensitively.
    pub fn set_category(&mut self, name: &str, selected: bool) -> Result<(), DomainError> {
        let category = self
            .catalog
            .resolve(name)
            .ok_or(DomainError::not_found("category"))?
            .to_string();
        debug!(
            target = "postdesk::list",
            category = %category,
            selected,
            "category selection changed"
        );
        self.filter.selected_categories.insert(category, selected);
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::new(self.catalog.unselected());
    }

    /// Posts passing the current criteria, in store order.
    pub fn visible_posts(&self) -> Vec<Post> {
        let snapshot = self.posts.borrow().clone();
        self.filter.apply(&snapshot)
    }

    /// Wait for the store to publish a new collection and return the
    /// recomputed list. `None` once the store has gone away.
    pub async fn next_change(&mut self) -> Option<Vec<Post>> {
        self.posts.changed().await.ok()?;
        let snapshot = self.posts.borrow_and_update().clone();
        Some(self.filter.apply(&snapshot))
    }

    pub fn edit_post(&self, id: PostId) {
        info!(target = "postdesk::list", post_id = id, "opening post for edit");
        self.navigator.open_form_for_edit(id);
    }

    /// Ask for confirmation, then delete and acknowledge. Nothing reaches the
    /// store when the user cancels.
    pub async fn delete_post(&self, id: PostId) -> Result<DeleteOutcome, PostListError> {
        match self.dialogs.confirm(&delete_prompt()).await {
            Decision::Cancelled => {
                info!(target = "postdesk::list", post_id = id, "deletion cancelled");
                Ok(DeleteOutcome::Cancelled)
            }
            Decision::Confirmed => {
                if let Err(err) = self.store.delete_post(id).await {
                    warn!(
                        target = "postdesk::list",
                        post_id = id,
                        error = %err,
                        "store rejected deletion"
                    );
                    self.dialogs.notify(store_failure_notice(&err)).await;
                    return Err(PostListError::StoreMutationFailed(err));
                }
                info!(target = "postdesk::list", post_id = id, "post deleted");
                self.dialogs.notify(deleted_notice()).await;
                Ok(DeleteOutcome::Deleted)
            }
        }
    }
}
