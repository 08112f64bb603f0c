use std::path::Path;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::store::{PostSnapshot, PostStore};
use crate::application::ui::{Dialogs, Navigator, Notice};
use crate::domain::categories::CategoryCatalog;
use crate::domain::entities::{Post, PostId, find_post, max_post_id};
use crate::domain::error::DomainError;
use crate::domain::form::{FormMode, PostFormFields, PostFormState};
use crate::domain::ids::PostIdGenerator;
use crate::domain::images::{ImageError, encode_data_url};

use super::types::{
    IMAGE_FAILED_TEXT, INVALID_FORM_TEXT, POST_ADDED_TEXT, POST_UPDATED_TEXT, PostFormError,
    SubmitOutcome, store_failure_notice,
};

/// Drives the create/edit form.
pub struct PostFormController {
    store: Arc<dyn PostStore>,
    dialogs: Arc<dyn Dialogs>,
    navigator: Arc<dyn Navigator>,
    catalog: CategoryCatalog,
    ids: Arc<PostIdGenerator>,
    image_limit: usize,
    posts: watch::Receiver<PostSnapshot>,
    state: PostFormState,
}

impl PostFormController {
    pub fn new(
        store: Arc<dyn PostStore>,
        dialogs: Arc<dyn Dialogs>,
        navigator: Arc<dyn Navigator>,
        catalog: CategoryCatalog,
        ids: Arc<PostIdGenerator>,
        image_limit: usize,
    ) -> Self {
        let posts = store.posts();
        Self {
            store,
            dialogs,
            navigator,
            catalog,
            ids,
            image_limit,
            posts,
            state: PostFormState::default(),
        }
    }

    pub fn state(&self) -> &PostFormState {
        &self.state
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn is_editing(&self) -> bool {
        self.state.mode.is_editing()
    }

    /// Open the form, optionally for the post named by `id_param`.
    ///
    /// A missing, non-numeric or unknown id leaves the form blank in create
    /// mode.
    pub fn open(&mut self, id_param: Option<&str>) -> FormMode {
        self.state.reset();
        let Some(raw) = id_param else {
            return self.state.mode;
        };

        let Ok(id) = raw.trim().parse::<PostId>() else {
            debug!(target = "postdesk::form", id = raw, "ignoring non-numeric post id");
            return self.state.mode;
        };

        let snapshot = self.posts.borrow_and_update().clone();
        match find_post(&snapshot, id) {
            Ok(post) => self.load_post_for_edit(post),
            Err(err) => {
                debug!(
                    target = "postdesk::form",
                    post_id = id,
                    error = %err,
                    "staying in create mode"
                );
            }
        }
        self.state.mode
    }

    pub fn load_post_for_edit(&mut self, post: &Post) {
        info!(target = "postdesk::form", post_id = post.id, "loaded post for edit");
        self.state.load(post);
    }

    pub fn reset_form(&mut self) {
        self.state.reset();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.fields.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.fields.content = content.into();
    }

    /// Pick a category from the catalog. Names are matched case-insensitively.
    pub fn set_category(&mut self, name: &str) -> Result<(), DomainError> {
        let category = self
            .catalog
            .resolve(name)
            .ok_or(DomainError::not_found("category"))?;
        self.state.fields.category = category.to_string();
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.state.selected_image = None;
    }

    /// Read an image from disk and keep it as the selected image.
    ///
    /// On failure the previous selection stays in place and an error notice
    /// is shown.
    pub async fn select_image(&mut self, path: &Path) -> Result<(), PostFormError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        let encoded = match tokio::fs::read(path).await {
            Ok(bytes) => encode_data_url(&file_name, &bytes, self.image_limit),
            Err(err) => Err(ImageError::Io(err)),
        };

        match encoded {
            Ok(url) => {
                debug!(
                    target = "postdesk::form",
                    file = %path.display(),
                    encoded_len = url.len(),
                    "image selected"
                );
                self.state.selected_image = Some(url);
                Ok(())
            }
            Err(err) => {
                warn!(
                    target = "postdesk::form",
                    file = %path.display(),
                    error = %err,
                    "image selection failed"
                );
                self.dialogs.notify(Notice::error(IMAGE_FAILED_TEXT)).await;
                Err(PostFormError::ImageDecode(err))
            }
        }
    }

    /// Validate and hand the form to the store.
    ///
    /// In edit mode the loaded post is replaced (same id and date); otherwise a
    /// new post is added under a freshly minted id. After the success notice
    /// the form is reset and the list view requested.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, PostFormError> {
        let violations = self.state.fields.validate();
        if !violations.is_empty() {
            info!(
                target = "postdesk::form",
                violations = violations.len(),
                "rejected invalid form"
            );
            self.dialogs.notify(Notice::error(INVALID_FORM_TEXT)).await;
            return Err(PostFormError::InvalidForm { violations });
        }

        let fields: PostFormFields = self.state.fields.clone();
        let image = self.state.selected_image.clone();

        let (outcome, result, text) = match self.state.mode {
            FormMode::Edit { id, date } => {
                let post = fields.into_post(id, date, image);
                (
                    SubmitOutcome::Updated(id),
                    self.store.update_post(post).await,
                    POST_UPDATED_TEXT,
                )
            }
            FormMode::Create => {
                let snapshot = self.posts.borrow().clone();
                let id = self.ids.next_id(max_post_id(&snapshot));
                let post = fields.into_post(id, OffsetDateTime::now_utc(), image);
                (
                    SubmitOutcome::Created(id),
                    self.store.add_post(post).await,
                    POST_ADDED_TEXT,
                )
            }
        };

        if let Err(err) = result {
            warn!(
                target = "postdesk::form",
                outcome = ?outcome,
                error = %err,
                "store rejected submission"
            );
            self.dialogs.notify(store_failure_notice(&err)).await;
            return Err(PostFormError::StoreMutationFailed(err));
        }

        info!(target = "postdesk::form", outcome = ?outcome, "post submitted");
        self.dialogs.notify(Notice::success(text)).await;
        self.reset_form();
        self.navigator.navigate_to_list();
        Ok(outcome)
    }
}
