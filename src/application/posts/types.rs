use thiserror::Error;

use crate::application::store::StoreError;
use crate::application::ui::{ConfirmPrompt, Notice, NoticeKind};
use crate::domain::entities::PostId;
use crate::domain::form::FieldViolation;
use crate::domain::images::ImageError;

pub(crate) const INVALID_FORM_TEXT: &str = "Please fill in all required fields correctly.";
pub(crate) const POST_ADDED_TEXT: &str = "Post added successfully.";
pub(crate) const POST_UPDATED_TEXT: &str = "Post updated successfully.";
pub(crate) const IMAGE_FAILED_TEXT: &str = "The selected image could not be loaded.";

#[derive(Debug, Error)]
pub enum PostFormError {
    #[error("form is invalid: {}", describe_violations(.violations))]
    InvalidForm { violations: Vec<FieldViolation> },
    #[error("image could not be loaded: {0}")]
    ImageDecode(#[from] ImageError),
    #[error("store rejected the post: {0}")]
    StoreMutationFailed(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PostListError {
    #[error("store rejected the deletion: {0}")]
    StoreMutationFailed(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(PostId),
    Updated(PostId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub(crate) fn delete_prompt() -> ConfirmPrompt {
    ConfirmPrompt {
        kind: NoticeKind::Warning,
        title: "Are you sure?".into(),
        text: "Do you really want to delete this post? This action cannot be undone!".into(),
        confirm_label: "Yes, delete it!".into(),
    }
}

pub(crate) fn deleted_notice() -> Notice {
    Notice::new(NoticeKind::Success, "Deleted!", "The post has been deleted.")
}

pub(crate) fn store_failure_notice(error: &StoreError) -> Notice {
    Notice::error(format!("The change could not be saved: {error}."))
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
