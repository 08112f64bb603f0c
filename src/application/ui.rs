//! Presentation ports: modal dialogs and view navigation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::PostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }
}

/// Acknowledgement dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, "Success!", text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, "Error!", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Modal dialogs. Both calls resolve only once the user dismisses the dialog;
/// callers chain their follow-up action after the await.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Decision;

    async fn notify(&self, notice: Notice);
}

pub trait Navigator: Send + Sync {
    fn open_form_for_edit(&self, id: PostId);

    fn navigate_to_list(&self);
}
