//! Editable form state for a post and its validation rules.

use std::fmt;

use time::OffsetDateTime;

use crate::domain::entities::{Post, PostId};

pub const TITLE_MIN_CHARS: usize = 3;
pub const CONTENT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Content,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Category => "category",
            FormField::Content => "content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    Required(FormField),
    TooShort { field: FormField, min_chars: usize },
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::Required(field) => write!(f, "{} is required", field.as_str()),
            FieldViolation::TooShort { field, min_chars } => write!(
                f,
                "{} must be at least {min_chars} characters",
                field.as_str()
            ),
        }
    }
}

/// User-editable values of the post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormFields {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl PostFormFields {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            category: post.category.clone(),
            content: post.content.clone(),
        }
    }

    /// Every violated rule, in field order. Empty when the form is valid.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        check_min_chars(&self.title, FormField::Title, TITLE_MIN_CHARS, &mut violations);
        if self.category.is_empty() {
            violations.push(FieldViolation::Required(FormField::Category));
        }
        check_min_chars(
            &self.content,
            FormField::Content,
            CONTENT_MIN_CHARS,
            &mut violations,
        );
        violations
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn into_post(
        self,
        id: PostId,
        date: OffsetDateTime,
        image_url: Option<String>,
    ) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            date,
            image_url,
        }
    }
}

fn check_min_chars(
    value: &str,
    field: FormField,
    min_chars: usize,
    violations: &mut Vec<FieldViolation>,
) {
    if value.is_empty() {
        violations.push(FieldViolation::Required(field));
    } else if value.chars().count() < min_chars {
        violations.push(FieldViolation::TooShort { field, min_chars });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing an existing post; its id and date survive submission.
    Edit { id: PostId, date: OffsetDateTime },
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormState {
    pub fields: PostFormFields,
    pub mode: FormMode,
    pub selected_image: Option<String>,
}

impl PostFormState {
    pub fn load(&mut self, post: &Post) {
        self.fields = PostFormFields::from_post(post);
        self.selected_image = post.image_url.clone();
        self.mode = FormMode::Edit {
            id: post.id,
            date: post.date,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
