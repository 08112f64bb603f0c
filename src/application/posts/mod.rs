mod form;
mod list;
pub mod types;

pub use form::PostFormController;
pub use list::PostListController;
pub use types::{DeleteOutcome, PostFormError, PostListError, SubmitOutcome};

#[cfg(test)]
pub(crate) mod testing;
