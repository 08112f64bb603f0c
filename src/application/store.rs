//! Post store contract.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

use crate::domain::entities::{Post, PostId};

/// Latest full collection as published by a store.
pub type PostSnapshot = Arc<[Post]>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("post {id} not found")]
    NotFound { id: PostId },
    #[error("post id {id} is already taken")]
    Duplicate { id: PostId },
}

/// Authoritative, observable collection of posts.
///
/// `posts` hands out a receiver that already holds the current collection and
/// observes every later mutation. Derived views must read from it rather than
/// keeping their own copies.
#[async_trait]
pub trait PostStore: Send + Sync {
    fn posts(&self) -> watch::Receiver<PostSnapshot>;

    async fn add_post(&self, post: Post) -> Result<(), StoreError>;

    async fn update_post(&self, post: Post) -> Result<(), StoreError>;

    async fn delete_post(&self, id: PostId) -> Result<(), StoreError>;
}
