//! In-memory post store publishing every change through a watch channel.

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use metrics::counter;
use tokio::sync::watch;
use tracing::debug;

use crate::application::store::{PostSnapshot, PostStore, StoreError};
use crate::domain::entities::{Post, PostId};

use super::lock::mutex_lock;

const SOURCE: &str = "infra::memory";
const MUTATIONS_METRIC: &str = "postdesk_store_mutations_total";

pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
    sender: watch::Sender<PostSnapshot>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(PostSnapshot::from(Vec::new()));
        Self {
            posts: Mutex::new(Vec::new()),
            sender,
        }
    }

    /// Start from an existing collection, rejecting duplicate ids.
    pub fn with_posts(posts: Vec<Post>) -> Result<Self, StoreError> {
        let mut seen = BTreeSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(StoreError::Duplicate { id: post.id });
            }
        }

        let (sender, _) = watch::channel(PostSnapshot::from(posts.as_slice()));
        Ok(Self {
            posts: Mutex::new(posts),
            sender,
        })
    }

    pub fn len(&self) -> usize {
        mutex_lock(&self.posts, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn publish(&self, posts: &[Post], op: &'static str) {
        self.sender.send_replace(PostSnapshot::from(posts));
        counter!(MUTATIONS_METRIC, "op" => op).increment(1);
        debug!(
            target = "postdesk::store",
            op,
            total = posts.len(),
            "post store published snapshot"
        );
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    fn posts(&self) -> watch::Receiver<PostSnapshot> {
        self.sender.subscribe()
    }

    async fn add_post(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = mutex_lock(&self.posts, SOURCE, "add_post");
        if posts.iter().any(|existing| existing.id == post.id) {
            return Err(StoreError::Duplicate { id: post.id });
        }
        posts.push(post);
        self.publish(&posts, "add");
        Ok(())
    }

    async fn update_post(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = mutex_lock(&self.posts, SOURCE, "update_post");
        let id = post.id;
        let slot = posts
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound { id })?;
        *slot = post;
        self.publish(&posts, "update");
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), StoreError> {
        let mut posts = mutex_lock(&self.posts, SOURCE, "delete_post");
        let index = posts
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(StoreError::NotFound { id })?;
        posts.remove(index);
        self.publish(&posts, "delete");
        Ok(())
    }
}
