//! Domain entities held by the post store.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::error::DomainError;

/// Identifier of a post; unique within a store and never reassigned.
pub type PostId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Locate a post by id within a snapshot.
pub fn find_post(posts: &[Post], id: PostId) -> Result<&Post, DomainError> {
    posts
        .iter()
        .find(|post| post.id == id)
        .ok_or(DomainError::not_found("post"))
}

/// Largest id present in a snapshot, if any.
pub fn max_post_id(posts: &[Post]) -> Option<PostId> {
    posts.iter().map(|post| post.id).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn post(id: PostId) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            content: "some content for the post".into(),
            category: "Technology".into(),
            date: datetime!(2024-05-01 10:00 UTC),
            image_url: None,
        }
    }

    #[test]
    fn find_post_reports_missing_ids() {
        let posts = vec![post(1), post(7)];
        assert_eq!(find_post(&posts, 7).expect("present").id, 7);
        assert!(matches!(
            find_post(&posts, 3),
            Err(DomainError::NotFound { entity: "post" })
        ));
    }

    #[test]
    fn max_post_id_of_empty_snapshot_is_none() {
        assert_eq!(max_post_id(&[]), None);
        assert_eq!(max_post_id(&[post(4), post(9), post(2)]), Some(9));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut value = post(1);
        value.image_url = Some("https://example.com/a.png".into());
        let json = serde_json::to_value(&value).expect("serializable");
        assert_eq!(json["imageUrl"], "https://example.com/a.png");
        assert_eq!(json["date"], "2024-05-01T10:00:00Z");
    }
}
