//! Start-up seeding of the post store from a JSON file.

use std::path::Path;

use tracing::info;

use crate::domain::categories::CategoryCatalog;
use crate::domain::entities::Post;

use super::error::InfraError;

/// Read a JSON array of posts. Every post must use a catalog category.
pub async fn load_posts(path: &Path, catalog: &CategoryCatalog) -> Result<Vec<Post>, InfraError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let posts = parse_posts(&raw, catalog)?;
    info!(
        target = "postdesk::seed",
        path = %path.display(),
        count = posts.len(),
        "Loaded seed posts"
    );
    Ok(posts)
}

pub fn parse_posts(raw: &str, catalog: &CategoryCatalog) -> Result<Vec<Post>, InfraError> {
    let posts: Vec<Post> = serde_json::from_str(raw)
        .map_err(|err| InfraError::seed(format!("invalid JSON: {err}")))?;

    if let Some(post) = posts.iter().find(|post| !catalog.contains(&post.category)) {
        return Err(InfraError::seed(format!(
            "post {} uses unknown category `{}`",
            post.id, post.category
        )));
    }

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"[
        {
            "id": 1,
            "title": "Go Basics",
            "content": "intro to goroutines and more text",
            "category": "Technology",
            "date": "2024-04-01T09:00:00Z"
        },
        {
            "id": 2,
            "title": "Eat Well",
            "content": "vegetables, mostly",
            "category": "Health",
            "date": "2024-04-02T09:00:00Z",
            "imageUrl": "https://example.com/salad.jpg"
        }
    ]"#;

    #[test]
    fn parses_posts_with_optional_images() {
        let posts = parse_posts(SEED, &CategoryCatalog::default()).expect("valid seed");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].image_url, None);
        assert_eq!(
            posts[1].image_url.as_deref(),
            Some("https://example.com/salad.jpg")
        );
    }

    #[test]
    fn rejects_unknown_categories() {
        let catalog = CategoryCatalog::new(["Technology"]).expect("valid catalog");
        let err = parse_posts(SEED, &catalog).expect_err("Health is unknown");
        assert_eq!(
            err.to_string(),
            "seed file rejected: post 2 uses unknown category `Health`"
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_posts("{", &CategoryCatalog::default()).expect_err("malformed");
        assert!(matches!(err, InfraError::Seed { .. }));
    }

    #[tokio::test]
    async fn reports_missing_files_as_io_errors() {
        let err = load_posts(Path::new("/no/such/seed.json"), &CategoryCatalog::default())
            .await
            .expect_err("missing");
        assert!(matches!(err, InfraError::Io(_)));
    }
}
