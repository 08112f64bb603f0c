//! Plain-text views of the list and the form.

use std::fmt::Write as _;

use crate::domain::entities::Post;
use crate::domain::filter::FilterState;
use crate::domain::form::{FormMode, PostFormState};

const PREVIEW_CHARS: usize = 60;

pub fn render_list(posts: &[Post], filter: &FilterState) -> String {
    let mut out = String::new();
    let noun = if posts.len() == 1 { "post" } else { "posts" };
    let _ = write!(out, "{} {noun}", posts.len());
    if !filter.search_text.is_empty() {
        let _ = write!(out, " matching {:?}", filter.search_text);
    }
    let active: Vec<&str> = filter.active_categories().collect();
    if !active.is_empty() {
        let _ = write!(out, " in {}", active.join(", "));
    }

    for post in posts {
        let _ = write!(
            out,
            "\n#{} {} [{}] {}",
            post.id,
            post.title,
            post.category,
            post.date.date()
        );
        if post.image_url.is_some() {
            out.push_str(" (image)");
        }
        let _ = write!(out, "\n    {}", preview(&post.content));
    }
    out
}

pub fn render_categories(filter: &FilterState) -> String {
    filter
        .selected_categories
        .iter()
        .map(|(name, selected)| format!("[{}] {name}", if *selected { 'x' } else { ' ' }))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_form(state: &PostFormState) -> String {
    let mut out = match state.mode {
        FormMode::Create => "New post".to_string(),
        FormMode::Edit { id, .. } => format!("Editing post #{id}"),
    };
    let fields = &state.fields;
    let _ = write!(out, "\ntitle:    {}", fields.title);
    let _ = write!(out, "\ncategory: {}", fields.category);
    let _ = write!(out, "\ncontent:  {}", preview(&fields.content));
    let _ = write!(out, "\nimage:    {}", describe_image(state.selected_image.as_deref()));
    for violation in fields.validate() {
        let _ = write!(out, "\n  ! {violation}");
    }
    out
}

fn describe_image(image: Option<&str>) -> String {
    match image {
        None => "none".to_string(),
        Some(url) => match url.strip_prefix("data:") {
            Some(rest) => {
                let mime = rest.split(';').next().unwrap_or_default();
                format!("attached ({mime})")
            }
            None => url.to_string(),
        },
    }
}

fn preview(text: &str) -> String {
    let single_line = text.replace(['\r', '\n'], " ");
    if single_line.chars().count() <= PREVIEW_CHARS {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}
