use log::debug;
use thiserror::Error;

use crate::types::{EligiblePost, ExportDocument, RawPost, DEFAULT_TITLE};

/// The one status value that makes a post eligible for conversion.
const PUBLISH: &str = "publish";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("post {title:?} is missing required field {field}")]
    Missing { title: String, field: &'static str },
}

/// Lazy, single-pass stream of publishable posts.
///
/// Items whose status is not `publish` — or absent — are skipped outright.
/// A publishable item missing a required field yields a [`FieldError`] so
/// the caller can report it and move on to the next post.
pub fn eligible_posts(
    doc: &ExportDocument,
) -> impl Iterator<Item = Result<EligiblePost, FieldError>> + '_ {
    doc.posts.iter().filter_map(|post| {
        if post.status.as_deref() == Some(PUBLISH) {
            Some(extract_fields(post))
        } else {
            debug!(
                "skipping post with status: {}",
                post.status.as_deref().unwrap_or("N/A")
            );
            None
        }
    })
}

fn extract_fields(post: &RawPost) -> Result<EligiblePost, FieldError> {
    let title = match post.title.as_deref() {
        None | Some("") => DEFAULT_TITLE.to_string(),
        Some(t) => t.to_string(),
    };
    let published_at = required(&title, "wp:post_date_gmt", post.published_at.as_deref())?;
    let modified_at = required(&title, "wp:post_modified_gmt", post.modified_at.as_deref())?;
    let body_html = required(&title, "content:encoded", post.body_html.as_deref())?;

    let mut categories = Vec::new();
    let mut tags = Vec::new();
    for term in &post.taxonomy {
        match term.domain.as_str() {
            "category" => categories.push(term.term.clone()),
            "post_tag" => tags.push(term.term.clone()),
            _ => {}
        }
    }

    Ok(EligiblePost {
        title,
        published_at,
        modified_at,
        body_html,
        categories,
        tags,
    })
}

fn required(
    title: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String, FieldError> {
    value.map(str::to_string).ok_or_else(|| FieldError::Missing {
        title: title.to_string(),
        field,
    })
}
