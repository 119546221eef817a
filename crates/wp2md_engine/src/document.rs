use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::types::{EligiblePost, PostMetadata};

/// WXR writes its GMT timestamps as `2024-01-15 10:30:00`.
const WXR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("unrecognized timestamp {value:?} in {field}")]
    InvalidDate { field: &'static str, value: String },
    #[error("metadata encoding failed: {0}")]
    Encode(String),
}

/// HTML-to-Markdown capability; the post body passes through as a black box.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> String {
        html2md::parse_html(html)
    }
}

/// Structured-data-to-text capability for the front-matter block.
///
/// Implementations must preserve key insertion order, render sequences as
/// block lists, escape scalars losslessly, and end with a single newline.
pub trait MetadataEncoder: Send + Sync {
    fn encode(&self, metadata: &PostMetadata) -> Result<String, SynthesisError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlMetadataEncoder;

impl MetadataEncoder for YamlMetadataEncoder {
    fn encode(&self, metadata: &PostMetadata) -> Result<String, SynthesisError> {
        serde_yaml::to_string(metadata).map_err(|err| SynthesisError::Encode(err.to_string()))
    }
}

/// Build the ordered front-matter mapping for one post.
///
/// `updated` is included only when the modification timestamp differs
/// textually from the publication timestamp, compared before normalization.
pub fn build_metadata(post: &EligiblePost) -> Result<PostMetadata, SynthesisError> {
    let date = normalize_timestamp("wp:post_date_gmt", &post.published_at)?;
    let updated = if !post.modified_at.is_empty() && post.modified_at != post.published_at {
        Some(normalize_timestamp(
            "wp:post_modified_gmt",
            &post.modified_at,
        )?)
    } else {
        None
    };
    Ok(PostMetadata {
        title: post.title.clone(),
        date,
        updated,
        categories: post.categories.clone(),
        tags: post.tags.clone(),
    })
}

/// Re-emit a WXR GMT timestamp as ISO-8601 UTC (`YYYY-MM-DDTHH:mm:ss.sssZ`).
///
/// An unparseable value is an explicit error, never a placeholder string in
/// the produced metadata.
pub fn normalize_timestamp(field: &'static str, value: &str) -> Result<String, SynthesisError> {
    parse_timestamp(value)
        .map(|utc| utc.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| SynthesisError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, WXR_DATE_FORMAT) {
        return Some(naive.and_utc());
    }
    // Some exporters write RFC 3339 instead.
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Final document text: front-matter block, blank line, Markdown body.
///
/// The encoder's output already ends with a newline; none is added here.
pub fn assemble_document(encoded_metadata: &str, body_markdown: &str) -> String {
    format!("---\n{encoded_metadata}---\n\n{body_markdown}")
}

#[cfg(test)]
mod tests {
    use super::{normalize_timestamp, SynthesisError};

    #[test]
    fn wxr_timestamp_normalizes_to_iso8601_utc() {
        let iso = normalize_timestamp("wp:post_date_gmt", "2024-01-15 10:30:00").unwrap();
        assert_eq!(iso, "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn rfc3339_timestamp_is_accepted() {
        let iso = normalize_timestamp("wp:post_date_gmt", "2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(iso, "2024-01-15T08:30:00.000Z");
    }

    #[test]
    fn garbage_timestamp_is_an_explicit_error() {
        let err = normalize_timestamp("wp:post_date_gmt", "not a date").unwrap_err();
        assert_eq!(
            err,
            SynthesisError::InvalidDate {
                field: "wp:post_date_gmt",
                value: "not a date".to_string(),
            }
        );
    }
}
