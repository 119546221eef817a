use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Title substituted for posts whose own title is absent or empty.
pub(crate) const DEFAULT_TITLE: &str = "untitled";

/// The parsed export tree: the ordered post records found under
/// `rss > channel`. Owned transiently; dropped once extraction is done.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportDocument {
    pub posts: Vec<RawPost>,
}

/// One `<item>` from the export, fields still raw and optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPost {
    /// `wp:status` — `publish`, `draft`, `inherit`, `trash`, ...
    pub status: Option<String>,
    pub title: Option<String>,
    /// `wp:post_date_gmt`, as written in the export.
    pub published_at: Option<String>,
    /// `wp:post_modified_gmt`, as written in the export.
    pub modified_at: Option<String>,
    /// `content:encoded` — raw post HTML.
    pub body_html: Option<String>,
    pub taxonomy: Vec<TaxonomyTerm>,
}

/// A `<category domain="...">` classification attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyTerm {
    pub domain: String,
    pub term: String,
}

/// A published post with every field the synthesizer needs, taxonomy
/// already partitioned into categories and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligiblePost {
    pub title: String,
    pub published_at: String,
    pub modified_at: String,
    pub body_html: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Front-matter mapping. Field order here is the output key order:
/// title, date, updated, categories, tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// What one run did; the app reports this after completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub items_found: usize,
    pub files_written: usize,
    /// Publishable posts dropped for a missing field or a synthesis failure.
    pub posts_failed: usize,
    pub output_dir: PathBuf,
}

impl RunSummary {
    /// Items that were never eligible (drafts, attachments, trash, ...).
    pub fn skipped_ineligible(&self) -> usize {
        self.items_found - self.files_written - self.posts_failed
    }
}
