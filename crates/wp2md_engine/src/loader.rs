use roxmltree::{Document, Node};
use thiserror::Error;

use crate::types::{ExportDocument, RawPost, TaxonomyTerm};

/// Namespace of `content:encoded`. Stable across WXR versions, unlike the
/// `wp:` namespace whose URI carries the export version number.
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("export is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("export has no <channel> element")]
    MissingChannel,
}

/// XML-to-tree capability: turns raw export text into post records.
pub trait ExportParser: Send + Sync {
    fn parse(&self, xml: &str) -> Result<ExportDocument, ParseError>;
}

/// `roxmltree`-backed parser for WordPress WXR dumps.
///
/// Apart from `content:encoded`, elements are matched by local name only,
/// so any WXR namespace version (1.0 through 1.2) is accepted. A channel
/// with no `<item>` elements parses to an empty document.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoxmlExportParser;

impl ExportParser for RoxmlExportParser {
    fn parse(&self, xml: &str) -> Result<ExportDocument, ParseError> {
        let doc = Document::parse(xml)?;
        let channel = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "channel")
            .ok_or(ParseError::MissingChannel)?;
        let posts = channel
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "item")
            .map(read_item)
            .collect();
        Ok(ExportDocument { posts })
    }
}

fn read_item(item: Node) -> RawPost {
    let mut post = RawPost::default();
    for child in item.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "title" => post.title = Some(element_text(child)),
            "status" => post.status = Some(element_text(child)),
            "post_date_gmt" => post.published_at = Some(element_text(child)),
            "post_modified_gmt" => post.modified_at = Some(element_text(child)),
            // `excerpt:encoded` shares the local name; only the content
            // namespace carries the post body.
            "encoded" if child.tag_name().namespace() == Some(CONTENT_NS) => {
                post.body_html = Some(element_text(child));
            }
            "category" => {
                if let Some(domain) = child.attribute("domain") {
                    post.taxonomy.push(TaxonomyTerm {
                        domain: domain.to_string(),
                        term: element_text(child),
                    });
                }
            }
            _ => {}
        }
    }
    post
}

/// Concatenated text content of an element; CDATA sections included.
fn element_text(node: Node) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}
