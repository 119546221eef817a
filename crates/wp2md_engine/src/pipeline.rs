use std::fs;
use std::io;
use std::path::Path;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::document::{
    assemble_document, build_metadata, Converter, Html2MdConverter, MetadataEncoder,
    YamlMetadataEncoder,
};
use crate::filename::derive_filename;
use crate::loader::{ExportParser, ParseError, RoxmlExportParser};
use crate::persist::{ensure_output_dir, output_dir_for, PersistError, PostWriter};
use crate::select::eligible_posts;
use crate::types::RunSummary;

/// Fatal pipeline failures. Per-post problems never surface here; they are
/// logged and the run moves on to the next post.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read export file: {0}")]
    Read(#[source] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// The conversion pipeline with its three pluggable format services.
pub struct Pipeline {
    parser: Box<dyn ExportParser>,
    converter: Box<dyn Converter>,
    encoder: Box<dyn MetadataEncoder>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            Box::new(RoxmlExportParser),
            Box::new(Html2MdConverter),
            Box::new(YamlMetadataEncoder),
        )
    }
}

impl Pipeline {
    pub fn new(
        parser: Box<dyn ExportParser>,
        converter: Box<dyn Converter>,
        encoder: Box<dyn MetadataEncoder>,
    ) -> Self {
        Self {
            parser,
            converter,
            encoder,
        }
    }

    /// Convert every published post in `input` into a Markdown file under
    /// `<input parent>/markdown-posts`.
    ///
    /// Posts are processed strictly in export order, one at a time. The
    /// output directory is created exactly once, after a successful parse
    /// and before the first write.
    pub fn run(&self, input: &Path) -> Result<RunSummary, PipelineError> {
        debug!("starting processing for file: {}", input.display());
        let xml = fs::read_to_string(input).map_err(PipelineError::Read)?;
        let document = self.parser.parse(&xml)?;
        info!("Found {} items in the export.", document.posts.len());

        let output_dir = output_dir_for(input);
        debug!("output directory set to: {}", output_dir.display());
        ensure_output_dir(&output_dir)?;
        let writer = PostWriter::new(output_dir.clone());

        let mut summary = RunSummary {
            items_found: document.posts.len(),
            files_written: 0,
            posts_failed: 0,
            output_dir,
        };

        for extracted in eligible_posts(&document) {
            let post = match extracted {
                Ok(post) => post,
                Err(err) => {
                    warn!("skipping post: {err}");
                    summary.posts_failed += 1;
                    continue;
                }
            };
            debug!("processing post: {:?}", post.title);
            if let Ok(json) = serde_json::to_string(&post) {
                debug!("full post record: {json}");
            }

            let metadata = match build_metadata(&post) {
                Ok(metadata) => metadata,
                Err(err) => {
                    error!("skipping post {:?}: {err}", post.title);
                    summary.posts_failed += 1;
                    continue;
                }
            };
            let encoded = match self.encoder.encode(&metadata) {
                Ok(encoded) => encoded,
                Err(err) => {
                    error!("skipping post {:?}: {err}", post.title);
                    summary.posts_failed += 1;
                    continue;
                }
            };
            if let Ok(json) = serde_json::to_string(&metadata) {
                debug!("generated metadata: {json}");
            }

            let body = self.converter.to_markdown(&post.body_html);
            let contents = assemble_document(&encoded, &body);
            let filename = derive_filename(&post.title);
            writer.write(&filename, &contents)?;
            info!("Created: {filename}");
            summary.files_written += 1;
        }

        Ok(summary)
    }
}
