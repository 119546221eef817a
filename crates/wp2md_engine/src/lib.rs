//! wp2md engine: WordPress-export-to-Markdown conversion pipeline.
mod document;
mod filename;
mod loader;
mod persist;
mod pipeline;
mod select;
mod types;

pub use document::{
    assemble_document, build_metadata, normalize_timestamp, Converter, Html2MdConverter,
    MetadataEncoder, SynthesisError, YamlMetadataEncoder,
};
pub use filename::derive_filename;
pub use loader::{ExportParser, ParseError, RoxmlExportParser};
pub use persist::{ensure_output_dir, output_dir_for, PersistError, PostWriter, OUTPUT_DIR_NAME};
pub use pipeline::{Pipeline, PipelineError};
pub use select::{eligible_posts, FieldError};
pub use types::{EligiblePost, ExportDocument, PostMetadata, RawPost, RunSummary, TaxonomyTerm};
