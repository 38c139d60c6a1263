// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

//! Turns an IFC element export into summarized, FAISS-ready JSON documents.

pub mod config;
pub mod describer;
pub mod error;
pub mod exporter;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod summarizer;
pub mod utils;

pub use config::{BackendKind, Config, OutputConfig, PathsConfig, PipelineConfig, SummarizerConfig};
pub use describer::{describe, word_count};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use loader::ElementLoader;
pub use models::{BasicProperties, Document, DocumentMetadata, Element, ElementExport};
pub use pipeline::{Pipeline, PipelineStats, ProgressTracker};
pub use summarizer::{
    HuggingFaceSummarizer, LeadSummarizer, Summarizer, SummarizerBackend, SummaryOptions,
    SummaryOutcome, SummaryParams, generate_summary,
};
pub use utils::Validator;
