// file: src/exporter/json.rs
// description: json export of the generated FAISS documents

use crate::describer::escape_non_ascii;
use crate::error::{PipelineError, Result};
use crate::models::Document;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
    ensure_ascii: bool,
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ensure_ascii: true,
        }
    }

    pub fn with_ensure_ascii(mut self, ensure_ascii: bool) -> Self {
        self.ensure_ascii = ensure_ascii;
        self
    }

    /// Renders documents as a 2-space indented JSON array.
    pub fn render(&self, documents: &[Document]) -> Result<String> {
        let json = serde_json::to_string_pretty(documents)?;
        Ok(if self.ensure_ascii {
            escape_non_ascii(&json)
        } else {
            json
        })
    }

    /// Overwrites the output file with all documents.
    pub fn export(&self, documents: &[Document]) -> Result<()> {
        let rendered = self.render(documents)?;

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PipelineError::Output {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.output_path, rendered).map_err(|source| PipelineError::Output {
            path: self.output_path.clone(),
            source,
        })?;

        info!(
            "Exported {} documents to {}",
            documents.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
