// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_input_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Input {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            });
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(PipelineError::Validation(
                "Output path is empty".to_string(),
            ));
        }

        if path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_summary_bounds(min_length: u32, max_length: u32) -> Result<()> {
        if max_length == 0 {
            return Err(PipelineError::Validation(
                "max_length must be greater than 0".to_string(),
            ));
        }

        if min_length > max_length {
            return Err(PipelineError::Validation(format!(
                "min_length ({}) exceeds max_length ({})",
                min_length, max_length
            )));
        }

        Ok(())
    }
}
