// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "IFC_FAISS";
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub summarizer: SummarizerConfig,
    pub output: OutputConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    HuggingFace,
    Lead,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub backend: BackendKind,
    pub model: String,
    pub api_url: String,
    pub api_token: Option<String>,
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
    /// Descriptions with fewer words than this are passed through untouched.
    pub min_words: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub ensure_ascii: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub show_progress: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("../ifc_full.json"),
            output: PathBuf::from("faiss_docs.json"),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::HuggingFace,
            model: "facebook/bart-large-cnn".to_string(),
            api_url: "https://api-inference.huggingface.co/models".to_string(),
            api_token: None,
            min_length: 20,
            max_length: 43,
            do_sample: false,
            min_words: 20,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { ensure_ascii: true }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.apply_token_env();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        let mut config = Self::default();
        config.apply_token_env();
        config
    }

    fn apply_token_env(&mut self) {
        if self.summarizer.api_token.is_none() {
            self.summarizer.api_token = std::env::var(HF_TOKEN_ENV)
                .ok()
                .filter(|token| !token.trim().is_empty());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let summarizer = &self.summarizer;

        Validator::validate_summary_bounds(summarizer.min_length, summarizer.max_length)?;

        if summarizer.min_words == 0 {
            return Err(PipelineError::Config(
                "min_words must be greater than 0".to_string(),
            ));
        }

        if summarizer.backend == BackendKind::HuggingFace {
            if summarizer.model.trim().is_empty() {
                return Err(PipelineError::Config(
                    "summarizer model must not be empty".to_string(),
                ));
            }
            Validator::validate_url(&summarizer.api_url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_reference_run() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("../ifc_full.json"));
        assert_eq!(config.paths.output, PathBuf::from("faiss_docs.json"));
        assert_eq!(config.summarizer.model, "facebook/bart-large-cnn");
        assert_eq!(config.summarizer.min_length, 20);
        assert_eq!(config.summarizer.max_length, 43);
        assert!(!config.summarizer.do_sample);
        assert_eq!(config.summarizer.min_words, 20);
        assert!(config.output.ensure_ascii);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[paths]
output = "out/docs.json"

[summarizer]
backend = "lead"
max_length = 30
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.paths.output, PathBuf::from("out/docs.json"));
        assert_eq!(config.paths.input, PathBuf::from("../ifc_full.json"));
        assert_eq!(config.summarizer.backend, BackendKind::Lead);
        assert_eq!(config.summarizer.max_length, 30);
        assert_eq!(config.summarizer.min_length, 20);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = Config::default();
        config.summarizer.min_length = 50;
        config.summarizer.max_length = 43;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_min_words() {
        let mut config = Config::default();
        config.summarizer.min_words = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_api_url() {
        let mut config = Config::default();
        config.summarizer.api_url = "api-inference.huggingface.co".to_string();
        assert!(config.validate().is_err());

        config.summarizer.backend = BackendKind::Lead;
        assert!(config.validate().is_ok());
    }
}
