// file: src/loader.rs
// description: reads the IFC element export produced by the web-ifc extractor
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::models::{Element, ElementExport};
use crate::utils::validation::Validator;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub struct ElementLoader;

impl ElementLoader {
    pub fn load(path: &Path) -> Result<Vec<Element>> {
        Validator::validate_input_file(path)?;

        let file = File::open(path).map_err(|source| PipelineError::Input {
            path: path.to_path_buf(),
            source,
        })?;

        let export: ElementExport =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                PipelineError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        info!(
            "Loaded {} elements from {}",
            export.elements.len(),
            path.display()
        );
        Ok(export.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ifc_full.json");
        fs::write(
            &path,
            r#"{"elements": [
                {"type": "IfcWall", "expressID": 3},
                {"type": "IfcDoor", "expressID": 1},
                {"type": "IfcSlab", "expressID": 2}
            ]}"#,
        )
        .unwrap();

        let elements = ElementLoader::load(&path).unwrap();
        let types: Vec<&str> = elements.iter().map(|e| e.type_name()).collect();
        assert_eq!(types, vec!["IfcWall", "IfcDoor", "IfcSlab"]);
    }

    #[test]
    fn test_missing_elements_key_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ifc_full.json");
        fs::write(&path, r#"{"project": "demo"}"#).unwrap();

        assert!(ElementLoader::load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let temp = TempDir::new().unwrap();
        let result = ElementLoader::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(PipelineError::Input { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ifc_full.json");
        fs::write(&path, r#"{"elements": [ {"type": "IfcWall""#).unwrap();

        let result = ElementLoader::load(&path);
        assert!(matches!(result, Err(PipelineError::Parse { .. })));
    }
}
