// file: src/models/document.rs
// description: FAISS-ready output document with element metadata
// reference: internal data structures

use crate::models::Element;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(rename = "expressID")]
    pub express_id: Value,

    pub name: String,
}

impl Document {
    pub fn new(content: String, element: &Element) -> Self {
        Self {
            content,
            metadata: DocumentMetadata::from_element(element),
        }
    }
}

impl DocumentMetadata {
    pub fn from_element(element: &Element) -> Self {
        Self {
            element_type: element.type_name().to_string(),
            express_id: element.express_id.clone(),
            name: element.name().to_string(),
        }
    }
}
