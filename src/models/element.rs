// file: src/models/element.rs
// description: IFC element records as exported by the web-ifc extractor
// reference: internal data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level shape of the extractor output. Only `elements` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementExport {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,

    #[serde(rename = "expressID", default = "default_express_id")]
    pub express_id: Value,

    #[serde(rename = "BasicProperties", default)]
    pub basic_properties: Option<BasicProperties>,

    #[serde(rename = "PropertySets", default = "empty_object")]
    pub property_sets: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BasicProperties {
    #[serde(rename = "GlobalId", default)]
    pub global_id: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "ObjectType", default)]
    pub object_type: Option<String>,
}

fn default_express_id() -> Value {
    Value::String(String::new())
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Element {
    pub fn type_name(&self) -> &str {
        self.element_type.as_deref().unwrap_or_default()
    }

    pub fn global_id(&self) -> &str {
        self.basic_properties
            .as_ref()
            .and_then(|b| b.global_id.as_deref())
            .unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.basic_properties
            .as_ref()
            .and_then(|b| b.name.as_deref())
            .unwrap_or_default()
    }

    pub fn object_type(&self) -> &str {
        self.basic_properties
            .as_ref()
            .and_then(|b| b.object_type.as_deref())
            .unwrap_or_default()
    }

    /// expressID as bare text: numbers verbatim, strings unquoted, null empty.
    ///
    /// Null `type`, `Name`, `GlobalId` and `ObjectType` likewise render empty
    /// rather than as a `None` placeholder.
    pub fn express_id_text(&self) -> String {
        match &self.express_id {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_element() {
        let element: Element = serde_json::from_value(json!({
            "type": "IfcWall",
            "expressID": 42,
            "BasicProperties": {"GlobalId": "G1", "Name": "Wall-01", "ObjectType": "Wall"},
            "PropertySets": {"Pset_WallCommon": {"IsExternal": true}}
        }))
        .unwrap();

        assert_eq!(element.type_name(), "IfcWall");
        assert_eq!(element.express_id, json!(42));
        assert_eq!(element.express_id_text(), "42");
        assert_eq!(element.global_id(), "G1");
        assert_eq!(element.name(), "Wall-01");
        assert_eq!(element.object_type(), "Wall");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let element: Element = serde_json::from_value(json!({})).unwrap();

        assert_eq!(element.type_name(), "");
        assert_eq!(element.express_id, json!(""));
        assert_eq!(element.express_id_text(), "");
        assert_eq!(element.name(), "");
        assert_eq!(element.global_id(), "");
        assert_eq!(element.object_type(), "");
        assert_eq!(element.property_sets, json!({}));
    }

    #[test]
    fn test_null_basic_property_values() {
        let element: Element = serde_json::from_value(json!({
            "type": "IfcDoor",
            "expressID": "D-7",
            "BasicProperties": {"GlobalId": null, "Name": "Door"}
        }))
        .unwrap();

        assert_eq!(element.express_id_text(), "D-7");
        assert_eq!(element.global_id(), "");
        assert_eq!(element.name(), "Door");
        assert_eq!(element.object_type(), "");
    }

    #[test]
    fn test_export_without_elements_key() {
        let export: ElementExport = serde_json::from_str(r#"{"schema": "IFC4"}"#).unwrap();
        assert!(export.elements.is_empty());
    }
}
