// file: src/describer/mod.rs
// description: builds the plain-text description indexed for each IFC element
// reference: internal module structure

pub mod inline_json;

use crate::error::Result;
use crate::models::Element;

pub use inline_json::{InlineFormatter, escape_non_ascii, to_inline_json};

/// Fixed-order description of one element.
///
/// `Element type: {type}. ExpressID: {id}. GlobalId: {gid}. Name: {name}.
/// ObjectType: {object_type}. PropertySets: {json}`
pub fn describe(element: &Element) -> Result<String> {
    let property_sets = to_inline_json(&element.property_sets)?;

    Ok(format!(
        "Element type: {}. ExpressID: {}. GlobalId: {}. Name: {}. ObjectType: {}. PropertySets: {}",
        element.type_name(),
        element.express_id_text(),
        element.global_id(),
        element.name(),
        element.object_type(),
        property_sets
    ))
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
