// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod element;

pub use document::{Document, DocumentMetadata};
pub use element::{BasicProperties, Element, ElementExport};
