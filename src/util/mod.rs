//! Utility modules

pub mod document;

pub use document::{read_document, DocumentError, MAX_DOCUMENT_BYTES};
