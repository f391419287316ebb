//! Domain models for document-api.

mod document;

pub use document::{Document, NewDocument};
