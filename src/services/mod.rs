//! Services module for document-api.

pub mod database;
pub mod documents;

pub use database::Database;
pub use documents::DocumentService;
