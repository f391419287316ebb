pub mod documents;

pub use documents::DocumentPayload;
