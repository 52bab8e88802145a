// Adapters layer: Document implementations for data that lives outside the caller's own types.

pub mod json;

pub use json::{json_document, JsonDocument};
