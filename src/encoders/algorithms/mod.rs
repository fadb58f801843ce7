pub mod errors;
pub mod factor;
pub mod poem;
pub mod word;

// Re-export error types for public API
pub use errors::{DecodeError, DictionaryNotFoundError, FormatError};
