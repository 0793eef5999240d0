// Core shared types for richrepr
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
