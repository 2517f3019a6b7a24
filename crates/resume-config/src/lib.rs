//! Configuration for the resume.json generator.
//!
//! This crate handles:
//! - The fixed Gist and Snippet publish targets
//! - Loading the résumé record from disk

pub mod data;
pub mod error;
pub mod targets;

pub use data::{DEFAULT_DATA_PATH, load_record};
pub use error::{ConfigError, ConfigResult};
pub use targets::{GistTarget, SnippetTarget};
