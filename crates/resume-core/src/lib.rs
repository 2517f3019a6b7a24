//! Core domain types for the resume.json generator.
//!
//! This crate contains:
//! - The résumé record as read from the data file
//! - The JSON Résumé `basics` document and the transformer producing it
//! - Gravatar picture URL derivation

pub mod basics;
pub mod error;
pub mod gravatar;
pub mod record;

pub use basics::{Location, ResumeJson, TransformedBasics};
pub use error::{CoreError, Result};
pub use record::{ContactInfo, ContactKind, Glyph, ResumeRecord, Title};
