//! MyMemory Translator - async client for the MyMemory translation API
//!
//! This library translates text through the free MyMemory `/get` endpoint and
//! transparently splits text that exceeds the service's per-request limit.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::MyMemoryClient,
    config::ClientConfig,
    email::EmailDomainPool,
    errors::{Result, TranslationError},
    models::{ContactEmail, TranslationInput, TranslationOutput, TranslationRequest, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
