//! CLI support for cypher-dsl
//!
//! Provides programmatic access to the `cypher-dsl` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod capabilities;
mod render;

pub use capabilities::capability_listing;
pub use render::{execute_render, RenderOptions};

use std::io;

use thiserror::Error;

use crate::error::TypeMismatch;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input does not satisfy the requested capability
    #[error("Type mismatch: {0}")]
    TypeMismatch(#[from] TypeMismatch),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
}
