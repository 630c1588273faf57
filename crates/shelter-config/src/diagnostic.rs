// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error types and stderr rendering.

use thiserror::Error;

/// A configuration error: either a Figment parse/deserialization failure or
/// a semantic validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parsing or deserialization failed (bad syntax, unknown key,
    /// type mismatch).
    #[error("{0}")]
    Figment(#[from] figment::Error),

    /// A semantic constraint was violated after deserialization.
    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

/// Render a list of configuration errors to stderr, one per line.
pub fn render_errors(errors: &[ConfigError]) {
    eprintln!("shelter: configuration is invalid");
    for error in errors {
        eprintln!("  - {error}");
    }
}
