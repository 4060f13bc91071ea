// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error types for configuration failures.
//!
//! Errors are rendered through miette so startup failures read like compiler
//! diagnostics rather than a serde backtrace.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error surfaced at startup.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// TOML parsing or deserialization failure (unknown key, type mismatch).
    #[error("could not parse configuration: {message}")]
    #[diagnostic(
        code(sitesmith::config::parse),
        help("check sitesmith.toml against the documented sections: [server], [openai], [storage]")
    )]
    Parse { message: String },

    /// Semantic validation failure on an otherwise well-formed config.
    #[error("{message}")]
    #[diagnostic(code(sitesmith::config::validation))]
    Validation { message: String },
}

/// Render all collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        let report = miette::Report::msg(format!("{err}"));
        eprintln!("{report:?}");
    }
    eprintln!(
        "sitesmith: {} configuration error{} found",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
}
