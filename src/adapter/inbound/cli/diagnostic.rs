//! Miette-based rendering of configuration parse errors.
//!
//! Points at the offending span of the TOML file instead of printing a
//! bare byte offset.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(matchday::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML parse failure.
    #[must_use]
    pub fn from_toml(error: &toml::de::Error, name: &str, content: &str) -> Self {
        Self {
            message: error.message().to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: error.span().map(SourceSpan::from),
            help: Some("valid sections are [services], [scenario] and [logging]".into()),
        }
    }

    /// Print the rendered diagnostic to stderr.
    pub fn emit(self) {
        eprintln!("{:?}", miette::Report::new(self));
    }
}
