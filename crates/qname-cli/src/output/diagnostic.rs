//! Miette diagnostic wrapper for qualified name parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use qname::ParseIdentError;
use thiserror::Error;

/// A miette-compatible diagnostic for qualified name parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(qname::parse))]
pub struct IdentDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl IdentDiagnostic {
    /// Create a diagnostic from a parse error, labelling the offending
    /// region of the input.
    pub fn from_parse_error(source_name: &str, err: &ParseIdentError) -> Self {
        let input = err.input();
        let (offset, len) = span_for(err, input);

        // Clamp to the input length to avoid miette panic on out-of-bounds
        let offset = offset.min(input.len());
        let len = len.min(input.len() - offset);

        IdentDiagnostic {
            src: NamedSource::new(source_name, input.to_string()),
            span: (offset, len).into(),
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

/// Best-effort byte span of the offending region.
fn span_for(err: &ParseIdentError, input: &str) -> (usize, usize) {
    match err {
        ParseIdentError::EmptyString { .. } => (0, 0),
        ParseIdentError::ContainsNullByte { .. } => {
            (input.find('\0').unwrap_or(0), 1)
        }
        ParseIdentError::UnclosedQuote { .. } => {
            // From the opening quote of the unterminated component onward.
            let start = input.find('"').unwrap_or(0);
            (start, input.len() - start)
        }
        ParseIdentError::EmptyQuotedIdentifier { .. } => {
            (input.find("\"\"").unwrap_or(0), 2)
        }
        ParseIdentError::MissingIdentifierBeforeDot { .. } => {
            // The dot either opens the input or directly follows another.
            let pos = match input.find("..") {
                Some(p) => p + 1,
                None => 0,
            };
            (pos, 1)
        }
        ParseIdentError::MissingIdentifierAfterDot { .. } => {
            (input.rfind('.').unwrap_or(0), 1)
        }
        ParseIdentError::MissingIdentifier { .. }
        | ParseIdentError::TrailingGarbage { .. }
        | ParseIdentError::TooManyParts { .. } => (0, input.len()),
    }
}

/// Optional hint shown under the diagnostic.
fn help_for(err: &ParseIdentError) -> Option<String> {
    match err {
        ParseIdentError::UnclosedQuote { .. } => Some(
            "close the identifier with \" (double any quote that belongs in the name)".to_string(),
        ),
        ParseIdentError::EmptyQuotedIdentifier { .. } => {
            Some("quoted identifiers must contain at least one character".to_string())
        }
        ParseIdentError::TooManyParts { .. } => {
            Some("at most two dot-separated parts (namespace.name) are allowed".to_string())
        }
        _ => None,
    }
}
