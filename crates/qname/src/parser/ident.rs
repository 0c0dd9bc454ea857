//! Qualified name scanner.
//!
//! The grammar matches the rules PostgreSQL applies when parsing textual
//! object names (`parse_ident` and friends in `backend/utils/adt/misc.c`):
//! - one or two components separated by `.`
//! - a component is either double-quoted (with `""` as an escaped quote)
//!   or an unquoted run ended only by a `.`
//! - an optional trailing `[]` marks an array type
//!
//! The unquoted grammar is deliberately permissive: any character other
//! than the separators can start a component, so `1abc` or `a b` are
//! acceptable unquoted names.

use winnow::combinator::{alt, delimited, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseIdentError;
use crate::types::QualifiedName;

/// Suffix marking an array type, e.g. `int4[]`.
pub const ARRAY_SUFFIX: &str = "[]";

/// Parse a qualified name into its component parts.
///
/// Accepts `name`, `namespace.name`, quoted components in either position,
/// and a trailing [`ARRAY_SUFFIX`]. Returns the first error encountered,
/// with the original input attached for diagnostics.
///
/// # Example
///
/// ```
/// use qname::parse_ident;
///
/// let parsed = parse_ident("pg_catalog.\"My Type\"[]").unwrap();
/// assert_eq!(parsed.namespace.as_deref(), Some("pg_catalog"));
/// assert_eq!(parsed.name, "My Type");
/// assert!(parsed.array);
/// assert!(!parsed.simple);
/// ```
pub fn parse_ident(input: &str) -> Result<QualifiedName, ParseIdentError> {
    if input.is_empty() {
        return Err(ParseIdentError::EmptyString {
            input: input.to_string(),
        });
    }
    if input.contains('\0') {
        return Err(ParseIdentError::ContainsNullByte {
            input: input.to_string(),
        });
    }

    // Only one suffix is stripped; `[]` anywhere else is ordinary text.
    let (body, array) = match input.strip_suffix(ARRAY_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (input, false),
    };
    if body.is_empty() {
        return Err(ParseIdentError::EmptyString {
            input: input.to_string(),
        });
    }

    let mut remainder = body;
    let mut parts: Vec<String> = Vec::new();
    let mut any_quoted = false;

    loop {
        let part = segment(&mut remainder, input, &mut any_quoted)?;
        parts.push(part);

        if remainder.is_empty() {
            break;
        }
        if let Some(rest) = remainder.strip_prefix('.') {
            if rest.is_empty() {
                return Err(ParseIdentError::MissingIdentifierAfterDot {
                    input: input.to_string(),
                });
            }
            remainder = rest;
        } else {
            return Err(ParseIdentError::TrailingGarbage {
                input: input.to_string(),
            });
        }
    }

    let mut segments = parts.into_iter();
    match (segments.next(), segments.next(), segments.next()) {
        (Some(name), None, None) => Ok(QualifiedName {
            namespace: None,
            name,
            array,
            simple: !any_quoted,
        }),
        (Some(namespace), Some(name), None) => Ok(QualifiedName {
            namespace: Some(namespace),
            name,
            array,
            simple: false,
        }),
        _ => Err(ParseIdentError::TooManyParts {
            input: input.to_string(),
        }),
    }
}

/// Scan one name component off the front of `remainder`.
///
/// `original` is the full input string, attached to errors verbatim.
fn segment(
    remainder: &mut &str,
    original: &str,
    any_quoted: &mut bool,
) -> Result<String, ParseIdentError> {
    match remainder.chars().next() {
        Some('"') => {
            *any_quoted = true;
            quoted_segment(remainder, original)
        }
        Some('.') => Err(ParseIdentError::MissingIdentifierBeforeDot {
            input: original.to_string(),
        }),
        Some(c) if is_ident_start(c) => {
            let run: &str = take_while(1.., is_ident_continuation)
                .parse_next(remainder)
                .map_err(|_: ErrMode<ContextError>| ParseIdentError::MissingIdentifier {
                    input: original.to_string(),
                })?;
            Ok(run.to_string())
        }
        _ => Err(ParseIdentError::MissingIdentifier {
            input: original.to_string(),
        }),
    }
}

/// Scan a double-quoted component, collapsing `""` escapes to `"`.
///
/// `remainder` is only advanced when the component is valid.
fn quoted_segment(remainder: &mut &str, original: &str) -> Result<String, ParseIdentError> {
    let mut input = *remainder;
    match delimited('"', quoted_body, '"').parse_next(&mut input) {
        Ok(name) => {
            if name.is_empty() {
                return Err(ParseIdentError::EmptyQuotedIdentifier {
                    input: original.to_string(),
                });
            }
            *remainder = input;
            Ok(name)
        }
        Err(_) => Err(ParseIdentError::UnclosedQuote {
            input: original.to_string(),
        }),
    }
}

/// Body of a quoted component: runs of ordinary characters interleaved
/// with `""` escape pairs. Stops at a lone `"`.
fn quoted_body(input: &mut &str) -> ModalResult<String> {
    repeat(
        0..,
        alt((take_while(1.., |c: char| c != '"'), "\"\"".value("\""))),
    )
    .fold(String::new, |mut acc, piece: &str| {
        acc.push_str(piece);
        acc
    })
    .parse_next(input)
}

/// Check if a character can start an unquoted name component.
fn is_ident_start(c: char) -> bool {
    c != '.' && c != '"'
}

/// Check if a character can continue an unquoted name component.
///
/// A quote is an ordinary character here; only a dot ends the run.
fn is_ident_continuation(c: char) -> bool {
    c != '.'
}
