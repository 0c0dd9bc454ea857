use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::ARRAY_SUFFIX;

/// A parsed qualified name: an optional namespace, a final name, and an
/// array marker.
///
/// Produced by [`crate::parse_ident`]. The record is an immutable value;
/// all invariants are established at parse time:
/// - `namespace` is present iff the input had exactly two components.
/// - `name` and `namespace` are never empty.
/// - `simple` is true iff the input was a single unquoted component.
///   Simple names are safe to treat as bare, case-foldable tokens; a
///   two-part name is never simple, regardless of quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace component, present only for two-part names.
    pub namespace: Option<String>,
    /// The final (or only) name component, with quote escapes decoded.
    pub name: String,
    /// Whether the input carried a trailing `[]`.
    pub array: bool,
    /// Whether the input was a single unquoted component.
    pub simple: bool,
}

impl QualifiedName {
    /// Whether a component must be quoted to survive a parse round-trip.
    ///
    /// A dot would split the component; a quote at the start would open a
    /// quoted scan (and an embedded quote needs doubling inside quotes
    /// anyway, so quoting the whole component is the simplest safe form).
    fn needs_quoting(component: &str) -> bool {
        component.contains('.') || component.contains('"')
    }
}

/// Renders the canonical text form: components joined with `.`, quoted
/// where required, with `[]` appended for array names. Parsing the output
/// yields a record equal to `self`.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => {
                write_component(f, namespace, Self::needs_quoting(namespace))?;
                f.write_str(".")?;
                // An unquoted trailing `[]` would read back as an array
                // marker, so a name that really ends in brackets is quoted.
                let quote = Self::needs_quoting(&self.name)
                    || (!self.array && self.name.ends_with(ARRAY_SUFFIX));
                write_component(f, &self.name, quote)?;
            }
            // A lone component keeps its original quoting: simple names
            // reparse as simple, quoted names stay quoted.
            None => write_component(f, &self.name, !self.simple)?,
        }
        if self.array {
            f.write_str(ARRAY_SUFFIX)?;
        }
        Ok(())
    }
}

fn write_component(f: &mut fmt::Formatter<'_>, component: &str, quote: bool) -> fmt::Result {
    if quote {
        write!(f, "\"{}\"", component.replace('"', "\"\""))
    } else {
        f.write_str(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(namespace: Option<&str>, name: &str, array: bool, simple: bool) -> QualifiedName {
        QualifiedName {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            array,
            simple,
        }
    }

    #[test]
    fn test_simple_name_stays_bare() {
        assert_eq!(name(None, "foo", false, true).to_string(), "foo");
    }

    #[test]
    fn test_non_simple_name_is_quoted() {
        assert_eq!(name(None, "Foo Bar", false, false).to_string(), "\"Foo Bar\"");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(name(None, "a\"b", false, false).to_string(), "\"a\"\"b\"");
    }

    #[test]
    fn test_array_suffix_appended() {
        assert_eq!(name(None, "foo", true, true).to_string(), "foo[]");
        assert_eq!(name(None, "My Type", true, false).to_string(), "\"My Type\"[]");
    }

    #[test]
    fn test_two_part_plain() {
        assert_eq!(name(Some("foo"), "bar", false, false).to_string(), "foo.bar");
    }

    #[test]
    fn test_two_part_component_with_dot_is_quoted() {
        assert_eq!(name(Some("a.b"), "c", false, false).to_string(), "\"a.b\".c");
    }

    #[test]
    fn test_two_part_name_ending_in_brackets_is_quoted() {
        assert_eq!(name(Some("x"), "a[]", false, false).to_string(), "x.\"a[]\"");
        // With the array flag the brackets belong to the suffix instead.
        assert_eq!(name(Some("x"), "a", true, false).to_string(), "x.a[]");
    }
}
