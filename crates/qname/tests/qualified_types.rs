//! Tests for the `QualifiedName` value type: serde round-trips and field
//! shapes.

use qname::{QualifiedName, parse_ident};

#[test]
fn test_serialize_to_json() {
    let n = parse_ident("pg_catalog.int4[]").unwrap();
    let json = serde_json::to_value(&n).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "namespace": "pg_catalog",
            "name": "int4",
            "array": true,
            "simple": false,
        })
    );
}

#[test]
fn test_serialize_single_name() {
    let n = parse_ident("foo").unwrap();
    let json = serde_json::to_value(&n).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "namespace": null,
            "name": "foo",
            "array": false,
            "simple": true,
        })
    );
}

#[test]
fn test_serde_roundtrip() {
    for input in ["foo", "foo.bar[]", "\"Foo Bar\"", "\"a\"\"b\".c"] {
        let n = parse_ident(input).unwrap();
        let json = serde_json::to_string(&n).unwrap();
        let back: QualifiedName = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back, "for {input:?}");
    }
}

#[test]
fn test_names_are_hashable() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(parse_ident("foo.bar").unwrap());
    assert!(seen.contains(&parse_ident("\"foo\".\"bar\"").unwrap()));
    assert!(!seen.contains(&parse_ident("foo.baz").unwrap()));
}
