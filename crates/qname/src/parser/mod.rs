//! Qualified name parser.
//!
//! This module splits user-supplied object names such as `foo`,
//! `schema."My Table"` or `pg_catalog.int4[]` into their component parts,
//! following the lexical rules PostgreSQL applies to textual type and
//! object names.

pub mod error;
mod ident;

pub use error::ParseIdentError;
pub use ident::{ARRAY_SUFFIX, parse_ident};
