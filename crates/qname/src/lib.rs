pub mod parser;
pub mod types;

pub use parser::{ARRAY_SUFFIX, ParseIdentError, parse_ident};
pub use types::QualifiedName;
