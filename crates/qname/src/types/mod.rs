mod qualified;

pub use qualified::QualifiedName;
