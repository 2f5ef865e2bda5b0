//! Culture-aware text parsers used by the string converters and coercion.

pub mod datetime;
pub mod number;
