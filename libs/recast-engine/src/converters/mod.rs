//! Specialized converters registered by the standard registry.

pub mod narrowing;
pub mod string;

pub use narrowing::NarrowingConverter;
pub use string::{
    StringToBoolConverter, StringToCharConverter, StringToDateTimeConverter,
    StringToGuidConverter, StringToNumberConverter,
};
