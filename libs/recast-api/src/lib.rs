extern crate self as recast_api;

pub mod converter;
pub mod convertible;
pub mod culture;
pub mod decimal;
pub mod error;
pub mod observer;
pub mod types;
pub mod value;

pub use recast_api_derive::ConvertibleEnum;

pub use converter::{Converter, SpecializedConverter};
pub use convertible::Convertible;
pub use culture::{Culture, DateOrder};
pub use decimal::Decimal;
pub use error::{ConversionError, ErrorKind};
pub use observer::{ConversionContext, ConversionObserver, NoopObserver};
pub use types::{EnumType, TypeTag};
pub use value::{EnumValue, ObjectRef, ObjectValue, Row, Value};
