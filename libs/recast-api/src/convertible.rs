use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::decimal::Decimal;
use crate::types::TypeTag;
use crate::value::Value;

/// Rust type usable as a typed conversion target.
///
/// Bridges a static Rust type to its [`TypeTag`] and back out of the dynamic
/// [`Value`]. Fieldless enums get an implementation from
/// `#[derive(ConvertibleEnum)]`.
pub trait Convertible: Sized {
    fn type_tag() -> TypeTag;

    /// Extract `Self` from a value of the matching runtime type.
    /// `None` when the value has any other shape.
    fn from_value(value: Value<'_>) -> Option<Self>;

    fn into_value(self) -> Value<'static>;
}

macro_rules! convertible_scalar {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Convertible for $t {
                fn type_tag() -> TypeTag {
                    TypeTag::$variant
                }

                fn from_value(value: Value<'_>) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value<'static> {
                    Value::$variant(self)
                }
            }
        )*
    };
}

convertible_scalar!(
    bool => Bool,
    char => Char,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    DateTime<Local> => DateTime,
);

impl Convertible for Uuid {
    fn type_tag() -> TypeTag {
        TypeTag::Guid
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Guid(v) => Some(v),
            _ => None,
        }
    }

    fn into_value(self) -> Value<'static> {
        Value::Guid(self)
    }
}

impl Convertible for String {
    fn type_tag() -> TypeTag {
        TypeTag::String
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.into_owned()),
            _ => None,
        }
    }

    fn into_value(self) -> Value<'static> {
        Value::from(self)
    }
}

/// Nullable target: `Null` maps to `None`.
impl<T: Convertible> Convertible for Option<T> {
    fn type_tag() -> TypeTag {
        TypeTag::nullable(T::type_tag())
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Null | Value::DbNull => Some(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn into_value(self) -> Value<'static> {
        self.map_or(Value::Null, T::into_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_round_trip_through_value() {
        assert_eq!(i32::from_value(42i32.into_value()), Some(42));
        assert_eq!(i32::from_value(Value::I64(42)), None);
        assert_eq!(String::from_value(Value::from("abc")), Some("abc".to_string()));
    }

    #[derive(crate::ConvertibleEnum, Debug, Clone, Copy, PartialEq)]
    #[repr(u64)]
    enum Flags {
        Empty = 0,
        Top = i64::MAX as u64,
    }

    #[test]
    fn wide_repr_discriminants_up_to_i64_max() {
        let ty = Flags::enum_type();
        assert_eq!(ty.underlying(), &TypeTag::U64);
        assert_eq!(ty.value_of("Top"), Some(i64::MAX));
        assert_eq!(Flags::from_value(Flags::Top.into_value()), Some(Flags::Top));
        assert_eq!(Flags::from_value(Flags::Empty.into_value()), Some(Flags::Empty));
    }

    #[test]
    fn option_is_nullable() {
        assert_eq!(<Option<u8>>::type_tag(), TypeTag::nullable(TypeTag::U8));
        assert_eq!(<Option<u8>>::from_value(Value::Null), Some(None));
        assert_eq!(<Option<u8>>::from_value(Value::U8(3)), Some(Some(3)));
        assert_eq!(None::<u8>.into_value(), Value::Null);
    }
}
