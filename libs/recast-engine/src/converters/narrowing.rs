use std::fmt::Display;
use std::marker::PhantomData;

use recast_api::{ConversionContext, ConversionError, Converter, Decimal, SpecializedConverter, TypeTag, Value};

/// Numeric source of a narrowing conversion.
pub trait WideNumber: Copy + Display + Send + Sync + 'static {
    const TAG: TypeTag;

    fn from_value(value: &Value<'_>) -> Option<Self>;

    /// `value < min || value > max`, compared in the wide type.
    fn out_of_range(self, min: i128, max: i128) -> bool;

    /// Integral part, truncated toward zero. `None` for NaN.
    fn truncate(self) -> Option<i128>;
}

macro_rules! wide_float {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl WideNumber for $t {
                const TAG: TypeTag = TypeTag::$variant;

                fn from_value(value: &Value<'_>) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }

                fn out_of_range(self, min: i128, max: i128) -> bool {
                    self < min as $t || self > max as $t
                }

                fn truncate(self) -> Option<i128> {
                    if self.is_nan() {
                        None
                    } else {
                        Some(self.trunc() as i128)
                    }
                }
            }
        )*
    };
}

wide_float!(f32 => F32, f64 => F64);

impl WideNumber for Decimal {
    const TAG: TypeTag = TypeTag::Decimal;

    fn from_value(value: &Value<'_>) -> Option<Self> {
        match value {
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    fn out_of_range(self, min: i128, max: i128) -> bool {
        self.cmp_int(min).is_lt() || self.cmp_int(max).is_gt()
    }

    fn truncate(self) -> Option<i128> {
        Some(self.trunc())
    }
}

/// Integer target of a narrowing conversion.
pub trait NarrowNumber: Send + Sync + 'static {
    const TAG: TypeTag;
    const MIN: i128;
    const MAX: i128;

    fn from_i128(n: i128) -> Option<Value<'static>>;
}

macro_rules! narrow_int {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl NarrowNumber for $t {
                const TAG: TypeTag = TypeTag::$variant;
                const MIN: i128 = <$t>::MIN as i128;
                const MAX: i128 = <$t>::MAX as i128;

                fn from_i128(n: i128) -> Option<Value<'static>> {
                    <$t>::try_from(n).ok().map(Value::$variant)
                }
            }
        )*
    };
}

narrow_int!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32, i64 => I64, u64 => U64);

/// Converts a float or decimal to an integer type without overflow.
///
/// Out-of-range values fall back with an overflow reason, NaN with an
/// invalid-cast reason. In-range values are truncated toward zero.
pub struct NarrowingConverter<S, T> {
    _types: PhantomData<fn(S) -> T>,
}

impl<S: WideNumber, T: NarrowNumber> NarrowingConverter<S, T> {
    pub fn new() -> Self {
        Self { _types: PhantomData }
    }

    fn overflow(wide: S) -> ConversionError {
        ConversionError::overflow(format!(
            "the value (type {}, value: {wide}) exceeds the target numeric range (target type: {}, min: {}, max: {})",
            S::TAG,
            T::TAG,
            T::MIN,
            T::MAX,
        ))
    }
}

impl<S: WideNumber, T: NarrowNumber> Default for NarrowingConverter<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WideNumber, T: NarrowNumber> Converter for NarrowingConverter<S, T> {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(wide) = S::from_value(value) else {
            return Ok(ctx.default.clone().into_owned());
        };

        if wide.out_of_range(T::MIN, T::MAX) {
            return Ok(ctx.fall_back(value, Self::overflow(wide)));
        }

        let Some(n) = wide.truncate() else {
            let reason = ConversionError::invalid_cast(format!(
                "the value (type {}, value: {wide}) cannot be cast to the target numeric type ({})",
                S::TAG,
                T::TAG,
            ));
            return Ok(ctx.fall_back(value, reason));
        };

        // A bound not representable in the wide type lets its rounded value
        // pass the range check.
        match T::from_i128(n) {
            Some(narrow) => Ok(narrow),
            None => Ok(ctx.fall_back(value, Self::overflow(wide))),
        }
    }
}

impl<S: WideNumber, T: NarrowNumber> SpecializedConverter for NarrowingConverter<S, T> {
    fn from_type(&self) -> TypeTag {
        S::TAG
    }

    fn to_type(&self) -> TypeTag {
        T::TAG
    }
}
