use std::marker::PhantomData;

use recast_api::{ConversionContext, ConversionError, Converter, Decimal, SpecializedConverter, TypeTag, Value};
use uuid::Uuid;

use crate::parse::{datetime, number};

// ---------------------------------------------------------------------------
// string -> number
// ---------------------------------------------------------------------------

/// Numeric target of a string parse.
pub trait ParsedNumber: Send + Sync + 'static {
    const TAG: TypeTag;

    fn from_number(n: &number::Number) -> Option<Value<'static>>;
}

macro_rules! parsed_int {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl ParsedNumber for $t {
                const TAG: TypeTag = TypeTag::$variant;

                fn from_number(n: &number::Number) -> Option<Value<'static>> {
                    let n = n.to_integer()?;
                    <$t>::try_from(n).ok().map(Value::$variant)
                }
            }
        )*
    };
}

parsed_int!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32, i64 => I64, u64 => U64);

impl ParsedNumber for f32 {
    const TAG: TypeTag = TypeTag::F32;

    fn from_number(n: &number::Number) -> Option<Value<'static>> {
        n.to_f32().map(Value::F32)
    }
}

impl ParsedNumber for f64 {
    const TAG: TypeTag = TypeTag::F64;

    fn from_number(n: &number::Number) -> Option<Value<'static>> {
        n.to_f64().map(Value::F64)
    }
}

impl ParsedNumber for Decimal {
    const TAG: TypeTag = TypeTag::Decimal;

    fn from_number(n: &number::Number) -> Option<Value<'static>> {
        n.to_decimal().map(Value::Decimal)
    }
}

/// Parses a string as a number in the culture's number style.
pub struct StringToNumberConverter<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T: ParsedNumber> StringToNumberConverter<T> {
    pub fn new() -> Self {
        Self { _target: PhantomData }
    }
}

impl<T: ParsedNumber> Default for StringToNumberConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ParsedNumber> Converter for StringToNumberConverter<T> {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(text) = value.as_str() else {
            return Ok(ctx.default.clone().into_owned());
        };
        let parsed = number::parse(text, ctx.culture).and_then(|n| T::from_number(&n));
        Ok(parsed.unwrap_or_else(|| {
            ctx.fall_back(
                value,
                ConversionError::format(format!(
                    "the string '{text}' is not a parsable numeric value of type {}",
                    T::TAG
                )),
            )
        }))
    }
}

impl<T: ParsedNumber> SpecializedConverter for StringToNumberConverter<T> {
    fn from_type(&self) -> TypeTag {
        TypeTag::String
    }

    fn to_type(&self) -> TypeTag {
        T::TAG
    }
}

// ---------------------------------------------------------------------------
// string -> bool / char / datetime / guid
// ---------------------------------------------------------------------------

const TRUEISH: &[&str] = &["true", "1", "y", "yes"];
const FALSEISH: &[&str] = &["false", "0", "n", "no"];

/// `true`/`1`/`y`/`yes` and `false`/`0`/`n`/`no`, any letter case.
/// Surrounding whitespace is not trimmed.
#[derive(Debug, Default)]
pub struct StringToBoolConverter;

impl Converter for StringToBoolConverter {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(text) = value.as_str() else {
            return Ok(ctx.default.clone().into_owned());
        };
        let matches = |set: &[&str]| set.iter().any(|s| s.eq_ignore_ascii_case(text));
        if matches(TRUEISH) {
            return Ok(Value::Bool(true));
        }
        if matches(FALSEISH) {
            return Ok(Value::Bool(false));
        }
        Ok(ctx.fall_back(
            value,
            ConversionError::format(format!(
                "the string '{text}' is neither a true-ish nor a false-ish value, using the default ('{}') instead",
                ctx.default
            )),
        ))
    }
}

impl SpecializedConverter for StringToBoolConverter {
    fn from_type(&self) -> TypeTag {
        TypeTag::String
    }

    fn to_type(&self) -> TypeTag {
        TypeTag::Bool
    }
}

/// First character of the string.
#[derive(Debug, Default)]
pub struct StringToCharConverter;

impl Converter for StringToCharConverter {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(text) = value.as_str() else {
            return Ok(ctx.default.clone().into_owned());
        };
        match text.chars().next() {
            Some(c) => Ok(Value::Char(c)),
            None => Ok(ctx.fall_back(
                value,
                ConversionError::invalid_argument(format!(
                    "the string '{text}' has no characters, using the default ('{}') instead",
                    ctx.default
                )),
            )),
        }
    }
}

impl SpecializedConverter for StringToCharConverter {
    fn from_type(&self) -> TypeTag {
        TypeTag::String
    }

    fn to_type(&self) -> TypeTag {
        TypeTag::Char
    }
}

/// Local date/time, see [`datetime::parse`].
#[derive(Debug, Default)]
pub struct StringToDateTimeConverter;

impl Converter for StringToDateTimeConverter {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(text) = value.as_str() else {
            return Ok(ctx.default.clone().into_owned());
        };
        match datetime::parse(text, ctx.culture) {
            Some(dt) => Ok(Value::DateTime(dt)),
            None => Ok(ctx.fall_back(
                value,
                ConversionError::format(format!("the string '{text}' is not a parsable date/time value")),
            )),
        }
    }
}

impl SpecializedConverter for StringToDateTimeConverter {
    fn from_type(&self) -> TypeTag {
        TypeTag::String
    }

    fn to_type(&self) -> TypeTag {
        TypeTag::DateTime
    }
}

/// Hyphenated, simple, braced, parenthesized or URN GUID text.
#[derive(Debug, Default)]
pub struct StringToGuidConverter;

pub(crate) fn parse_guid(text: &str) -> Result<Uuid, ConversionError> {
    let text = text.trim();
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    Ok(Uuid::parse_str(inner)?)
}

impl Converter for StringToGuidConverter {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        let Some(text) = value.as_str() else {
            return Ok(ctx.default.clone().into_owned());
        };
        match parse_guid(text) {
            Ok(guid) => Ok(Value::Guid(guid)),
            Err(e) => Ok(ctx.fall_back(
                value,
                e.with_context(format!("the string '{text}' is not a parsable GUID value")),
            )),
        }
    }
}

impl SpecializedConverter for StringToGuidConverter {
    fn from_type(&self) -> TypeTag {
        TypeTag::String
    }

    fn to_type(&self) -> TypeTag {
        TypeTag::Guid
    }
}
