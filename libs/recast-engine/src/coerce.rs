//! Platform-level coercion between the built-in value kinds.
//!
//! The last step of the generic converter: identity, numeric widening and
//! checked narrowing, bool and char to and from numbers, enums to their
//! underlying value, culture-aware parsing and formatting of strings.
//! Anything else is an invalid cast.

use std::sync::Arc;

use recast_api::{ConversionError, Culture, Decimal, EnumType, EnumValue, TypeTag, Value};

use crate::converters::string::parse_guid;
use crate::parse::{datetime, number};

/// Intermediate numeric form.
#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i128),
    Float(f64),
    Dec(Decimal),
}

pub fn coerce(value: &Value<'_>, target: &TypeTag, culture: &Culture) -> Result<Value<'static>, ConversionError> {
    if value.type_tag().as_ref() == Some(target) {
        return Ok(value.clone().into_owned());
    }

    match target {
        TypeTag::Nullable(inner) => coerce(value, inner, culture),
        TypeTag::String => to_string(value, culture).map(Value::from),
        _ => match value {
            Value::Str(text) => from_string(text, target, culture),
            _ => from_scalar(value, target),
        },
    }
}

fn invalid_cast(value: &Value<'_>, target: &TypeTag) -> ConversionError {
    let source = value.type_tag().map_or_else(|| "null".to_string(), |t| t.name());
    ConversionError::invalid_cast(format!("no conversion from {source} to {target}"))
}

fn not_a_member(ty: &EnumType, shown: impl std::fmt::Display) -> ConversionError {
    ConversionError::invalid_argument(format!("'{shown}' is not a defined member of {}", ty.name()))
}

// ---------------------------------------------------------------------------
// string -> T
// ---------------------------------------------------------------------------

fn from_string(text: &str, target: &TypeTag, culture: &Culture) -> Result<Value<'static>, ConversionError> {
    let bad_format = || ConversionError::format(format!("'{text}' is not a valid {target}"));

    match target {
        TypeTag::Bool => match text.trim() {
            t if t.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            t if t.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => Err(bad_format()),
        },
        TypeTag::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(bad_format()),
            }
        }
        TypeTag::DateTime => datetime::parse(text, culture)
            .map(Value::DateTime)
            .ok_or_else(bad_format),
        TypeTag::Guid => parse_guid(text).map(Value::Guid),
        TypeTag::Enum(ty) => ty
            .value_of(text)
            .map(|v| Value::Enum(EnumValue::new(ty.clone(), v)))
            .ok_or_else(|| not_a_member(ty, text)),
        TypeTag::F32 | TypeTag::F64 | TypeTag::Decimal => {
            let n = number::parse(text, culture).ok_or_else(bad_format)?;
            let num = match (&n, target) {
                (number::Number::Finite { .. }, TypeTag::Decimal) => {
                    Num::Dec(n.to_decimal().ok_or_else(|| overflow(text, target))?)
                }
                (_, TypeTag::Decimal) => return Err(bad_format()),
                _ => Num::Float(n.to_f64().ok_or_else(bad_format)?),
            };
            from_num(num, target)
        }
        t if t.is_integer() => {
            let n = number::parse(text, culture).ok_or_else(bad_format)?;
            let int = match &n {
                number::Number::Finite { fraction, .. } if fraction.bytes().all(|d| d == b'0') => {
                    n.to_integer().ok_or_else(|| overflow(text, target))?
                }
                _ => return Err(bad_format()),
            };
            from_num(Num::Int(int), target)
        }
        _ => Err(invalid_cast(&Value::from(text), target)),
    }
}

fn overflow(shown: impl std::fmt::Display, target: &TypeTag) -> ConversionError {
    ConversionError::overflow(format!("'{shown}' is outside the range of {target}"))
}

// ---------------------------------------------------------------------------
// scalar -> T
// ---------------------------------------------------------------------------

fn as_num(value: &Value<'_>) -> Option<Num> {
    let num = match value {
        Value::Bool(b) => Num::Int(i128::from(*b)),
        Value::F32(f) => Num::Float(f64::from(*f)),
        Value::F64(f) => Num::Float(*f),
        Value::Decimal(d) => Num::Dec(*d),
        Value::Enum(e) => Num::Int(i128::from(e.value)),
        other => Num::Int(other.as_i128()?),
    };
    Some(num)
}

fn from_scalar(value: &Value<'_>, target: &TypeTag) -> Result<Value<'static>, ConversionError> {
    match (value, target) {
        (Value::Char(c), t) if t.is_integer() => from_num(Num::Int(i128::from(u32::from(*c))), t),
        (Value::Char(_), _) => Err(invalid_cast(value, target)),
        (_, TypeTag::Char) => match value.as_i128() {
            Some(n) => {
                let code = u32::try_from(n).map_err(|_| overflow(n, target))?;
                Ok(Value::Char(char::try_from(code)?))
            }
            None => Err(invalid_cast(value, target)),
        },
        (_, TypeTag::Enum(ty)) => match value.as_i128() {
            Some(n) => to_enum_member(ty, n),
            None => Err(invalid_cast(value, target)),
        },
        (_, TypeTag::Bool | TypeTag::F32 | TypeTag::F64 | TypeTag::Decimal) => match as_num(value) {
            Some(num) => from_num(num, target),
            None => Err(invalid_cast(value, target)),
        },
        (_, t) if t.is_integer() => match as_num(value) {
            Some(num) => from_num(num, t),
            None => Err(invalid_cast(value, target)),
        },
        _ => Err(invalid_cast(value, target)),
    }
}

fn to_enum_member(ty: &Arc<EnumType>, n: i128) -> Result<Value<'static>, ConversionError> {
    let underlying = ty.underlying();
    if let Some((min, max)) = underlying.integer_range() {
        if n < min || n > max {
            return Err(ConversionError::invalid_argument(format!(
                "{n} is outside the {underlying} range of {}",
                ty.name()
            )));
        }
    }
    i64::try_from(n)
        .ok()
        .filter(|v| ty.is_defined(*v))
        .map(|v| Value::Enum(EnumValue::new(ty.clone(), v)))
        .ok_or_else(|| not_a_member(ty, n))
}

fn from_num(num: Num, target: &TypeTag) -> Result<Value<'static>, ConversionError> {
    match target {
        TypeTag::Bool => Ok(Value::Bool(match num {
            Num::Int(n) => n != 0,
            Num::Float(f) => f != 0.0,
            Num::Dec(d) => !d.is_zero(),
        })),
        TypeTag::F32 => Ok(Value::F32(match num {
            Num::Int(n) => n as f32,
            Num::Float(f) => f as f32,
            Num::Dec(d) => d.to_f64() as f32,
        })),
        TypeTag::F64 => Ok(Value::F64(match num {
            Num::Int(n) => n as f64,
            Num::Float(f) => f,
            Num::Dec(d) => d.to_f64(),
        })),
        TypeTag::Decimal => {
            let dec = match num {
                Num::Int(n) => Decimal::from_i128(n).ok_or_else(|| overflow(n, target))?,
                Num::Float(f) => Decimal::from_f64(f).ok_or_else(|| overflow(f, target))?,
                Num::Dec(d) => d,
            };
            Ok(Value::Decimal(dec))
        }
        t => {
            let Some((min, max)) = t.integer_range() else {
                return Err(ConversionError::invalid_cast(format!("no numeric conversion to {t}")));
            };
            let int = match num {
                Num::Int(n) => n,
                Num::Float(f) if f.is_nan() => {
                    return Err(ConversionError::invalid_cast(format!("NaN cannot be cast to {t}")));
                }
                // range is checked before truncation
                Num::Float(f) if f < min as f64 || f > max as f64 => return Err(overflow(f, t)),
                Num::Float(f) => f.trunc() as i128,
                Num::Dec(d) => d.trunc(),
            };
            t.integer_value(int)
                .ok_or_else(|| overflow(int, t))
        }
    }
}

// ---------------------------------------------------------------------------
// T -> string
// ---------------------------------------------------------------------------

fn to_string(value: &Value<'_>, culture: &Culture) -> Result<String, ConversionError> {
    let text = match value {
        Value::F32(f) => culture.localize_number(&f.to_string()),
        Value::F64(f) => culture.localize_number(&f.to_string()),
        Value::Decimal(d) => culture.localize_number(&d.to_string()),
        Value::DateTime(dt) => {
            let time = if culture.twelve_hour { "%I:%M:%S %p" } else { "%H:%M:%S" };
            let format = format!("{} {time}", datetime::culture_date_format(culture));
            dt.format(&format).to_string()
        }
        Value::Object(_) | Value::Null | Value::DbNull => {
            return Err(invalid_cast(value, &TypeTag::String));
        }
        other => match other.as_i128() {
            Some(n) => culture.localize_number(&n.to_string()),
            None => other.to_string(),
        },
    };
    Ok(text)
}
