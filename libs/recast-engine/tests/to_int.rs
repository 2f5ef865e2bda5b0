use recast_api::{Culture, Decimal, ErrorKind, ObjectRef, Value};
use recast_engine::ConvertExt;

mod common;

use common::{DayOfWeek, ExplicitIntegerNumber, ImplicitIntegerNumber, catches, converts_to, falls_back};

// ---------------------------------------------------------------------------
// null, DbNull, blank strings
// ---------------------------------------------------------------------------

#[test]
fn null_and_db_null_fall_back() {
    for culture in Culture::all() {
        for value in [Value::Null, Value::DbNull, Value::from(""), Value::from(" \t\r\n ")] {
            falls_back::<i32>(value.clone(), None, 0, ErrorKind::ArgumentNull, culture);
            falls_back::<i32>(value, Some(-1), 0, ErrorKind::ArgumentNull, culture);
        }
    }
}

#[test]
fn null_with_null_default_is_zero() {
    let observer = common::RecordingObserver::new();
    let result = Value::Null.convert_to_or_observed::<i32>(0, &observer);
    assert_eq!(result, Ok(0));
    assert_eq!(observer.fallbacks(), vec![ErrorKind::ArgumentNull]);
    assert!(observer.caught().is_empty());
}

// ---------------------------------------------------------------------------
// string => i32
// ---------------------------------------------------------------------------

#[test]
fn numeric_strings() {
    for culture in Culture::all() {
        converts_to(Value::from("1"), 1i32, culture);
        converts_to(Value::from("-1"), -1i32, culture);
        converts_to(Value::from("  1"), 1i32, culture);
        converts_to(Value::from("\t\t1"), 1i32, culture);
        converts_to(Value::from("\n\n\t\t\t1"), 1i32, culture);
        converts_to(Value::from("1  "), 1i32, culture);
        converts_to(Value::from("1\t\t"), 1i32, culture);
        converts_to(Value::from("1\n\t\t\t\n"), 1i32, culture);
    }
}

#[test]
fn strings_with_group_and_decimal_separators() {
    for culture in Culture::all() {
        converts_to(Value::from(culture.format_number(123_456, 0)), 123_456i32, culture);
        converts_to(Value::from(culture.format_number(123_456, 2)), 123_456i32, culture);
        converts_to(Value::from(culture.format_number(-123_456, 2)), -123_456i32, culture);
    }
}

#[test]
fn positive_sign_with_group_and_decimal_separators() {
    for culture in Culture::all() {
        let text = format!("{}{}", culture.positive_sign, culture.format_number(123_456, 2));
        converts_to(Value::from(text), 123_456i32, culture);
    }
}

#[test]
fn non_numeric_string_is_a_format_fallback() {
    for culture in Culture::all() {
        falls_back::<i32>(Value::from("test"), None, 0, ErrorKind::Format, culture);
        falls_back::<i32>(Value::from("test"), Some(-1), 0, ErrorKind::Format, culture);
    }
}

#[test]
fn fractional_string_is_a_format_fallback() {
    let culture = Culture::invariant();
    falls_back::<i32>(Value::from("3.65"), Some(-1), 0, ErrorKind::Format, &culture);
}

// ---------------------------------------------------------------------------
// bool => i32
// ---------------------------------------------------------------------------

#[test]
fn booleans() {
    for culture in Culture::all() {
        converts_to(Value::Bool(true), 1i32, culture);
        converts_to(Value::Bool(false), 0i32, culture);
        converts_to(Value::from(Some(true)), 1i32, culture);
        falls_back::<i32>(Value::from(None::<bool>), Some(-1), 0, ErrorKind::ArgumentNull, culture);
    }
}

// ---------------------------------------------------------------------------
// enum, objects => i32
// ---------------------------------------------------------------------------

#[test]
fn enum_member_converts_to_its_value() {
    use recast_api::Convertible;

    for culture in Culture::all() {
        converts_to(DayOfWeek::Monday.into_value(), 1i32, culture);
        converts_to(DayOfWeek::Saturday.into_value(), 6i32, culture);
    }
}

#[test]
fn conversion_operators() {
    for culture in Culture::all() {
        converts_to(Value::Object(ObjectRef::new(ImplicitIntegerNumber(10))), 10i32, culture);
        converts_to(Value::Object(ObjectRef::new(ExplicitIntegerNumber(12))), 12i32, culture);
    }
}

// ---------------------------------------------------------------------------
// f64, f32, decimal => i32
// ---------------------------------------------------------------------------

#[test]
fn doubles_truncate() {
    for culture in Culture::all() {
        converts_to(Value::F64(3.65), 3i32, culture);
        converts_to(Value::F64(-3.65), -3i32, culture);
        converts_to(Value::F64(f64::from(i32::MAX)), i32::MAX, culture);
        converts_to(Value::F64(f64::from(i32::MIN)), i32::MIN, culture);
    }
}

#[test]
fn exact_halves_truncate() {
    let culture = Culture::invariant();
    converts_to(Value::F64(3.5), 3i32, &culture);
    converts_to(Value::F64(-3.5), -3i32, &culture);
    converts_to(Value::F64(0.5), 0i32, &culture);
    converts_to(Value::F32(2.5), 2i32, &culture);
    converts_to(Value::F32(-2.5), -2i32, &culture);
    converts_to(Value::Decimal(Decimal::new(25, 1).unwrap()), 2i32, &culture);
}

#[test]
fn doubles_out_of_range() {
    let culture = Culture::invariant();
    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN, 2_147_483_648.0, -2_147_483_649.0] {
        falls_back::<i32>(Value::F64(value), Some(-1), 0, ErrorKind::Overflow, &culture);
    }
}

#[test]
fn nan_is_an_invalid_cast() {
    let culture = Culture::invariant();
    falls_back::<i32>(Value::F64(f64::NAN), Some(-1), 0, ErrorKind::InvalidCast, &culture);
    falls_back::<i32>(Value::F32(f32::NAN), Some(-1), 0, ErrorKind::InvalidCast, &culture);
}

#[test]
fn floats() {
    let culture = Culture::invariant();
    converts_to(Value::F32(3.65), 3i32, &culture);
    falls_back::<i32>(Value::F32(f32::INFINITY), Some(-1), 0, ErrorKind::Overflow, &culture);
    falls_back::<i32>(Value::F32(f32::MIN), None, 0, ErrorKind::Overflow, &culture);
}

#[test]
fn decimals() {
    let culture = Culture::invariant();
    converts_to(Value::Decimal(Decimal::new(365, 2).unwrap()), 3i32, &culture);
    converts_to(Value::Decimal(Decimal::from(i32::MIN)), i32::MIN, &culture);
    falls_back::<i32>(Value::Decimal(Decimal::MAX), Some(-1), 0, ErrorKind::Overflow, &culture);
    falls_back::<i32>(Value::Decimal(Decimal::MIN), Some(-1), 0, ErrorKind::Overflow, &culture);
}

// ---------------------------------------------------------------------------
// other integers => i32
// ---------------------------------------------------------------------------

#[test]
fn integers_widen_and_narrow() {
    let culture = Culture::invariant();
    converts_to(Value::U8(200), 200i32, &culture);
    converts_to(Value::I64(-5), -5i32, &culture);
    catches::<i32>(Value::I64(i64::MAX), Some(-1), 0, ErrorKind::Overflow, &culture);
    catches::<i32>(Value::U64(u64::MAX), None, 0, ErrorKind::Overflow, &culture);
}

#[test]
fn unsupported_sources_are_caught() {
    let culture = Culture::invariant();
    let guid = Value::Guid(uuid::Uuid::nil());
    catches::<i32>(guid, Some(-1), 0, ErrorKind::InvalidCast, &culture);
}
