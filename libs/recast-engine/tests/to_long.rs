use recast_api::{Culture, Decimal, ErrorKind, Value};

mod common;

use common::{catches, converts_to, falls_back};

#[test]
fn null_db_null_and_blank_fall_back() {
    for culture in Culture::all() {
        for value in [Value::Null, Value::DbNull, Value::from(""), Value::from("   ")] {
            falls_back::<i64>(value.clone(), None, 0, ErrorKind::ArgumentNull, culture);
            falls_back::<i64>(value, Some(-1), 0, ErrorKind::ArgumentNull, culture);
        }
    }
}

#[test]
fn numeric_strings() {
    for culture in Culture::all() {
        for (text, expected) in [("1", 1i64), ("-1", -1), ("  1", 1), ("\t1", 1), ("1\n", 1)] {
            converts_to(Value::from(text), expected, culture);
        }
        converts_to(Value::from(culture.format_number(123_456, 0)), 123_456i64, culture);
        converts_to(Value::from(culture.format_number(123_456, 2)), 123_456i64, culture);
        converts_to(Value::from(culture.format_number(-123_456, 2)), -123_456i64, culture);
        let signed = format!("{}{}", culture.positive_sign, culture.format_number(123_456, 2));
        converts_to(Value::from(signed), 123_456i64, culture);
        converts_to(
            Value::from(culture.format_number(i64::MIN.into(), 0)),
            i64::MIN,
            culture,
        );
    }
}

#[test]
fn non_numeric_and_out_of_range_strings() {
    for culture in Culture::all() {
        falls_back::<i64>(Value::from("test"), Some(-1), 0, ErrorKind::Format, culture);
        falls_back::<i64>(Value::from("9223372036854775808"), Some(-1), 0, ErrorKind::Format, culture);
    }
}

#[test]
fn floating_point_sources() {
    let culture = Culture::invariant();
    converts_to(Value::F64(-7.99), -7i64, &culture);
    converts_to(Value::F64(3.5), 3i64, &culture);
    converts_to(Value::F64(-3.5), -3i64, &culture);
    converts_to(Value::F32(2.5), 2i64, &culture);
    converts_to(Value::F32(1e10), 10_000_000_000i64, &culture);
    falls_back::<i64>(Value::F64(9.3e18), Some(-1), 0, ErrorKind::Overflow, &culture);
    falls_back::<i64>(Value::F64(f64::NAN), Some(-1), 0, ErrorKind::InvalidCast, &culture);
}

#[test]
fn decimal_sources() {
    let culture = Culture::invariant();
    converts_to(Value::Decimal(Decimal::from(i64::MAX)), i64::MAX, &culture);
    converts_to(Value::Decimal(Decimal::new(-25, 1).unwrap()), -2i64, &culture);
    falls_back::<i64>(Value::Decimal(Decimal::MAX), Some(-1), 0, ErrorKind::Overflow, &culture);
}

#[test]
fn integer_sources() {
    let culture = Culture::invariant();
    converts_to(Value::I32(i32::MIN), i64::from(i32::MIN), &culture);
    converts_to(Value::U32(u32::MAX), i64::from(u32::MAX), &culture);
    catches::<i64>(Value::U64(u64::MAX), Some(-1), 0, ErrorKind::Overflow, &culture);
}
