use proptest::prelude::*;
use recast_api::{Culture, ErrorKind, Value};
use recast_engine::ConvertExt;

mod common;

use common::RecordingObserver;

fn culture_at(index: usize) -> Culture {
    let all = Culture::all();
    all[index % all.len()]
}

proptest! {
    /// Property: "N" style output of every culture reads back unchanged
    #[test]
    fn prop_n_format_reads_back(n in any::<i32>(), decimals in 0usize..3, index in 0usize..64) {
        let culture = culture_at(index);
        let text = culture.format_number(i128::from(n), decimals);
        let observer = RecordingObserver::new();

        let result = Value::from(text.as_str()).convert_to_full::<i32>(None, &culture, Some(&observer));

        prop_assert_eq!(result, Ok(n), "{} in {}", text, culture);
        prop_assert!(observer.is_silent());
    }

    /// Property: blank strings always fall back with a single null notice
    #[test]
    fn prop_blank_strings_fall_back(text in "[ \t\r\n]{0,8}", default in any::<i64>()) {
        let observer = RecordingObserver::new();

        let result = Value::from(text.as_str()).convert_to_or_observed(default, &observer);

        prop_assert_eq!(result, Ok(default));
        prop_assert_eq!(observer.fallbacks(), vec![ErrorKind::ArgumentNull]);
        prop_assert!(observer.caught().is_empty());
    }

    /// Property: in-range doubles truncate toward zero
    #[test]
    fn prop_in_range_doubles_truncate(x in -2147483648.0f64..2147483647.0) {
        let observer = RecordingObserver::new();

        let result = Value::F64(x).convert_to_observed::<i32>(&observer);

        prop_assert_eq!(result, Ok(x.trunc() as i32));
        prop_assert!(observer.is_silent());
    }

    /// Property: out-of-range doubles yield the default with an overflow
    #[test]
    fn prop_out_of_range_doubles_overflow(x in 2147483648.0f64..1e300, negative in any::<bool>()) {
        let x = if negative { -x - 1.0 } else { x };
        let observer = RecordingObserver::new();

        let result = Value::F64(x).convert_to_or_observed(-5i32, &observer);

        prop_assert_eq!(result, Ok(-5));
        prop_assert_eq!(observer.fallbacks(), vec![ErrorKind::Overflow]);
        prop_assert!(observer.caught().is_empty());
    }

    /// Property: arbitrary text never fails the call and notifies at most once
    #[test]
    fn prop_arbitrary_text_is_total(text in "\\PC{0,24}", index in 0usize..64) {
        let culture = culture_at(index);
        let observer = RecordingObserver::new();

        let result = Value::from(text.as_str()).convert_to_full::<i16>(Some(7), &culture, Some(&observer));

        prop_assert!(result.is_ok());
        prop_assert!(observer.events().len() <= 1);
    }
}
