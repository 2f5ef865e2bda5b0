//! Shared helpers for the conversion integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt::Debug;

use recast_api::{
    ConversionError, ConversionObserver, Convertible, ConvertibleEnum, Culture, ErrorKind, ObjectValue, TypeTag,
    Value,
};
use recast_engine::ConvertExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Fallback,
    Caught,
}

/// One observer notification with its full context rendered to text.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub notice: Notice,
    pub value: String,
    pub target: TypeTag,
    pub default: String,
    pub culture: &'static str,
    pub error: ConversionError,
}

/// Observer that records every notification.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<Recorded>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.borrow().clone()
    }

    pub fn fallbacks(&self) -> Vec<ErrorKind> {
        self.kinds(Notice::Fallback)
    }

    pub fn caught(&self) -> Vec<ErrorKind> {
        self.kinds(Notice::Caught)
    }

    pub fn is_silent(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn kinds(&self, notice: Notice) -> Vec<ErrorKind> {
        self.events
            .borrow()
            .iter()
            .filter(|r| r.notice == notice)
            .map(|r| r.error.kind)
            .collect()
    }

    fn record(
        &self,
        notice: Notice,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        error: &ConversionError,
    ) {
        self.events.borrow_mut().push(Recorded {
            notice,
            value: value.to_string(),
            target: target.clone(),
            default: default.to_string(),
            culture: culture.name,
            error: error.clone(),
        });
    }
}

impl ConversionObserver for RecordingObserver {
    fn on_fallback_to_default(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        reason: &ConversionError,
    ) {
        self.record(Notice::Fallback, value, target, default, culture, reason);
    }

    fn on_caught_error(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        error: &ConversionError,
    ) {
        self.record(Notice::Caught, value, target, default, culture, error);
    }
}

/// Converting `value` yields `expected` without any notification, with and
/// without an explicit default.
pub fn converts_to<T>(value: Value<'_>, expected: T, culture: &Culture)
where
    T: Convertible + PartialEq + Debug + Clone,
{
    for default in [None, Some(expected.clone())] {
        let observer = RecordingObserver::new();
        let result = value.convert_to_full::<T>(default, culture, Some(&observer));
        assert_eq!(result, Ok(expected.clone()), "{value:?} in culture {culture}");
        assert!(observer.is_silent(), "{value:?} in culture {culture}: {:?}", observer.events());
    }
}

/// Converting `value` yields `default` (or the zero value `zero`) with exactly
/// one fallback of `kind` and no caught error.
pub fn falls_back<T>(value: Value<'_>, default: Option<T>, zero: T, kind: ErrorKind, culture: &Culture)
where
    T: Convertible + PartialEq + Debug + Clone,
{
    let observer = RecordingObserver::new();
    let expected = default.clone().unwrap_or(zero);
    let result = value.convert_to_full::<T>(default, culture, Some(&observer));
    assert_eq!(result, Ok(expected), "{value:?} in culture {culture}");
    assert_eq!(observer.fallbacks(), vec![kind], "{value:?} in culture {culture}");
    assert!(observer.caught().is_empty(), "{value:?}: {:?}", observer.events());
}

/// Converting `value` yields `default` (or `zero`) with exactly one caught
/// error of `kind` and no fallback.
pub fn catches<T>(value: Value<'_>, default: Option<T>, zero: T, kind: ErrorKind, culture: &Culture)
where
    T: Convertible + PartialEq + Debug + Clone,
{
    let observer = RecordingObserver::new();
    let expected = default.clone().unwrap_or(zero);
    let result = value.convert_to_full::<T>(default, culture, Some(&observer));
    assert_eq!(result, Ok(expected), "{value:?} in culture {culture}");
    assert_eq!(observer.caught(), vec![kind], "{value:?} in culture {culture}");
    assert!(observer.fallbacks().is_empty(), "{value:?}: {:?}", observer.events());
}

#[derive(ConvertibleEnum, Debug, Clone, Copy, PartialEq)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Integer wrapper with an implicit conversion to `i32`.
#[derive(Debug)]
pub struct ImplicitIntegerNumber(pub i32);

impl ObjectValue for ImplicitIntegerNumber {
    fn type_name(&self) -> &'static str {
        "ImplicitIntegerNumber"
    }

    fn implicit_conversion(&self, target: &TypeTag) -> Option<Value<'static>> {
        match target {
            TypeTag::I32 => Some(Value::I32(self.0)),
            _ => None,
        }
    }
}

/// Integer wrapper with an explicit conversion to `i32`.
#[derive(Debug)]
pub struct ExplicitIntegerNumber(pub i32);

impl ObjectValue for ExplicitIntegerNumber {
    fn type_name(&self) -> &'static str {
        "ExplicitIntegerNumber"
    }

    fn explicit_conversion(&self, target: &TypeTag) -> Option<Value<'static>> {
        match target {
            TypeTag::I32 => Some(Value::I32(self.0)),
            _ => None,
        }
    }
}
