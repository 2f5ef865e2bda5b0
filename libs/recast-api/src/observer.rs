use crate::culture::Culture;
use crate::error::ConversionError;
use crate::types::TypeTag;
use crate::value::Value;

/// Sink for conversion diagnostics.
///
/// Informed of every fallback to the default value and of every conversion
/// error that dispatch recovered from. Notifications carry the full request
/// context: the original value, the target type, the effective default and
/// the culture in use.
pub trait ConversionObserver {
    /// A known condition (blank input, overflow, unparsable string, ...)
    /// made the converter return the default.
    fn on_fallback_to_default(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        reason: &ConversionError,
    );

    /// A converter failed and dispatch returned the default instead.
    fn on_caught_error(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        error: &ConversionError,
    );
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {
    fn on_fallback_to_default(
        &self,
        _value: &Value<'_>,
        _target: &TypeTag,
        _default: &Value<'_>,
        _culture: &Culture,
        _reason: &ConversionError,
    ) {
    }

    fn on_caught_error(
        &self,
        _value: &Value<'_>,
        _target: &TypeTag,
        _default: &Value<'_>,
        _culture: &Culture,
        _error: &ConversionError,
    ) {
    }
}

/// Everything a converter needs besides the value itself.
///
/// Built once per conversion by the dispatch core; the observer is already
/// resolved (a missing observer becomes [`NoopObserver`]).
pub struct ConversionContext<'c> {
    pub target: &'c TypeTag,
    pub default: &'c Value<'c>,
    pub culture: &'c Culture,
    pub observer: &'c dyn ConversionObserver,
}

impl ConversionContext<'_> {
    /// Report a fallback and hand back the default value.
    pub fn fall_back(&self, value: &Value<'_>, reason: ConversionError) -> Value<'static> {
        self.observer
            .on_fallback_to_default(value, self.target, self.default, self.culture, &reason);
        self.default.clone().into_owned()
    }
}
