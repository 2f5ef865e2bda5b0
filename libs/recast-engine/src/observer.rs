use recast_api::{ConversionError, ConversionObserver, Culture, TypeTag, Value};

/// Observer that reports notifications as `tracing` events: fallbacks at
/// `debug`, caught errors at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn on_fallback_to_default(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        reason: &ConversionError,
    ) {
        tracing::debug!(
            value = %value,
            target_type = %target,
            default = %default,
            culture = %culture,
            reason = %reason,
            "fell back to default value"
        );
    }

    fn on_caught_error(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        error: &ConversionError,
    ) {
        tracing::warn!(
            value = %value,
            target_type = %target,
            default = %default,
            culture = %culture,
            error = %error,
            "conversion failed, using default value"
        );
    }
}
