use recast_api::{
    ConversionContext, ConversionError, ConversionObserver, Converter, Culture, NoopObserver, TypeTag, Value,
};

use crate::generic::GenericConverter;
use crate::registry::ConverterRegistry;

/// Conversion entry point: default handling, converter selection,
/// error classification and observer notification.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'r> {
    registry: &'r ConverterRegistry,
}

impl Engine<'static> {
    /// Engine over the process-wide registry.
    pub fn global() -> Self {
        Engine::new(ConverterRegistry::global())
    }
}

impl<'r> Engine<'r> {
    pub fn new(registry: &'r ConverterRegistry) -> Self {
        Self { registry }
    }

    /// Convert `value` to `target`.
    ///
    /// 1. A `Null`/`DbNull` default for a value-kind target becomes the
    ///    target's zero value; so does a default of the wrong type.
    /// 2. `Null`, `DbNull` and blank strings yield the default after an
    ///    `ArgumentNull` fallback notification.
    /// 3. A nullable target is unwrapped.
    /// 4. The specialized converter for the exact (runtime type, target)
    ///    pair runs, or the generic converter when none is registered.
    /// 5. Recoverable converter errors are reported through
    ///    `on_caught_error` and yield the default. Errors of kind `Other`
    ///    are returned.
    pub fn convert(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        observer: Option<&dyn ConversionObserver>,
    ) -> Result<Value<'static>, ConversionError> {
        let observer = observer.unwrap_or(&NoopObserver);
        let span = tracing::debug_span!("convert", target_type = %target, culture = %culture);
        let _enter = span.enter();

        let default = effective_default(target, default);

        if value.is_null() || value.is_blank_str() {
            let reason = ConversionError::argument_null("value is null, DBNull or a blank string");
            observer.on_fallback_to_default(value, target, &default, culture, &reason);
            return Ok(default);
        }

        let resolved = target.nullable_inner().unwrap_or(target);
        let ctx = ConversionContext {
            target: resolved,
            default: &default,
            culture,
            observer,
        };

        let specialized = value
            .type_tag()
            .and_then(|source| self.registry.find(&source, resolved));
        let result = match specialized {
            Some(converter) => {
                tracing::trace!(converter = %converter.name(), "specialized converter");
                converter.convert(value, &ctx)
            }
            None => {
                tracing::trace!("generic converter");
                GenericConverter::new(resolved.clone()).convert(value, &ctx)
            }
        };

        match result {
            Ok(converted) => Ok(converted),
            Err(e) if e.is_recoverable() => {
                observer.on_caught_error(value, resolved, &default, culture, &e);
                Ok(default)
            }
            Err(e) => Err(e.with_context(format!("converting '{value}' to {target}"))),
        }
    }
}

/// Default actually returned on fallback.
fn effective_default(target: &TypeTag, default: &Value<'_>) -> Value<'static> {
    if default.is_null() {
        return if target.is_value_kind() {
            target.zero_value()
        } else {
            default.clone().into_owned()
        };
    }

    let resolved = target.nullable_inner().unwrap_or(target);
    if default.type_tag().as_ref() != Some(resolved) {
        tracing::debug!(target_type = %target, default = %default, "default of another type replaced by zero value");
        return target.zero_value();
    }
    default.clone().into_owned()
}
