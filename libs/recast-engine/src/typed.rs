use recast_api::{ConversionError, ConversionObserver, Convertible, Culture, Value};

use crate::dispatch::Engine;

/// Typed conversions over the process-wide engine.
///
/// Without a default the target's zero value is used (`None` for
/// `Option<T>`); without a culture, [`Culture::current`]. Every method
/// delegates to [`ConvertExt::convert_to_full`].
pub trait ConvertExt {
    fn convert_to_full<T: Convertible>(
        &self,
        default: Option<T>,
        culture: &Culture,
        observer: Option<&dyn ConversionObserver>,
    ) -> Result<T, ConversionError>;

    fn convert_to<T: Convertible>(&self) -> Result<T, ConversionError> {
        self.convert_to_full(None, &Culture::current(), None)
    }

    fn convert_to_observed<T: Convertible>(&self, observer: &dyn ConversionObserver) -> Result<T, ConversionError> {
        self.convert_to_full(None, &Culture::current(), Some(observer))
    }

    fn convert_to_with_format<T: Convertible>(&self, culture: &Culture) -> Result<T, ConversionError> {
        self.convert_to_full(None, culture, None)
    }

    fn convert_to_or_observed<T: Convertible>(
        &self,
        default: T,
        observer: &dyn ConversionObserver,
    ) -> Result<T, ConversionError> {
        self.convert_to_full(Some(default), &Culture::current(), Some(observer))
    }

    fn convert_to_or_with_format<T: Convertible>(&self, default: T, culture: &Culture) -> Result<T, ConversionError> {
        self.convert_to_full(Some(default), culture, None)
    }
}

impl ConvertExt for Value<'_> {
    fn convert_to_full<T: Convertible>(
        &self,
        default: Option<T>,
        culture: &Culture,
        observer: Option<&dyn ConversionObserver>,
    ) -> Result<T, ConversionError> {
        Engine::global().convert_typed(self, default, culture, observer)
    }
}

impl Engine<'_> {
    /// Typed form of [`Engine::convert`].
    pub fn convert_typed<T: Convertible>(
        &self,
        value: &Value<'_>,
        default: Option<T>,
        culture: &Culture,
        observer: Option<&dyn ConversionObserver>,
    ) -> Result<T, ConversionError> {
        let target = T::type_tag();
        let default = default.map_or(Value::Null, T::into_value);
        let converted = self.convert(value, &target, &default, culture, observer)?;
        let produced = converted.type_tag();
        T::from_value(converted).ok_or_else(|| {
            let produced = produced.map_or_else(|| "null".to_string(), |t| t.name());
            ConversionError::invalid_cast(format!("converter produced a {produced} value, not a {target}"))
        })
    }
}
