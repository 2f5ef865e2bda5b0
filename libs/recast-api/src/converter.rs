use crate::error::ConversionError;
use crate::observer::ConversionContext;
use crate::types::TypeTag;
use crate::value::Value;

/// Conversion strategy.
///
/// Converters never see `Null`, `DbNull` or blank strings; dispatch handles
/// those. A known failure is either reported through
/// [`ConversionContext::fall_back`] (the converter returns the default
/// itself) or returned as a recoverable [`ConversionError`] that dispatch
/// catches. Errors of kind `Other` reach the caller.
pub trait Converter: Send + Sync {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError>;
}

/// Converter registered for one exact (source, target) type pair.
pub trait SpecializedConverter: Converter {
    fn from_type(&self) -> TypeTag;

    fn to_type(&self) -> TypeTag;

    /// Registry name, `"<from>-><to>"` by default.
    fn name(&self) -> String {
        format!("{}->{}", self.from_type(), self.to_type())
    }
}
