pub mod coerce;
pub mod config;
pub mod converters;
pub mod dispatch;
pub mod error;
pub mod generic;
pub mod observer;
pub mod parse;
pub mod registry;
pub mod typed;

pub use config::RecastConfig;
pub use dispatch::Engine;
pub use error::EngineError;
pub use generic::GenericConverter;
pub use observer::TracingObserver;
pub use registry::{ConverterRegistry, RegistryBuilder};
pub use typed::ConvertExt;

/// Convert `value` to `target` with the process-wide engine.
///
/// See [`Engine::convert`].
pub fn convert(
    value: &recast_api::Value<'_>,
    target: &recast_api::TypeTag,
    default: &recast_api::Value<'_>,
    culture: &recast_api::Culture,
    observer: Option<&dyn recast_api::ConversionObserver>,
) -> Result<recast_api::Value<'static>, recast_api::ConversionError> {
    Engine::global().convert(value, target, default, culture, observer)
}
