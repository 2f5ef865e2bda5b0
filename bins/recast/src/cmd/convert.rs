use std::cell::Cell;

use recast_api::{ConversionError, ConversionObserver, Culture, TypeTag, Value};
use recast_engine::{Engine, TracingObserver};

use crate::config::ConvertArgs;
use crate::error::CliError;

/// Forwards notifications to [`TracingObserver`] and remembers that one
/// happened.
#[derive(Default)]
struct Watch {
    notified: Cell<bool>,
}

impl ConversionObserver for Watch {
    fn on_fallback_to_default(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        reason: &ConversionError,
    ) {
        self.notified.set(true);
        TracingObserver.on_fallback_to_default(value, target, default, culture, reason);
    }

    fn on_caught_error(
        &self,
        value: &Value<'_>,
        target: &TypeTag,
        default: &Value<'_>,
        culture: &Culture,
        error: &ConversionError,
    ) {
        self.notified.set(true);
        TracingObserver.on_caught_error(value, target, default, culture, error);
    }
}

pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    let config = super::load_config(args.config.as_deref())?;
    let registry = config.build_registry()?;
    let culture = match &args.culture {
        Some(name) => Culture::lookup(name).ok_or_else(|| CliError::UnknownCulture(name.clone()))?,
        None => config.culture()?,
    };
    let engine = Engine::new(&registry);
    let target = parse_type(&args.to)?;

    let input = args.value.as_deref().map_or(Value::Null, Value::from);
    let value = match &args.from {
        Some(from) => exact(&engine, &input, &parse_type(from)?, &culture, "value")?,
        None => input.into_owned(),
    };
    let default = match &args.default {
        Some(text) => exact(&engine, &Value::from(text.as_str()), &target, &culture, "default")?,
        None => Value::Null,
    };

    tracing::debug!(value = %value, target_type = %target, culture = %culture, "converting");
    let watch = Watch::default();
    let converted = engine.convert(&value, &target, &default, &culture, Some(&watch))?;
    if args.strict && watch.notified.get() {
        return Err(CliError::NotConvertible {
            what: "value",
            text: value.to_string(),
            target,
        });
    }

    println!("{converted}");
    Ok(())
}

fn parse_type(name: &str) -> Result<TypeTag, CliError> {
    TypeTag::parse(name).ok_or_else(|| CliError::UnknownType(name.to_string()))
}

/// Convert without falling back: any notification is an error.
fn exact(
    engine: &Engine<'_>,
    value: &Value<'_>,
    target: &TypeTag,
    culture: &Culture,
    what: &'static str,
) -> Result<Value<'static>, CliError> {
    let watch = Watch::default();
    let converted = engine.convert(value, target, &Value::Null, culture, Some(&watch))?;
    if watch.notified.get() {
        return Err(CliError::NotConvertible {
            what,
            text: value.to_string(),
            target: target.clone(),
        });
    }
    Ok(converted)
}
