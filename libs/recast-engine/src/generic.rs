use std::sync::Arc;

use recast_api::{ConversionContext, ConversionError, Converter, EnumType, EnumValue, TypeTag, Value};

use crate::coerce;

/// Catch-all converter used when no specialized converter matches.
///
/// Bound to one target type. Tries, in order: enum membership, the source
/// object's implicit then explicit conversion operator, platform coercion.
#[derive(Debug, Clone)]
pub struct GenericConverter {
    target: TypeTag,
}

impl GenericConverter {
    pub fn new(target: TypeTag) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &TypeTag {
        &self.target
    }

    /// Operator results of another type are ignored.
    fn by_operator(&self, value: &Value<'_>) -> Option<Value<'static>> {
        let Value::Object(obj) = value else {
            return None;
        };
        let fits = |v: &Value<'_>| v.type_tag().as_ref() == Some(&self.target);
        obj.get()
            .implicit_conversion(&self.target)
            .filter(fits)
            .or_else(|| obj.get().explicit_conversion(&self.target).filter(fits))
    }
}

/// Defined member of `ty` matching `value`, if any.
fn enum_member(ty: &Arc<EnumType>, value: &Value<'_>) -> Result<Option<Value<'static>>, ConversionError> {
    let member = match value {
        Value::Enum(e) if e.ty == *ty => return Ok(Some(Value::Enum(e.clone()))),
        Value::Enum(e) => {
            return Err(ConversionError::invalid_argument(format!(
                "a value of enum {} is not a member of {}",
                e.ty.name(),
                ty.name()
            )));
        }
        Value::Str(name) => ty.value_of(name),
        other => other
            .as_i128()
            .and_then(|n| i64::try_from(n).ok())
            .filter(|n| ty.is_defined(*n)),
    };
    Ok(member.map(|v| Value::Enum(EnumValue::new(ty.clone(), v))))
}

impl Converter for GenericConverter {
    fn convert(&self, value: &Value<'_>, ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
        if let TypeTag::Enum(ty) = &self.target {
            if let Some(member) = enum_member(ty, value)? {
                tracing::trace!(target_type = %self.target, "enum member");
                return Ok(member);
            }
        }

        if let Some(converted) = self.by_operator(value) {
            tracing::trace!(target_type = %self.target, "conversion operator");
            return Ok(converted);
        }

        coerce::coerce(value, &self.target, ctx.culture)
    }
}
