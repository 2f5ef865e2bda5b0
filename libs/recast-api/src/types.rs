use std::fmt;
use std::sync::Arc;

use crate::decimal::Decimal;
use crate::value::{EnumValue, Value};

/// Target-type descriptor.
///
/// Closed set of type categories the engine dispatches on. Two tags are the
/// same type when they compare equal; enums compare by name, objects by their
/// declared type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Char,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
    DateTime,
    Guid,
    String,
    Enum(Arc<EnumType>),
    /// Nullable wrapper: `Null` is a valid value of this type.
    Nullable(Box<TypeTag>),
    /// Embedding-application type, identified by name.
    Object(&'static str),
}

impl TypeTag {
    pub fn nullable(inner: TypeTag) -> Self {
        TypeTag::Nullable(Box::new(inner))
    }

    /// Underlying type of a nullable wrapper.
    pub fn nullable_inner(&self) -> Option<&TypeTag> {
        match self {
            TypeTag::Nullable(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether a missing default is replaced by [`TypeTag::zero_value`].
    ///
    /// `String` counts as a value kind: a Rust string has no null state, so
    /// its zero value is `""`. Nullable strings are `Nullable(String)`.
    pub fn is_value_kind(&self) -> bool {
        !matches!(self, TypeTag::Object(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            TypeTag::I8
                | TypeTag::U8
                | TypeTag::I16
                | TypeTag::U16
                | TypeTag::I32
                | TypeTag::U32
                | TypeTag::I64
                | TypeTag::U64
        )
    }

    /// Inclusive range of an integer type.
    pub fn integer_range(&self) -> Option<(i128, i128)> {
        let range = match self {
            TypeTag::I8 => (i8::MIN.into(), i8::MAX.into()),
            TypeTag::U8 => (0, u8::MAX.into()),
            TypeTag::I16 => (i16::MIN.into(), i16::MAX.into()),
            TypeTag::U16 => (0, u16::MAX.into()),
            TypeTag::I32 => (i32::MIN.into(), i32::MAX.into()),
            TypeTag::U32 => (0, u32::MAX.into()),
            TypeTag::I64 => (i64::MIN.into(), i64::MAX.into()),
            TypeTag::U64 => (0, u64::MAX.into()),
            _ => return None,
        };
        Some(range)
    }

    /// The type's zero value: what a missing default becomes.
    pub fn zero_value(&self) -> Value<'static> {
        match self {
            TypeTag::Bool => Value::Bool(false),
            TypeTag::Char => Value::Char('\0'),
            TypeTag::I8 => Value::I8(0),
            TypeTag::U8 => Value::U8(0),
            TypeTag::I16 => Value::I16(0),
            TypeTag::U16 => Value::U16(0),
            TypeTag::I32 => Value::I32(0),
            TypeTag::U32 => Value::U32(0),
            TypeTag::I64 => Value::I64(0),
            TypeTag::U64 => Value::U64(0),
            TypeTag::F32 => Value::F32(0.0),
            TypeTag::F64 => Value::F64(0.0),
            TypeTag::Decimal => Value::Decimal(Decimal::ZERO),
            TypeTag::DateTime => Value::DateTime(chrono::DateTime::<chrono::Local>::default()),
            TypeTag::Guid => Value::Guid(uuid::Uuid::nil()),
            TypeTag::String => Value::Str("".into()),
            TypeTag::Enum(ty) => Value::Enum(EnumValue::new(ty.clone(), 0)),
            TypeTag::Nullable(_) | TypeTag::Object(_) => Value::Null,
        }
    }

    /// Build an integer value of this type, `None` if out of range or not an
    /// integer type.
    pub fn integer_value(&self, n: i128) -> Option<Value<'static>> {
        let value = match self {
            TypeTag::I8 => Value::I8(n.try_into().ok()?),
            TypeTag::U8 => Value::U8(n.try_into().ok()?),
            TypeTag::I16 => Value::I16(n.try_into().ok()?),
            TypeTag::U16 => Value::U16(n.try_into().ok()?),
            TypeTag::I32 => Value::I32(n.try_into().ok()?),
            TypeTag::U32 => Value::U32(n.try_into().ok()?),
            TypeTag::I64 => Value::I64(n.try_into().ok()?),
            TypeTag::U64 => Value::U64(n.try_into().ok()?),
            _ => return None,
        };
        Some(value)
    }

    /// Short name used in converter names, messages and the CLI.
    pub fn name(&self) -> String {
        match self {
            TypeTag::Bool => "bool".into(),
            TypeTag::Char => "char".into(),
            TypeTag::I8 => "i8".into(),
            TypeTag::U8 => "u8".into(),
            TypeTag::I16 => "i16".into(),
            TypeTag::U16 => "u16".into(),
            TypeTag::I32 => "i32".into(),
            TypeTag::U32 => "u32".into(),
            TypeTag::I64 => "i64".into(),
            TypeTag::U64 => "u64".into(),
            TypeTag::F32 => "f32".into(),
            TypeTag::F64 => "f64".into(),
            TypeTag::Decimal => "decimal".into(),
            TypeTag::DateTime => "datetime".into(),
            TypeTag::Guid => "guid".into(),
            TypeTag::String => "string".into(),
            TypeTag::Enum(ty) => ty.name().to_string(),
            TypeTag::Nullable(inner) => format!("{}?", inner.name()),
            TypeTag::Object(name) => (*name).to_string(),
        }
    }

    /// Parse a scalar type name (`"i32"`, `"int"`, `"decimal?"`, ...).
    ///
    /// Enum and object types have no textual form.
    pub fn parse(name: &str) -> Option<TypeTag> {
        if let Some(inner) = name.strip_suffix('?') {
            return TypeTag::parse(inner).map(TypeTag::nullable);
        }
        let tag = match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => TypeTag::Bool,
            "char" => TypeTag::Char,
            "i8" | "sbyte" => TypeTag::I8,
            "u8" | "byte" => TypeTag::U8,
            "i16" | "short" => TypeTag::I16,
            "u16" | "ushort" => TypeTag::U16,
            "i32" | "int" => TypeTag::I32,
            "u32" | "uint" => TypeTag::U32,
            "i64" | "long" => TypeTag::I64,
            "u64" | "ulong" => TypeTag::U64,
            "f32" | "float" => TypeTag::F32,
            "f64" | "double" => TypeTag::F64,
            "decimal" => TypeTag::Decimal,
            "datetime" => TypeTag::DateTime,
            "guid" | "uuid" => TypeTag::Guid,
            "string" | "str" => TypeTag::String,
            _ => return None,
        };
        Some(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Enumeration type descriptor.
///
/// Members are kept in declaration order; several names may share a value,
/// the first one is canonical.
#[derive(Debug)]
pub struct EnumType {
    name: &'static str,
    underlying: TypeTag,
    members: Vec<(&'static str, i64)>,
}

impl EnumType {
    pub fn new(name: &'static str, underlying: TypeTag, members: Vec<(&'static str, i64)>) -> Self {
        Self {
            name,
            underlying,
            members,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Integer type backing the enum.
    pub fn underlying(&self) -> &TypeTag {
        &self.underlying
    }

    pub fn members(&self) -> &[(&'static str, i64)] {
        &self.members
    }

    /// Case-sensitive member lookup by name.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|(member, _)| *member == name)
            .map(|(_, v)| *v)
    }

    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(member, _)| *member)
    }

    pub fn is_defined(&self, value: i64) -> bool {
        self.name_of(value).is_some()
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnumType {}

impl std::hash::Hash for EnumType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
