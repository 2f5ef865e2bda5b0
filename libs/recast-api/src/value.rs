use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::decimal::Decimal;
use crate::types::{EnumType, TypeTag};

/// Canonical dynamic value: the untyped source of every conversion.
///
/// Strategy by type:
/// - Scalars (integers, floats, bool, char): stored inline
/// - Decimal: `(mantissa, scale)`, see [`Decimal`]
/// - String: `Cow` (zero-copy when possible)
/// - Enum: member value plus its type descriptor
/// - Object: embedding-application value exposing conversion operators
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Absent value.
    Null,
    /// Missing-value sentinel (a database NULL).
    DbNull,
    Bool(bool),
    Char(char),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    DateTime(DateTime<Local>),
    Guid(Uuid),
    Str(Cow<'a, str>),
    Enum(EnumValue),
    Object(ObjectRef),
}

impl Value<'_> {
    /// Runtime type of the value. `None` for `Null` and `DbNull`.
    pub fn type_tag(&self) -> Option<TypeTag> {
        let tag = match self {
            Value::Null | Value::DbNull => return None,
            Value::Bool(_) => TypeTag::Bool,
            Value::Char(_) => TypeTag::Char,
            Value::I8(_) => TypeTag::I8,
            Value::U8(_) => TypeTag::U8,
            Value::I16(_) => TypeTag::I16,
            Value::U16(_) => TypeTag::U16,
            Value::I32(_) => TypeTag::I32,
            Value::U32(_) => TypeTag::U32,
            Value::I64(_) => TypeTag::I64,
            Value::U64(_) => TypeTag::U64,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
            Value::Decimal(_) => TypeTag::Decimal,
            Value::DateTime(_) => TypeTag::DateTime,
            Value::Guid(_) => TypeTag::Guid,
            Value::Str(_) => TypeTag::String,
            Value::Enum(e) => TypeTag::Enum(e.ty.clone()),
            Value::Object(o) => TypeTag::Object(o.0.type_name()),
        };
        Some(tag)
    }

    /// `Null` or `DbNull`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::DbNull)
    }

    /// Empty or whitespace-only string.
    pub fn is_blank_str(&self) -> bool {
        matches!(self, Value::Str(s) if s.trim().is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload widened to `i128`. Enums are not integers here.
    pub fn as_i128(&self) -> Option<i128> {
        let n = match *self {
            Value::I8(v) => v.into(),
            Value::U8(v) => v.into(),
            Value::I16(v) => v.into(),
            Value::U16(v) => v.into(),
            Value::I32(v) => v.into(),
            Value::U32(v) => v.into(),
            Value::I64(v) => v.into(),
            Value::U64(v) => v.into(),
            _ => return None,
        };
        Some(n)
    }

    /// Detach from borrowed string data.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::DbNull => Value::DbNull,
            Value::Bool(v) => Value::Bool(v),
            Value::Char(v) => Value::Char(v),
            Value::I8(v) => Value::I8(v),
            Value::U8(v) => Value::U8(v),
            Value::I16(v) => Value::I16(v),
            Value::U16(v) => Value::U16(v),
            Value::I32(v) => Value::I32(v),
            Value::U32(v) => Value::U32(v),
            Value::I64(v) => Value::I64(v),
            Value::U64(v) => Value::U64(v),
            Value::F32(v) => Value::F32(v),
            Value::F64(v) => Value::F64(v),
            Value::Decimal(v) => Value::Decimal(v),
            Value::DateTime(v) => Value::DateTime(v),
            Value::Guid(v) => Value::Guid(v),
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::Enum(e) => Value::Enum(e),
            Value::Object(o) => Value::Object(o),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("(null)"),
            Value::DbNull => f.write_str("[NULL]"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Guid(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Enum(e) => write!(f, "{e}"),
            Value::Object(o) => write!(f, "{:?}", o.0),
        }
    }
}

/// A member (or an undefined discriminant) of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub ty: Arc<EnumType>,
    pub value: i64,
}

impl EnumValue {
    pub fn new(ty: Arc<EnumType>, value: i64) -> Self {
        Self { ty, value }
    }

    /// Member name, `None` for an undefined discriminant.
    pub fn name(&self) -> Option<&'static str> {
        self.ty.name_of(self.value)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Embedding-application value with user-defined conversion operators.
///
/// The generic converter asks for an implicit conversion first, then an
/// explicit one. Returning `None` means "no operator to this type".
pub trait ObjectValue: fmt::Debug + Send + Sync {
    /// Type identity, matched against [`TypeTag::Object`].
    fn type_name(&self) -> &'static str;

    fn implicit_conversion(&self, _target: &TypeTag) -> Option<Value<'static>> {
        None
    }

    fn explicit_conversion(&self, _target: &TypeTag) -> Option<Value<'static>> {
        None
    }
}

/// Shared handle to an [`ObjectValue`]. Equality is identity.
#[derive(Debug, Clone)]
pub struct ObjectRef(pub Arc<dyn ObjectValue>);

impl ObjectRef {
    pub fn new(value: impl ObjectValue + 'static) -> Self {
        Self(Arc::new(value))
    }

    pub fn get(&self) -> &dyn ObjectValue {
        self.0.as_ref()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// ---------------------------------------------------------------------------
// From impls: Rust values → Value
// ---------------------------------------------------------------------------

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from!(
    bool => Bool,
    char => Char,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    DateTime<Local> => DateTime,
    Uuid => Guid,
    EnumValue => Enum,
    ObjectRef => Object,
);

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Str(s)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

static NULL: Value<'static> = Value::Null;

/// Positional list of values: a record read from an untyped source.
pub struct Row<'a>(pub Vec<Value<'a>>);

impl<'a> Row<'a> {
    /// Value at `index`; out-of-range positions read as `Null`.
    pub fn get(&self, index: usize) -> &Value<'a> {
        self.0.get(index).unwrap_or(&NULL)
    }
}
