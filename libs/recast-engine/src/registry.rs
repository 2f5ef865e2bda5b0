use std::sync::OnceLock;

use recast_api::{Decimal, SpecializedConverter, TypeTag};

use crate::converters::{
    NarrowingConverter, StringToBoolConverter, StringToCharConverter, StringToDateTimeConverter,
    StringToGuidConverter, StringToNumberConverter,
};
use crate::error::EngineError;

static GLOBAL: OnceLock<ConverterRegistry> = OnceLock::new();

/// First converter declaring exactly `(from, to)`, in registration order.
pub fn find<'r>(
    from: &TypeTag,
    to: &TypeTag,
    converters: &'r [Box<dyn SpecializedConverter>],
) -> Option<&'r dyn SpecializedConverter> {
    converters
        .iter()
        .find(|c| c.from_type() == *from && c.to_type() == *to)
        .map(|c| c.as_ref())
}

/// Ordered, read-only set of specialized converters.
pub struct ConverterRegistry {
    converters: Vec<Box<dyn SpecializedConverter>>,
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.names())
            .finish()
    }
}

impl ConverterRegistry {
    /// The standard converter table.
    pub fn standard() -> Self {
        RegistryBuilder::standard().build()
    }

    /// Builder seeded with the standard table.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::standard()
    }

    /// Process-wide registry. Built from the standard table on first use
    /// unless [`ConverterRegistry::set_global`] ran before.
    pub fn global() -> &'static ConverterRegistry {
        GLOBAL.get_or_init(ConverterRegistry::standard)
    }

    /// Install the process-wide registry. Fails once it is initialized.
    pub fn set_global(registry: ConverterRegistry) -> Result<(), EngineError> {
        GLOBAL
            .set(registry)
            .map_err(|_| EngineError::Config("global converter registry is already initialized".into()))
    }

    pub fn find(&self, from: &TypeTag, to: &TypeTag) -> Option<&dyn SpecializedConverter> {
        find(from, to, &self.converters)
    }

    pub fn converters(&self) -> impl Iterator<Item = &dyn SpecializedConverter> {
        self.converters.iter().map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<String> {
        self.converters().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

/// Assembles a [`ConverterRegistry`].
pub struct RegistryBuilder {
    converters: Vec<Box<dyn SpecializedConverter>>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.converters.iter().map(|c| c.name()).collect();
        f.debug_struct("RegistryBuilder").field("converters", &names).finish()
    }
}

macro_rules! push_all {
    ($list:expr, $($conv:expr),* $(,)?) => {
        $( $list.push(Box::new($conv) as Box<dyn SpecializedConverter>); )*
    };
}

macro_rules! push_narrowing {
    ($list:expr, $wide:ty) => {
        push_all!(
            $list,
            NarrowingConverter::<$wide, i8>::new(),
            NarrowingConverter::<$wide, u8>::new(),
            NarrowingConverter::<$wide, i16>::new(),
            NarrowingConverter::<$wide, u16>::new(),
            NarrowingConverter::<$wide, i32>::new(),
            NarrowingConverter::<$wide, u32>::new(),
            NarrowingConverter::<$wide, i64>::new(),
            NarrowingConverter::<$wide, u64>::new(),
        )
    };
}

impl RegistryBuilder {
    pub fn empty() -> Self {
        Self { converters: Vec::new() }
    }

    /// string → numbers, then decimal/f32/f64 → integers, then
    /// string → char, bool, datetime, guid.
    pub fn standard() -> Self {
        let mut list = Vec::new();

        push_all!(
            list,
            StringToNumberConverter::<i8>::new(),
            StringToNumberConverter::<u8>::new(),
            StringToNumberConverter::<i16>::new(),
            StringToNumberConverter::<u16>::new(),
            StringToNumberConverter::<i32>::new(),
            StringToNumberConverter::<u32>::new(),
            StringToNumberConverter::<i64>::new(),
            StringToNumberConverter::<u64>::new(),
            StringToNumberConverter::<f32>::new(),
            StringToNumberConverter::<f64>::new(),
            StringToNumberConverter::<Decimal>::new(),
        );

        push_narrowing!(list, Decimal);
        push_narrowing!(list, f32);
        push_narrowing!(list, f64);

        push_all!(
            list,
            StringToCharConverter,
            StringToBoolConverter,
            StringToDateTimeConverter,
            StringToGuidConverter,
        );

        Self { converters: list }
    }

    /// Append a converter. Earlier registrations for the same type pair win.
    pub fn add(mut self, converter: impl SpecializedConverter + 'static) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Drop the converter registered under `name` (e.g. `"string->i32"`).
    pub fn exclude(mut self, name: &str) -> Result<Self, EngineError> {
        let before = self.converters.len();
        self.converters.retain(|c| c.name() != name);
        if self.converters.len() == before {
            return Err(EngineError::Config(format!("unknown converter '{name}'")));
        }
        Ok(self)
    }

    pub fn build(self) -> ConverterRegistry {
        tracing::debug!(converters = self.converters.len(), "built converter registry");
        ConverterRegistry {
            converters: self.converters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_api::{ConversionContext, ConversionError, Converter, Value};

    struct Shout;

    impl Converter for Shout {
        fn convert(&self, value: &Value<'_>, _ctx: &ConversionContext<'_>) -> Result<Value<'static>, ConversionError> {
            Ok(Value::from(value.to_string().to_uppercase()))
        }
    }

    impl SpecializedConverter for Shout {
        fn from_type(&self) -> TypeTag {
            TypeTag::String
        }

        fn to_type(&self) -> TypeTag {
            TypeTag::I32
        }

        fn name(&self) -> String {
            "shout".into()
        }
    }

    #[test]
    fn standard_order() {
        let names = ConverterRegistry::standard().names();
        assert_eq!(names.len(), 11 + 24 + 4);
        assert_eq!(names[0], "string->i8");
        assert_eq!(names[10], "string->decimal");
        assert_eq!(names[11], "decimal->i8");
        assert_eq!(names[19], "f32->i8");
        assert_eq!(names[27], "f64->i8");
        assert_eq!(&names[35..], ["string->char", "string->bool", "string->datetime", "string->guid"]);
    }

    #[test]
    fn finds_exact_pair_only() {
        let registry = ConverterRegistry::standard();
        let found = registry.find(&TypeTag::F64, &TypeTag::I32).map(|c| c.name());
        assert_eq!(found.as_deref(), Some("f64->i32"));
        assert!(registry.find(&TypeTag::I64, &TypeTag::I32).is_none());
        assert!(registry.find(&TypeTag::String, &TypeTag::nullable(TypeTag::I32)).is_none());
    }

    #[test]
    fn first_registration_wins() {
        let registry = ConverterRegistry::builder().add(Shout).build();
        let found = registry.find(&TypeTag::String, &TypeTag::I32).map(|c| c.name());
        assert_eq!(found.as_deref(), Some("string->i32"));

        let registry = ConverterRegistry::builder()
            .exclude("string->i32")
            .unwrap()
            .add(Shout)
            .build();
        let found = registry.find(&TypeTag::String, &TypeTag::I32).map(|c| c.name());
        assert_eq!(found.as_deref(), Some("shout"));
    }

    #[test]
    fn excluding_unknown_name_fails() {
        let err = ConverterRegistry::builder().exclude("string->matrix").unwrap_err();
        assert!(matches!(err, EngineError::Config(msg) if msg.contains("string->matrix")));
    }

    #[test]
    fn builder_debug_lists_converter_names() {
        let builder = RegistryBuilder::empty().add(Shout);
        assert_eq!(format!("{builder:?}"), r#"RegistryBuilder { converters: ["shout"] }"#);
    }

    #[test]
    fn global_is_standard() {
        assert_eq!(ConverterRegistry::global().len(), ConverterRegistry::standard().len());
    }
}
