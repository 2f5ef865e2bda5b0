use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive macro for enum conversion targets.
///
/// Implements `recast_api::Convertible` for a fieldless enum and adds an
/// `enum_type() -> Arc<EnumType>` associated function describing it. Member
/// names are the variant identifiers; values are the enum discriminants.
///
/// The underlying integer type follows `#[repr(..)]` (default `i32`).
/// Discriminants above `i64::MAX` (possible with `repr(u64)`) fail to compile.
///
/// # Example
///
/// ```ignore
/// #[derive(ConvertibleEnum, Debug, PartialEq)]
/// #[recast(name = "DayOfWeek")]
/// pub enum Weekday {
///     Sunday,
///     Monday,
///     #[recast(name = "Tue")]
///     Tuesday = 2,
/// }
/// ```
#[proc_macro_derive(ConvertibleEnum, attributes(recast))]
pub fn derive_convertible_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ConvertibleEnum only supports enums",
            ))
        }
    };

    let enum_name = recast_name(&input.attrs)?.unwrap_or_else(|| name.to_string());
    let underlying = underlying_tag(&input.attrs)?;

    let mut members = Vec::new();
    let mut from_arms = Vec::new();
    let mut range_checks = Vec::new();
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ConvertibleEnum variants cannot carry fields",
            ));
        }
        let ident = &variant.ident;
        let member = recast_name(&variant.attrs)?.unwrap_or_else(|| ident.to_string());
        members.push(quote! { (#member, #name::#ident as i64) });
        from_arms.push(quote! { v if v == #name::#ident as i64 => Some(#name::#ident), });
        let message = format!("discriminant of {name}::{ident} does not fit in i64");
        range_checks.push(quote! {
            assert!((#name::#ident as i128) <= i64::MAX as i128, #message);
        });
    }

    let into_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        quote! { #name::#ident => #name::#ident as i64, }
    });

    Ok(quote! {
        // members are stored as i64; a repr(u64) discriminant may not fit
        const _: () = {
            #(#range_checks)*
        };

        impl #name {
            /// Type descriptor shared by every value of this enum.
            pub fn enum_type() -> ::std::sync::Arc<::recast_api::types::EnumType> {
                static TYPE: ::std::sync::OnceLock<::std::sync::Arc<::recast_api::types::EnumType>> =
                    ::std::sync::OnceLock::new();
                TYPE.get_or_init(|| {
                    ::std::sync::Arc::new(::recast_api::types::EnumType::new(
                        #enum_name,
                        ::recast_api::types::TypeTag::#underlying,
                        vec![#(#members),*],
                    ))
                })
                .clone()
            }
        }

        impl ::recast_api::convertible::Convertible for #name {
            fn type_tag() -> ::recast_api::types::TypeTag {
                ::recast_api::types::TypeTag::Enum(Self::enum_type())
            }

            fn from_value(value: ::recast_api::value::Value<'_>) -> Option<Self> {
                match value {
                    ::recast_api::value::Value::Enum(e) if e.ty.name() == #enum_name => {
                        match e.value {
                            #(#from_arms)*
                            _ => None,
                        }
                    }
                    _ => None,
                }
            }

            fn into_value(self) -> ::recast_api::value::Value<'static> {
                let value = match self {
                    #(#into_arms)*
                };
                ::recast_api::value::Value::Enum(::recast_api::value::EnumValue::new(
                    Self::enum_type(),
                    value,
                ))
            }
        }
    })
}

/// `#[recast(name = "...")]`, if present.
fn recast_name(attrs: &[syn::Attribute]) -> Result<Option<String>, syn::Error> {
    let mut name = None;
    for attr in attrs {
        if !attr.path().is_ident("recast") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown recast attribute (expected `name`)"))
            }
        })?;
    }
    Ok(name)
}

/// `TypeTag` variant for the `#[repr(..)]` integer type.
fn underlying_tag(attrs: &[syn::Attribute]) -> Result<Ident, syn::Error> {
    let mut tag = "I32";
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let repr = meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default();
            tag = match repr.as_str() {
                "i8" => "I8",
                "u8" => "U8",
                "i16" => "I16",
                "u16" => "U16",
                "i32" => "I32",
                "u32" => "U32",
                "i64" => "I64",
                "u64" => "U64",
                _ => return Err(meta.error("unsupported repr for ConvertibleEnum")),
            };
            Ok(())
        })?;
    }
    Ok(Ident::new(tag, proc_macro2::Span::call_site()))
}
