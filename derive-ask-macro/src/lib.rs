//! Procedural macro for deriving `Ask` implementations.
//!
//! This crate provides the `#[derive(Ask)]` macro which generates the field
//! handles the prompt engine walks. Fields opt in with the `#[ask(...)]`
//! attribute; everything else is skipped.
//!
//! # Field attribute forms
//!
//! - `#[ask]` - prompt with the field name as label
//! - `#[ask("label")]` / `#[ask(label = "...")]` - explicit prompt label
//! - `#[ask(recursive)]` - the field's value is a nested record, prompted as
//!   its own sub-session
//! - `#[ask(converter = Path)]` - use a specific converter instead of the
//!   registry lookup (the type must implement `Convert` and `Default`)
//!
//! `Option<T>` fields have no default while `None`; plain fields offer their
//! current value as the default. Recursive `Option<T>` fields are initialized
//! with `T::default()` before descending.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::ParseStream;
use syn::{
    Attribute, Data, DeriveInput, Fields, LitStr, Meta, Path, Token, Type, parse_macro_input,
};

/// Derive the `Ask` trait for a struct with named fields.
#[proc_macro_derive(Ask, attributes(ask))]
pub fn derive_ask(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    implement_ask(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn implement_ask(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Ask can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "Ask can only be derived for structs with named fields",
        ));
    };

    let mut entries = Vec::new();
    for field in &fields.named {
        let Some(attr) = AskAttr::extract(&field.attrs)? else {
            // not annotated - irrelevant for asking
            continue;
        };
        entries.push(generate_field_entry(field, &attr)?);
    }

    Ok(quote! {
        impl derive_ask::Ask for #name {
            fn record_fields(&mut self) -> Vec<derive_ask::Field<'_>> {
                vec![#(#entries),*]
            }

            fn tag(&self) -> derive_ask::TypeTag {
                derive_ask::TypeTag::of::<Self>()
            }
        }
    })
}

// ============================================================================
// Attribute Extraction
// ============================================================================

/// Parsed contents of one `#[ask(...)]` attribute.
#[derive(Default)]
struct AskAttr {
    label: Option<String>,
    recursive: bool,
    converter: Option<Path>,
}

impl AskAttr {
    /// Find the `#[ask]` attribute on a field, if any.
    fn extract(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        for attr in attrs {
            if attr.path().is_ident("ask") {
                return Self::parse_attr(attr).map(Some);
            }
        }
        Ok(None)
    }

    fn parse_attr(attr: &Attribute) -> syn::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(list) => list.parse_args_with(Self::parse_args),
            Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected #[ask] or #[ask(...)]",
            )),
        }
    }

    /// Grammar: an optional leading string literal (the label), then any of
    /// `label = "..."`, `converter = Path`, `recursive`, comma-separated.
    fn parse_args(input: ParseStream) -> syn::Result<Self> {
        let mut parsed = Self::default();

        if input.peek(LitStr) {
            parsed.label = Some(input.parse::<LitStr>()?.value());
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            if ident == "recursive" {
                parsed.recursive = true;
            } else if ident == "label" {
                input.parse::<Token![=]>()?;
                parsed.label = Some(input.parse::<LitStr>()?.value());
            } else if ident == "converter" {
                input.parse::<Token![=]>()?;
                parsed.converter = Some(input.parse::<Path>()?);
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    "unknown `ask` argument, expected `label`, `converter`, or `recursive`",
                ));
            }
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(parsed)
    }
}

// ============================================================================
// Field Entry Generation
// ============================================================================

fn generate_field_entry(field: &syn::Field, attr: &AskAttr) -> syn::Result<TokenStream2> {
    let name = field.ident.as_ref().expect("named field");
    let name_str = name.to_string();
    let label = attr.label.clone().unwrap_or_default();

    let converter = match &attr.converter {
        Some(path) => quote! {
            Some(|| Box::new(<#path as Default>::default()) as Box<dyn derive_ask::Convert>)
        },
        None => quote! { None },
    };

    let access = if attr.recursive {
        generate_record_access(name, &field.ty)
    } else {
        generate_value_access(name, &field.ty)
    };

    Ok(quote! {
        derive_ask::Field {
            name: #name_str,
            meta: derive_ask::AskMeta {
                label: #label,
                converter: #converter,
            },
            access: #access,
        }
    })
}

/// Access for a `#[ask(recursive)]` field. `Option` values are initialized
/// with the record type's `Default` before descending; `Box` values are
/// dereferenced so the handle points at the record itself.
fn generate_record_access(name: &syn::Ident, ty: &Type) -> TokenStream2 {
    if let Some(inner) = extract_generic_inner_type(ty, "Option") {
        if extract_generic_inner_type(&inner, "Box").is_some() {
            quote! {
                derive_ask::FieldAccess::Record(
                    &mut **self.#name.get_or_insert_with(<#inner as Default>::default),
                )
            }
        } else {
            quote! {
                derive_ask::FieldAccess::Record(
                    self.#name.get_or_insert_with(<#inner as Default>::default),
                )
            }
        }
    } else if extract_generic_inner_type(ty, "Box").is_some() {
        quote! { derive_ask::FieldAccess::Record(&mut *self.#name) }
    } else {
        quote! { derive_ask::FieldAccess::Record(&mut self.#name) }
    }
}

/// Access for a convertible scalar field. `Option<T>` maps to the mandatory
/// handle (`None` = no default), everything else offers its current value.
fn generate_value_access(name: &syn::Ident, ty: &Type) -> TokenStream2 {
    if extract_generic_inner_type(ty, "Option").is_some() {
        quote! {
            derive_ask::FieldAccess::Value(Box::new(derive_ask::OptionalScalar(&mut self.#name)))
        }
    } else {
        quote! {
            derive_ask::FieldAccess::Value(Box::new(derive_ask::Scalar(&mut self.#name)))
        }
    }
}

/// Extract `T` from `Wrapper<T>` for single-argument wrappers like `Option`
/// and `Box`, matching on the last path segment.
fn extract_generic_inner_type(ty: &Type, wrapper: &str) -> Option<Type> {
    if let Type::Path(path) = ty
        && let Some(segment) = path.path.segments.last()
        && segment.ident == wrapper
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner.clone());
    }
    None
}
