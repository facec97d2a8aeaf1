//! Code generation for `#[derive(Record)]`.
//!
//! Each exposed field becomes one arm of the generated `Record::field`
//! match and one `&'static str` constant on the struct.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Field, Fields, Ident, Result,
};

use super::attrs::{parse_sift_attrs, FieldKind};

/// One exposed field: its constant and its match arm.
struct ExposedField {
    constant: TokenStream,
    arm: TokenStream,
}

pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            input.span(),
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new(
            input.span(),
            "Record can only be derived for structs with named fields",
        ));
    };

    let mut constants = Vec::new();
    let mut arms = Vec::new();
    for field in &named.named {
        if let Some(exposed) = expose(field)? {
            constants.push(exposed.constant);
            arms.push(exposed.arm);
        }
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::keysift::Record for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<::keysift::Value<'_>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::keysift::AsValue for #ident #ty_generics #where_clause {
            fn as_value(&self) -> ::keysift::Value<'_> {
                ::keysift::Value::Record(self)
            }
        }
    })
}

/// Builds the generated pieces for one field, or `None` if it stays hidden.
fn expose(field: &Field) -> Result<Option<ExposedField>> {
    let member = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

    let attr = parse_sift_attrs(&field.attrs)?;
    let kind = match attr.kind {
        Some(kind) if !attr.skip => kind,
        _ => return Ok(None),
    };

    let key = attr.rename.unwrap_or_else(|| member.unraw().to_string());
    if key.contains('.') {
        return Err(Error::new(
            attr.span,
            format!("field name '{key}' contains '.', which specifiers treat as a path separator"),
        ));
    }

    let value = if attr.optional {
        quote! { ::keysift::AsValue::as_value(&self.#member) }
    } else {
        scalar_value(kind, member)
    };

    let constant = constant_name(&key);
    let constant_ident: Ident = syn::parse_str(&constant).map_err(|_| {
        Error::new(
            attr.span,
            format!("field name '{key}' gives the constant '{constant}', which is not an identifier"),
        )
    })?;
    Ok(Some(ExposedField {
        constant: quote! {
            /// Field name constant for filter specifiers.
            pub const #constant_ident: &'static str = #key;
        },
        arm: quote! {
            #key => ::core::option::Option::Some(#value),
        },
    }))
}

fn scalar_value(kind: FieldKind, member: &Ident) -> TokenStream {
    match kind {
        FieldKind::Text => quote! { ::keysift::Value::Text(&self.#member) },
        FieldKind::Number => {
            quote! { ::keysift::Value::Number(::keysift::Number::from(self.#member)) }
        }
        FieldKind::Bool => quote! { ::keysift::Value::Bool(self.#member) },
        FieldKind::Nested => quote! { ::keysift::Value::Record(&self.#member) },
    }
}

/// Upper-cases a key into a constant name, splitting camelCase humps and
/// turning `-` and spaces into `_`.
fn constant_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' | ' ' | '_' => out.push('_'),
            c => out.extend(c.to_uppercase()),
        }
        let next_is_hump = chars.peek().is_some_and(|n| n.is_uppercase());
        if (c.is_lowercase() || c.is_ascii_digit()) && next_is_hump {
            out.push('_');
        }
    }

    out
}
