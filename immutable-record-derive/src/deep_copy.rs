//! Implementation of the `#[derive(DeepCopy)]` macro.
//!
//! The generated `deep_copy` rebuilds `Self` field by field, calling
//! `DeepCopy::deep_copy` on every field. Each type parameter gains a
//! `DeepCopy` bound.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Index, parse_macro_input, parse_quote};

/// Entry point called from `lib.rs`.
pub fn derive_deep_copy_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_deep_copy(&input))
}

/// Expands the derive for an already parsed input.
pub(crate) fn expand_deep_copy(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data_struct) => copy_fields(&data_struct.fields),
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                name,
                "DeepCopy can only be derived for structs; implement it by hand for enums.",
            )
            .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "DeepCopy cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let generics = with_deep_copy_bounds(input.generics.clone());
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::immutable_record::record::DeepCopy for #name #type_generics #where_clause {
            fn deep_copy(&self) -> Self {
                #body
            }
        }
    }
}

/// Builds the `Self { .. }` / `Self(..)` / `Self` expression.
fn copy_fields(fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let copies = named_fields.named.iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                Some(quote! {
                    #field_name: ::immutable_record::record::DeepCopy::deep_copy(&self.#field_name)
                })
            });
            quote! { Self { #(#copies),* } }
        }
        Fields::Unnamed(unnamed_fields) => {
            let copies = (0..unnamed_fields.unnamed.len()).map(|position| {
                let index = Index::from(position);
                quote! { ::immutable_record::record::DeepCopy::deep_copy(&self.#index) }
            });
            quote! { Self(#(#copies),*) }
        }
        Fields::Unit => quote! { Self },
    }
}

fn with_deep_copy_bounds(mut generics: Generics) -> Generics {
    for parameter in &mut generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter
                .bounds
                .push(parse_quote!(::immutable_record::record::DeepCopy));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn compact(input: &DeriveInput) -> String {
        expand_deep_copy(input).to_string().replace(' ', "")
    }

    #[rstest]
    fn test_named_struct_copies_every_field() {
        let input: DeriveInput = parse_quote! {
            struct Employee {
                id: i64,
                address: Address,
            }
        };
        let expanded = compact(&input);
        assert!(expanded.contains("id:::immutable_record::record::DeepCopy::deep_copy(&self.id)"));
        assert!(expanded.contains("address:::immutable_record::record::DeepCopy::deep_copy(&self.address)"));
    }

    #[rstest]
    fn test_tuple_struct_copies_by_position() {
        let input: DeriveInput = parse_quote! {
            struct Pair(String, String);
        };
        let expanded = compact(&input);
        assert!(expanded.contains("deep_copy(&self.0)"));
        assert!(expanded.contains("deep_copy(&self.1)"));
    }

    #[rstest]
    fn test_unit_struct_returns_self() {
        let input: DeriveInput = parse_quote! {
            struct Marker;
        };
        assert!(compact(&input).contains("fndeep_copy(&self)->Self{Self}"));
    }

    #[rstest]
    fn test_type_parameters_gain_bound() {
        let input: DeriveInput = parse_quote! {
            struct Holder<T> { value: T }
        };
        assert!(compact(&input).contains("impl<T:::immutable_record::record::DeepCopy>"));
    }

    #[rstest]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Status { Active, Retired }
        };
        assert!(compact(&input).contains("compile_error"));
    }

    #[rstest]
    fn test_rejects_union() {
        let input: DeriveInput = parse_quote! {
            union Bits { signed: i64, unsigned: u64 }
        };
        let expanded = compact(&input);
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("DeepCopycannotbederivedforunions."));
    }
}
