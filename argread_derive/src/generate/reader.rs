use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveReader, DeriveValue};

impl From<DeriveReader> for TokenStream2 {
    fn from(value: DeriveReader) -> Self {
        let DeriveReader {
            struct_name,
            impl_generics: DeriveValue {
                tokens: impl_generics,
            },
            type_generics: DeriveValue {
                tokens: type_generics,
            },
            where_clause: DeriveValue {
                tokens: where_clause,
            },
            slots,
        } = value;
        let slots: Vec<TokenStream2> = slots.into_iter().map(TokenStream2::from).collect();

        quote! {
            impl #impl_generics ::argread::ReadArgs for #struct_name #type_generics #where_clause {
                fn register<'argread>(
                    &'argread mut self,
                    reader: ::argread::Reader<'argread>,
                ) -> ::argread::Reader<'argread> {
                    #( #slots )*
                    reader
                }
            }
        }
    }
}
