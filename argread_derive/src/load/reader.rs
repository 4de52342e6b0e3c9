use quote::ToTokens;

use crate::model::{DeriveReader, DeriveSlot, DeriveValue};

impl TryFrom<syn::DeriveInput> for DeriveReader {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let fields: Vec<&syn::Field> = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields.named.iter().collect(),
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "must provide a structure with named fields",
                ))
            }
        };

        // Every misannotated field is reported, not only the first.
        let mut slots = Vec::default();
        let mut errors: Option<syn::Error> = None;

        for field in fields {
            match DeriveSlot::try_from(field) {
                Ok(slot) => slots.push(slot),
                Err(error) => match errors.as_mut() {
                    Some(errors) => errors.combine(error),
                    None => errors = Some(error),
                },
            }
        }

        if let Some(errors) = errors {
            return Err(errors);
        }

        let (impl_generics, type_generics, where_clause) = value.generics.split_for_impl();

        Ok(DeriveReader {
            struct_name: value.ident.clone(),
            impl_generics: DeriveValue {
                tokens: impl_generics.to_token_stream(),
            },
            type_generics: DeriveValue {
                tokens: type_generics.to_token_stream(),
            },
            where_clause: DeriveValue {
                tokens: where_clause.to_token_stream(),
            },
            slots,
        })
    }
}
