use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveSlot, DeriveValue, SlotType};

impl From<DeriveSlot> for TokenStream2 {
    fn from(value: DeriveSlot) -> Self {
        let DeriveSlot {
            field_name,
            field_type: DeriveValue { tokens: field_type },
            tag,
            slot_type,
        } = value;

        match slot_type {
            SlotType::Skip => TokenStream2::default(),
            SlotType::Positional => quote! {
                let reader = reader.pos(&mut self.#field_name);
            },
            SlotType::Optional => quote! {
                let reader = reader.optional(&mut self.#field_name);
            },
            SlotType::Variadic => quote! {
                let reader = reader.var(&mut self.#field_name);
            },
            SlotType::Named { short, long } => {
                let short = render_short(short);
                let long = render_long(long);
                quote! {
                    let reader = reader.named(&mut self.#field_name, #short, #long);
                }
            }
            SlotType::Flag {
                short,
                long,
                default,
            } => {
                let short = render_short(short);
                let long = render_long(long);
                let value = match default {
                    None => quote! { true },
                    Some(default) => {
                        let field = field_name.to_string();
                        let tag = tag.unwrap_or_default();
                        quote! {
                            ::argread::flag_default::<#field_type>(#field, #tag, #default)
                        }
                    }
                };
                quote! {
                    let reader = reader.flag(&mut self.#field_name, #value, #short, #long);
                }
            }
        }
    }
}

fn render_short(short: Option<char>) -> TokenStream2 {
    match short {
        Some(name) => quote! { Some(#name) },
        None => quote! { None },
    }
}

fn render_long(long: Option<String>) -> TokenStream2 {
    match long {
        Some(name) => quote! { Some(#name) },
        None => quote! { None },
    }
}
