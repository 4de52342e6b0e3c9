use proc_macro2::TokenStream as TokenStream2;

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SlotType {
    Skip,
    Positional,
    Optional,
    Variadic,
    Flag {
        short: Option<char>,
        long: Option<String>,
        // Parsed against the field type; `None` means `true` on a boolean field.
        default: Option<String>,
    },
    Named {
        short: Option<char>,
        long: Option<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveSlot {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub tag: Option<String>,
    pub slot_type: SlotType,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveReader {
    pub struct_name: syn::Ident,
    pub impl_generics: DeriveValue,
    pub type_generics: DeriveValue,
    pub where_clause: DeriveValue,
    pub slots: Vec<DeriveSlot>,
}
