//! The derive macro for `argread`; see the `argread::derive` module for documentation.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveReader;

/// Implement `argread::ReadArgs` by registering each field according to its `#[argread("..")]` annotation.
#[proc_macro_derive(ReadArgs, attributes(argread))]
pub fn read_args(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveReader::try_from(derive_input) {
        Ok(reader) => TokenStream2::from(reader).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
