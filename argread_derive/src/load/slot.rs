use quote::ToTokens;

use crate::load::annotation_error;
use crate::load::tag::Tag;
use crate::model::{DeriveSlot, DeriveValue, SlotType};

const SCALARS: &[&str] = &[
    "String",
    "isize",
    "i8",
    "i16",
    "i32",
    "i64",
    "usize",
    "u8",
    "u16",
    "u32",
    "u64",
    "f32",
    "f64",
    "Complex32",
    "Complex64",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Boolean,
    Scalar,
    Sequence,
}

impl TryFrom<&syn::Field> for DeriveSlot {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(value, "must provide a structure with named fields")
        })?;
        let tag = Tag::read(&value.attrs)?;
        let slot_type = slot_type(&field_name, &value.ty, tag.as_ref())?;

        Ok(DeriveSlot {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            tag: tag.map(|tag| tag.text),
            slot_type,
        })
    }
}

fn slot_type(
    field_name: &syn::Ident,
    field_type: &syn::Type,
    tag: Option<&Tag>,
) -> Result<SlotType, syn::Error> {
    let (components, context): (&[String], Vec<(&str, &str)>) = match tag {
        Some(tag) if !tag.is_blank() => {
            (tag.components.as_slice(), vec![("tag", tag.text.as_str())])
        }
        _ => (Default::default(), Vec::default()),
    };

    if matches!(components, [only] if only == "skip") {
        return Ok(SlotType::Skip);
    }

    let kind = field_kind(field_type).ok_or_else(|| {
        annotation_error(field_name, "unexpected field type for arguments", &context)
    })?;

    match (kind, components) {
        (FieldKind::Sequence, []) => Ok(SlotType::Variadic),
        (FieldKind::Sequence, _) => Err(annotation_error(
            field_name,
            "invalid tag on a variadic argument value. May only have the skip tag.",
            &context,
        )),
        (_, []) => Ok(SlotType::Positional),
        (_, [only]) if only == "optional" => Ok(SlotType::Optional),
        (_, [first, ..]) if first == "flag" => {
            let default = match (kind, components) {
                (FieldKind::Boolean, [_, _, _]) => None,
                (_, [_, _, _, default]) => Some(default.clone()),
                _ => {
                    return Err(annotation_error(
                        field_name,
                        "invalid number of components in a flag tag",
                        &context,
                    ))
                }
            };
            let (short, long) = names(
                field_name,
                &context,
                "flag",
                &components[1],
                &components[2],
            )?;
            Ok(SlotType::Flag {
                short,
                long,
                default,
            })
        }
        (_, [short, long]) => {
            let (short, long) = names(field_name, &context, "named input", short, long)?;
            Ok(SlotType::Named { short, long })
        }
        _ => Err(annotation_error(
            field_name,
            "invalid tag for arguments",
            &context,
        )),
    }
}

fn field_kind(field_type: &syn::Type) -> Option<FieldKind> {
    let segment = last_segment(field_type)?;
    let name = segment.ident.to_string();

    match (&segment.arguments, name.as_str()) {
        (syn::PathArguments::None, "bool") => Some(FieldKind::Boolean),
        (syn::PathArguments::None, name) if SCALARS.contains(&name) => Some(FieldKind::Scalar),
        (syn::PathArguments::AngleBracketed(arguments), "Complex") => {
            let part = last_segment(single_type(arguments)?)?;

            if part.ident == "f32" || part.ident == "f64" {
                Some(FieldKind::Scalar)
            } else {
                None
            }
        }
        (syn::PathArguments::AngleBracketed(arguments), "Vec") => {
            match field_kind(single_type(arguments)?)? {
                FieldKind::Sequence => None,
                _ => Some(FieldKind::Sequence),
            }
        }
        _ => None,
    }
}

fn last_segment(field_type: &syn::Type) -> Option<&syn::PathSegment> {
    match field_type {
        syn::Type::Path(syn::TypePath { qself: None, path }) => path.segments.last(),
        _ => None,
    }
}

fn single_type(arguments: &syn::AngleBracketedGenericArguments) -> Option<&syn::Type> {
    match arguments.args.first() {
        Some(syn::GenericArgument::Type(inner)) if arguments.args.len() == 1 => Some(inner),
        _ => None,
    }
}

fn names(
    field_name: &syn::Ident,
    context: &[(&str, &str)],
    switch: &str,
    short: &str,
    long: &str,
) -> Result<(Option<char>, Option<String>), syn::Error> {
    if short.is_empty() && long.is_empty() {
        return Err(annotation_error(
            field_name,
            format!("may not add a {switch} without a least one name"),
            context,
        ));
    }

    let mut characters = short.chars();
    let short = match (characters.next(), characters.next()) {
        (None, _) => None,
        (Some(name), None) if name.is_ascii_alphabetic() => Some(name),
        _ => return Err(invalid_name(field_name, context, switch, "short", short)),
    };

    let long = if long.is_empty() {
        None
    } else if is_long_name(long) {
        Some(long.to_string())
    } else {
        return Err(invalid_name(field_name, context, switch, "long", long));
    };

    Ok((short, long))
}

fn invalid_name(
    field_name: &syn::Ident,
    context: &[(&str, &str)],
    switch: &str,
    kind: &str,
    name: &str,
) -> syn::Error {
    let mut context = context.to_vec();
    context.push(("name", name));
    annotation_error(
        field_name,
        format!("may not create a {switch} with an invalid {kind} name"),
        &context,
    )
}

fn is_long_name(name: &str) -> bool {
    let mut characters = name.chars();

    match characters.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            characters.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quote::quote;
    use rstest::rstest;

    fn field(tokens: proc_macro2::TokenStream) -> syn::Field {
        let fields: syn::FieldsNamed = syn::parse_quote! { { #tokens } };
        fields.named[0].clone()
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[rstest]
    #[case(quote! { String }, Some(FieldKind::Scalar))]
    #[case(quote! { bool }, Some(FieldKind::Boolean))]
    #[case(quote! { isize }, Some(FieldKind::Scalar))]
    #[case(quote! { i8 }, Some(FieldKind::Scalar))]
    #[case(quote! { u64 }, Some(FieldKind::Scalar))]
    #[case(quote! { f32 }, Some(FieldKind::Scalar))]
    #[case(quote! { std::string::String }, Some(FieldKind::Scalar))]
    #[case(quote! { Complex64 }, Some(FieldKind::Scalar))]
    #[case(quote! { num_complex::Complex<f32> }, Some(FieldKind::Scalar))]
    #[case(quote! { Vec<u8> }, Some(FieldKind::Sequence))]
    #[case(quote! { Vec<bool> }, Some(FieldKind::Sequence))]
    #[case(quote! { Vec<Complex<f64>> }, Some(FieldKind::Sequence))]
    #[case(quote! { Vec<Vec<u8>> }, None)]
    #[case(quote! { Complex<i32> }, None)]
    #[case(quote! { Option<u8> }, None)]
    #[case(quote! { char }, None)]
    #[case(quote! { &'static str }, None)]
    #[case(quote! { (u8, u8) }, None)]
    #[case(quote! { [u8; 2] }, None)]
    fn kind(#[case] tokens: proc_macro2::TokenStream, #[case] expected: Option<FieldKind>) {
        let field_type: syn::Type = syn::parse2(tokens).unwrap();
        assert_eq!(field_kind(&field_type), expected);
    }

    #[rstest]
    #[case(quote! { x: u8 }, SlotType::Positional)]
    #[case(quote! { #[argread("")] x: u8 }, SlotType::Positional)]
    #[case(quote! { #[argread("optional")] x: u8 }, SlotType::Optional)]
    #[case(quote! { #[argread("skip")] x: u8 }, SlotType::Skip)]
    #[case(quote! { #[argread("skip")] x: Vec<u8> }, SlotType::Skip)]
    #[case(quote! { #[argread("skip")] x: Option<char> }, SlotType::Skip)]
    #[case(quote! { x: Vec<String> }, SlotType::Variadic)]
    #[case(
        quote! { #[argread("a,apple")] x: String },
        SlotType::Named { short: Some('a'), long: Some("apple".to_string()) }
    )]
    #[case(
        quote! { #[argread("a,")] x: String },
        SlotType::Named { short: Some('a'), long: None }
    )]
    #[case(
        quote! { #[argread(" , apple ")] x: String },
        SlotType::Named { short: None, long: Some("apple".to_string()) }
    )]
    #[case(
        quote! { #[argread("flag,a,apple")] x: bool },
        SlotType::Flag { short: Some('a'), long: Some("apple".to_string()), default: None }
    )]
    #[case(
        quote! { #[argread("flag,a,,false")] x: bool },
        SlotType::Flag { short: Some('a'), long: None, default: Some("false".to_string()) }
    )]
    #[case(
        quote! { #[argread("flag,,banana,42")] x: i64 },
        SlotType::Flag { short: None, long: Some("banana".to_string()), default: Some("42".to_string()) }
    )]
    fn slot(#[case] tokens: proc_macro2::TokenStream, #[case] expected: SlotType) {
        let slot = DeriveSlot::try_from(&field(tokens)).unwrap();
        assert_eq!(slot.field_name, ident("x"));
        assert_eq!(slot.slot_type, expected);
    }

    #[test]
    fn slot_details() {
        let slot = DeriveSlot::try_from(&field(quote! {
            #[argread("flag,v,verbose,3")]
            verbosity: u8
        }))
        .unwrap();
        assert_eq!(
            slot,
            DeriveSlot {
                field_name: ident("verbosity"),
                field_type: DeriveValue {
                    tokens: quote! { u8 },
                },
                tag: Some("flag,v,verbose,3".to_string()),
                slot_type: SlotType::Flag {
                    short: Some('v'),
                    long: Some("verbose".to_string()),
                    default: Some("3".to_string()),
                },
            }
        );
    }

    #[rstest]
    #[case(
        quote! { x: char },
        "unexpected field type for arguments {field: x}"
    )]
    #[case(
        quote! { #[argread("optional")] x: Option<u8> },
        "unexpected field type for arguments {field: x, tag: optional}"
    )]
    #[case(
        quote! { #[argread("optional")] x: Vec<u8> },
        "invalid tag on a variadic argument value. May only have the skip tag. {field: x, tag: optional}"
    )]
    #[case(
        quote! { #[argread("flag,a,apple")] x: u8 },
        "invalid number of components in a flag tag {field: x, tag: flag,a,apple}"
    )]
    #[case(
        quote! { #[argread("flag,a")] x: bool },
        "invalid number of components in a flag tag {field: x, tag: flag,a}"
    )]
    #[case(
        quote! { #[argread("flag,a,apple,1,2")] x: bool },
        "invalid number of components in a flag tag {field: x, tag: flag,a,apple,1,2}"
    )]
    #[case(
        quote! { #[argread("flag,,,true")] x: bool },
        "may not add a flag without a least one name {field: x, tag: flag,,,true}"
    )]
    #[case(
        quote! { #[argread(",")] x: u8 },
        "may not add a named input without a least one name {field: x, tag: ,}"
    )]
    #[case(
        quote! { #[argread("ab,apple")] x: u8 },
        "may not create a named input with an invalid short name {field: x, name: ab, tag: ab,apple}"
    )]
    #[case(
        quote! { #[argread("flag,1,apple")] x: bool },
        "may not create a flag with an invalid short name {field: x, name: 1, tag: flag,1,apple}"
    )]
    #[case(
        quote! { #[argread("a,dry-run")] x: u8 },
        "may not create a named input with an invalid long name {field: x, name: dry-run, tag: a,dry-run}"
    )]
    #[case(
        quote! { #[argread("optional,a,b")] x: u8 },
        "invalid tag for arguments {field: x, tag: optional,a,b}"
    )]
    #[case(
        quote! { #[argread("positional")] x: u8 },
        "invalid tag for arguments {field: x, tag: positional}"
    )]
    fn slot_invalid(#[case] tokens: proc_macro2::TokenStream, #[case] expected: &str) {
        let error = DeriveSlot::try_from(&field(tokens)).unwrap_err();
        assert_eq!(error.to_string(), expected);
    }
}
