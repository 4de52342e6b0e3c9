use std::collections::BTreeMap;
use std::fmt::Display;

mod reader;
mod slot;
mod tag;

/// A compile error laid out as the reader's runtime errors are: `message {key: value, ..}`.
/// The field is always part of the context.
pub(self) fn annotation_error(
    field_name: &syn::Ident,
    message: impl Display,
    context: &[(&str, &str)],
) -> syn::Error {
    let mut pairs = BTreeMap::from([("field", field_name.to_string())]);

    for (key, value) in context {
        pairs.insert(*key, value.to_string());
    }

    let rendered: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    syn::Error::new(
        field_name.span(),
        format!("{message} {{{}}}", rendered.join(", ")),
    )
}
