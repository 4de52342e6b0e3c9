/// The text of a field's `#[argread("..")]` annotation, split into its comma separated components.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Tag {
    pub text: String,
    pub components: Vec<String>,
}

impl Tag {
    /// Read the annotation from a field's attributes, if any.
    /// When repeated, the final annotation applies.
    pub(super) fn read(attributes: &[syn::Attribute]) -> Result<Option<Self>, syn::Error> {
        let mut tag = None;

        for attribute in attributes {
            if attribute.path().is_ident("argread") {
                let literal: syn::LitStr = attribute.parse_args()?;
                tag.replace(Tag::from(literal.value()));
            }
        }

        Ok(tag)
    }

    /// An empty (or all whitespace) annotation reads the same as no annotation.
    pub(super) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        let components = value
            .split(',')
            .map(|component| component.trim().to_string())
            .collect();
        Tag {
            text: value,
            components,
        }
    }
}
