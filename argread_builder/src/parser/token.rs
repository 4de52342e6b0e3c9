/// The lexical shape of an input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Token<'t> {
    /// `-XYZ`: one or more short names.
    ShortGroup(&'t str),
    /// `--name`.
    Long(&'t str),
    /// Anything else, including `--`, `-`, and negative numbers.
    Plain,
}

impl<'t> Token<'t> {
    pub(super) fn classify(token: &'t str) -> Self {
        if let Some(name) = token.strip_prefix("--") {
            if is_long_name(name) {
                return Token::Long(name);
            }
        } else if let Some(names) = token.strip_prefix('-') {
            if !names.is_empty() && names.chars().all(is_short_name) {
                return Token::ShortGroup(names);
            }
        }

        Token::Plain
    }
}

/// A short name is a single ASCII letter.
pub(crate) fn is_short_name(name: char) -> bool {
    name.is_ascii_alphabetic()
}

/// A long name is an ASCII letter followed by letters, digits, or underscores.
pub(crate) fn is_long_name(name: &str) -> bool {
    let mut characters = name.chars();

    match characters.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            characters.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
