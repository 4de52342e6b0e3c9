use std::collections::BTreeMap;
use std::num::{ParseFloatError, ParseIntError};

use num_complex::ParseComplexError;
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A message with a key/value context bag and an optional cause.
///
/// Displays as `<message> {<key>: <value>, ..}: <cause>`, with the context keys in sorted order.
/// The context section is omitted when empty, as is the cause section when there is no cause.
///
/// ### Example
/// ```
/// # use argread_builder as argread;
/// use argread::Error;
///
/// let error = Error::new("error setting flag")
///     .with("name", 'v')
///     .with("argument", "-v")
///     .caused_by(Error::new("disk full"));
/// assert_eq!(error.to_string(), "error setting flag {argument: -v, name: v}: disk full");
/// ```
#[derive(Debug, Error)]
#[error("{message}{}{}", render_context(.context), render_cause(.source))]
pub struct Error {
    message: String,
    context: BTreeMap<String, String>,
    #[source]
    source: Option<Cause>,
}

impl Error {
    /// Create an error with a message, an empty context, and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: BTreeMap::default(),
            source: None,
        }
    }

    /// Attach a context pair.
    /// If the key is repeated, only the final value will apply.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attach the cause of this error.
    pub fn caused_by(mut self, cause: impl Into<Cause>) -> Self {
        self.source.replace(cause.into());
        self
    }

    /// The primary message, without context or cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Look up a context value by its key.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

fn render_context(context: &BTreeMap<String, String>) -> String {
    if context.is_empty() {
        return String::default();
    }

    let pairs: Vec<String> = context
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    format!(" {{{}}}", pairs.join(", "))
}

fn render_cause(source: &Option<Cause>) -> String {
    match source {
        Some(cause) => format!(": {cause}"),
        None => String::default(),
    }
}

/// The underlying reason a token could not be converted by the value parser.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Integer syntax or range failure.
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Floating point syntax failure.
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Complex number syntax failure.
    #[error(transparent)]
    Complex(#[from] ParseComplexError<ParseFloatError>),

    /// The token is not one of the accepted boolean spellings.
    #[error("invalid syntax for a boolean")]
    Bool,
}

/// Render a run of tokens for an `arguments` context value.
pub(crate) fn join_tokens(tokens: &[impl AsRef<str>]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
