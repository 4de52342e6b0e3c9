use std::collections::HashMap;

use crate::api::structure::ReadArgs;
use crate::api::value::Value;
use crate::error::Error;
use crate::parser::{is_long_name, is_short_name};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A zero-operand handler, invoked each time its flag is named on the command line.
pub type FlagHandler<'a> = Box<dyn FnMut() -> Result<(), Error> + 'a>;

/// A one-operand handler, invoked with the token bound to its slot.
pub type ArgHandler<'a> = Box<dyn FnMut(&str) -> Result<(), Error> + 'a>;

/// A many-operand handler, invoked with every trailing token.
pub type VarHandler<'a> = Box<dyn FnMut(&[String]) -> Result<(), Error> + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    Flag,
    Named,
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Switch::Flag => write!(f, "flag"),
            Switch::Named => write!(f, "named input"),
        }
    }
}

/// Abort registration with a programmer error.
pub(crate) fn misconfigured(error: Error) -> ! {
    panic!("{error}")
}

/// The command line argument reader.
///
/// Slots are registered via the fluent methods, and then filled from the input tokens via [`Reader::process`].
/// There are five kinds of slots:
/// * *flag*: a zero-operand switch named by `-s` and/or `--long`.
/// * *named value*: a one-operand switch named by `-s` and/or `--long`; the operand is the following token.
/// * *positional*: a required slot, bound in declaration order.
/// * *optional*: a non-required slot, bound in declaration order after the positionals.
/// * *variadic*: a single slot receiving all the tokens after the positionals.
///
/// Registration panics when the configuration is invalid (ex: a positional after an optional, or a re-used name).
///
/// ### Example
/// ```
/// # use argread_builder as argread;
/// use argread::Reader;
///
/// let mut verbose = false;
/// let mut input = String::default();
/// let mut count: u32 = 0;
/// let mut rest: Vec<String> = Vec::default();
///
/// Reader::new()
///     .flag(&mut verbose, true, Some('v'), Some("verbose"))
///     .named(&mut input, Some('i'), Some("input"))
///     .pos(&mut count)
///     .var(&mut rest)
///     .process(&["-v", "3", "--input", "in.txt", "a", "b"])
///     .unwrap();
///
/// assert!(verbose);
/// assert_eq!(input, "in.txt");
/// assert_eq!(count, 3);
/// assert_eq!(rest, vec!["a", "b"]);
/// ```
pub struct Reader<'a> {
    pub(crate) flags: Vec<FlagHandler<'a>>,
    pub(crate) short_flags: HashMap<char, usize>,
    pub(crate) long_flags: HashMap<String, usize>,
    pub(crate) named: Vec<ArgHandler<'a>>,
    pub(crate) short_named: HashMap<char, usize>,
    pub(crate) long_named: HashMap<String, usize>,
    pub(crate) positional: Vec<ArgHandler<'a>>,
    pub(crate) optional: Vec<ArgHandler<'a>>,
    pub(crate) variadic: Option<VarHandler<'a>>,
}

impl<'a> Default for Reader<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for Reader<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("flags", &names(&self.short_flags, &self.long_flags))
            .field("named", &names(&self.short_named, &self.long_named))
            .field("positional", &self.positional.len())
            .field("optional", &self.optional.len())
            .field("variadic", &self.variadic.is_some())
            .finish()
    }
}

fn names(shorts: &HashMap<char, usize>, longs: &HashMap<String, usize>) -> Vec<String> {
    let mut out: Vec<String> = shorts
        .keys()
        .map(|short| format!("-{short}"))
        .chain(longs.keys().map(|long| format!("--{long}")))
        .collect();
    out.sort();
    out
}

impl<'a> Reader<'a> {
    /// Create a reader with no slots.
    pub fn new() -> Self {
        Self {
            flags: Vec::default(),
            short_flags: HashMap::default(),
            long_flags: HashMap::default(),
            named: Vec::default(),
            short_named: HashMap::default(),
            long_named: HashMap::default(),
            positional: Vec::default(),
            optional: Vec::default(),
            variadic: None,
        }
    }

    /// Register a flag, calling `handler` each time it is named.
    ///
    /// At least one of `short` or `long` must be provided.
    /// A short name is a single ASCII letter; a long name is an ASCII letter followed by letters, digits, or underscores.
    /// Names are shared between flags and named values, so each may only be used once per reader.
    ///
    /// ### Example
    /// ```
    /// # use argread_builder as argread;
    /// use argread::Reader;
    ///
    /// let mut count = 0;
    /// Reader::new()
    ///     .flag_func(|| { count += 1; Ok(()) }, Some('v'), None)
    ///     .process(&["-vvv"])
    ///     .unwrap();
    /// assert_eq!(count, 3);
    /// ```
    pub fn flag_func(
        mut self,
        handler: impl FnMut() -> Result<(), Error> + 'a,
        short: Option<char>,
        long: Option<&str>,
    ) -> Self {
        self.claim(Switch::Flag, short, long);
        let slot = self.flags.len();
        self.flags.push(Box::new(handler));

        if let Some(short) = short {
            self.short_flags.insert(short, slot);
        }

        if let Some(long) = long {
            self.long_flags.insert(long.to_string(), slot);
        }

        self
    }

    /// Register a named value, calling `handler` with the token following its name.
    ///
    /// Naming rules are the same as for [`Reader::flag_func`].
    /// The operand is taken unconditionally: `--input --verbose` gives `--verbose` to `input`.
    pub fn named_func(
        mut self,
        handler: impl FnMut(&str) -> Result<(), Error> + 'a,
        short: Option<char>,
        long: Option<&str>,
    ) -> Self {
        self.claim(Switch::Named, short, long);
        let slot = self.named.len();
        self.named.push(Box::new(handler));

        if let Some(short) = short {
            self.short_named.insert(short, slot);
        }

        if let Some(long) = long {
            self.long_named.insert(long.to_string(), slot);
        }

        self
    }

    /// Append a positional slot.
    ///
    /// Positionals must all be added before any optional or variadic slot.
    pub fn pos_func(mut self, handler: impl FnMut(&str) -> Result<(), Error> + 'a) -> Self {
        if !self.optional.is_empty() {
            misconfigured(Error::new(
                "may not add a new positional argument after an optional argument has been added",
            ));
        }

        if self.variadic.is_some() {
            misconfigured(Error::new(
                "may not add a new positional argument after a variant argument has been added",
            ));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering positional #{}.", self.positional.len());
        }

        self.positional.push(Box::new(handler));
        self
    }

    /// Append an optional slot.
    ///
    /// Optionals may not be combined with a variadic.
    pub fn optional_func(mut self, handler: impl FnMut(&str) -> Result<(), Error> + 'a) -> Self {
        if self.variadic.is_some() {
            misconfigured(Error::new(
                "may not add an optional argument after a variant argument has been added",
            ));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering optional #{}.", self.optional.len());
        }

        self.optional.push(Box::new(handler));
        self
    }

    /// Set the variadic slot, receiving all tokens remaining after the positionals.
    ///
    /// There may only be one variadic, and it may not be combined with optionals.
    pub fn var_func(mut self, handler: impl FnMut(&[String]) -> Result<(), Error> + 'a) -> Self {
        if self.variadic.is_some() {
            misconfigured(Error::new(
                "may not add a new variant argument after a variant argument has already been added",
            ));
        }

        if !self.optional.is_empty() {
            misconfigured(Error::new(
                "may not add a variant argument after an optional argument has been added",
            ));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering variadic.");
        }

        self.variadic.replace(Box::new(handler));
        self
    }

    /// Register a flag which assigns `value` to `target` each time it is named.
    ///
    /// ### Example
    /// ```
    /// # use argread_builder as argread;
    /// use argread::Reader;
    ///
    /// let mut level: u8 = 0;
    /// Reader::new()
    ///     .flag(&mut level, 3, None, Some("loud"))
    ///     .process(&["--loud"])
    ///     .unwrap();
    /// assert_eq!(level, 3);
    /// ```
    pub fn flag<T: Clone + 'a>(
        self,
        target: &'a mut T,
        value: T,
        short: Option<char>,
        long: Option<&str>,
    ) -> Self {
        self.flag_func(
            move || {
                *target = value.clone();
                Ok(())
            },
            short,
            long,
        )
    }

    /// Register a named value which parses its operand into `target`.
    pub fn named<T: Value + 'a>(
        self,
        target: &'a mut T,
        short: Option<char>,
        long: Option<&str>,
    ) -> Self {
        self.named_func(
            move |token: &str| {
                *target = T::parse_value(token)?;
                Ok(())
            },
            short,
            long,
        )
    }

    /// Append a positional slot which parses its token into `target`.
    pub fn pos<T: Value + 'a>(self, target: &'a mut T) -> Self {
        self.pos_func(move |token: &str| {
            *target = T::parse_value(token)?;
            Ok(())
        })
    }

    /// Append an optional slot which parses its token, when present, into `target`.
    /// When absent, `target` is left untouched.
    pub fn optional<T: Value + 'a>(self, target: &'a mut T) -> Self {
        self.optional_func(move |token: &str| {
            *target = T::parse_value(token)?;
            Ok(())
        })
    }

    /// Set the variadic slot, parsing every trailing token into `target`.
    ///
    /// `target` is only replaced when all of the tokens parse.
    pub fn var<T: Value + 'a>(self, target: &'a mut Vec<T>) -> Self {
        self.var_func(move |tokens: &[String]| {
            *target = tokens
                .iter()
                .map(|token| T::parse_value(token))
                .collect::<Result<Vec<T>, Error>>()?;
            Ok(())
        })
    }

    /// Register the slots described by an annotated structure.
    /// Typically the structure is instrumented with `#[derive(ReadArgs)]`.
    ///
    /// The structure's registrations are subject to the same rules as direct registrations.
    /// In particular, binding a structure with names twice on the same reader panics.
    pub fn structure(self, target: &'a mut impl ReadArgs) -> Self {
        target.register(self)
    }

    fn claim(&self, switch: Switch, short: Option<char>, long: Option<&str>) {
        if short.is_none() && long.is_none() {
            misconfigured(Error::new(format!(
                "may not add a {switch} without a least one name"
            )));
        }

        if let Some(short) = short {
            if !is_short_name(short) {
                misconfigured(
                    Error::new(format!("may not create a {switch} with an invalid short name"))
                        .with("name", short),
                );
            }

            if self.short_flags.contains_key(&short) || self.short_named.contains_key(&short) {
                misconfigured(
                    Error::new(format!("may not create a {switch} with a used short name"))
                        .with("name", short),
                );
            }
        }

        if let Some(long) = long {
            if !is_long_name(long) {
                misconfigured(
                    Error::new(format!("may not create a {switch} with an invalid long name"))
                        .with("name", long),
                );
            }

            if self.long_flags.contains_key(long) || self.long_named.contains_key(long) {
                misconfigured(
                    Error::new(format!("may not create a {switch} with a used long name"))
                        .with("name", long),
                );
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {switch} (short={short:?}, long={long:?}).");
        }
    }
}
