use crate::api::reader::{misconfigured, Reader};
use crate::api::value::Value;
use crate::error::Error;

/// Behaviour to register a structure's fields as slots on a [`Reader`].
///
/// Typically implemented via `#[derive(ReadArgs)]`, and used with [`Reader::structure`].
///
/// ### Example
/// ```
/// # use argread_builder as argread;
/// use argread::{ReadArgs, Reader};
///
/// #[derive(Default)]
/// struct Parameters {
///     verbose: bool,
///     name: String,
/// }
///
/// impl ReadArgs for Parameters {
///     fn register<'a>(&'a mut self, reader: Reader<'a>) -> Reader<'a> {
///         reader
///             .flag(&mut self.verbose, true, Some('v'), Some("verbose"))
///             .pos(&mut self.name)
///     }
/// }
///
/// let mut parameters = Parameters::default();
/// Reader::new()
///     .structure(&mut parameters)
///     .process(&["--verbose", "abc"])
///     .unwrap();
/// assert!(parameters.verbose);
/// assert_eq!(parameters.name, "abc");
/// ```
pub trait ReadArgs {
    /// Register the slots for this structure's fields onto `reader`.
    fn register<'a>(&'a mut self, reader: Reader<'a>) -> Reader<'a>;

    /// Read the Cli [`std::env::args`] into a default instance of this structure.
    ///
    /// If reading fails, the error is printed and the program exits with error code `1` (via `std::process::exit`).
    fn read_args() -> Self
    where
        Self: Default + Sized,
    {
        let mut target = Self::default();

        {
            let mut reader = Reader::new().structure(&mut target);

            if let Err(error) = reader.process_args() {
                eprintln!("Parse error: {error}");
                std::process::exit(1);
            }
        }

        target
    }
}

/// Parse the default value of a flag declared on a structure field.
///
/// Panics (a programmer error) when the default does not parse for the field type.
#[doc(hidden)]
pub fn flag_default<T: Value>(field: &str, tag: &str, default: &str) -> T {
    T::parse_value(default).unwrap_or_else(|cause| {
        misconfigured(
            Error::new("unable to parse the flag default value")
                .with("field", field)
                .with("tag", tag)
                .caused_by(cause),
        )
    })
}
