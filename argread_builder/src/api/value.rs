use std::str::FromStr;

use num_complex::{Complex32, Complex64};

use crate::error::{Error, ValueError};

/// Behaviour to convert a single input token into a typed value.
///
/// All typed registrations ([`Reader::named`](crate::Reader::named), [`Reader::pos`](crate::Reader::pos), etc) convert their tokens via this trait.
/// `argread` implements it for the scalar types listed below; implement it for your own types to read them from the command line.
///
/// ```console
/// Rust type  | TYPE_NAME
/// ------------------------
/// String     | string
/// bool       | bool
/// isize      | int
/// i8 .. i64  | int8 .. int64
/// usize      | uint
/// u8 .. u64  | uint8 .. uint64
/// f32, f64   | float32, float64
/// Complex32  | complex64
/// Complex64  | complex128
/// ```
///
/// ### Example
/// ```
/// # use argread_builder as argread;
/// use argread::Value;
///
/// assert_eq!(u8::parse_value("0x1f").unwrap(), 31);
/// assert_eq!(
///     u8::parse_value("256").unwrap_err().to_string(),
///     "unable to parse value {input: 256, type: uint8}: number too large to fit in target type",
/// );
/// ```
pub trait Value: Sized {
    /// The name reported in the `type` context of a conversion error.
    const TYPE_NAME: &'static str;

    /// Convert the token, or fail with an `unable to parse value` error.
    fn parse_value(token: &str) -> Result<Self, Error>;
}

pub(crate) fn invalid<T: Value>(token: &str, cause: ValueError) -> Error {
    Error::new("unable to parse value")
        .with("input", token)
        .with("type", T::TYPE_NAME)
        .caused_by(cause)
}

impl Value for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_value(token: &str) -> Result<Self, Error> {
        Ok(token.to_string())
    }
}

impl Value for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_value(token: &str) -> Result<Self, Error> {
        match token.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Ok(true),
            "0" | "f" | "false" => Ok(false),
            _ => Err(invalid::<Self>(token, ValueError::Bool)),
        }
    }
}

/// Split an integer token into its sign, digits, and radix.
fn split_radix(token: &str) -> (bool, &str, u32) {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        for prefix in prefixes {
            if let Some(digits) = unsigned.strip_prefix(prefix) {
                return (negative, digits, radix);
            }
        }
    }

    (negative, unsigned, 10)
}

macro_rules! integer_value {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Value for $t {
                const TYPE_NAME: &'static str = $name;

                fn parse_value(token: &str) -> Result<Self, Error> {
                    let (negative, digits, radix) = split_radix(token);
                    // An explicit sign keeps a second sign inside the digits from being accepted.
                    let sign = if negative { '-' } else { '+' };
                    <$t>::from_str_radix(&format!("{sign}{digits}"), radix)
                        .map_err(|error| invalid::<Self>(token, ValueError::from(error)))
                }
            }
        )*
    };
}

integer_value! {
    isize => "int",
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    usize => "uint",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

macro_rules! float_value {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Value for $t {
                const TYPE_NAME: &'static str = $name;

                fn parse_value(token: &str) -> Result<Self, Error> {
                    <$t>::from_str(token)
                        .map_err(|error| invalid::<Self>(token, ValueError::from(error)))
                }
            }
        )*
    };
}

float_value! {
    f32 => "float32",
    f64 => "float64",
}

macro_rules! complex_value {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Value for $t {
                const TYPE_NAME: &'static str = $name;

                fn parse_value(token: &str) -> Result<Self, Error> {
                    let inner = token
                        .strip_prefix('(')
                        .and_then(|rest| rest.strip_suffix(')'))
                        .unwrap_or(token);
                    <$t>::from_str(inner)
                        .map_err(|error| invalid::<Self>(token, ValueError::from(error)))
                }
            }
        )*
    };
}

complex_value! {
    Complex32 => "complex64",
    Complex64 => "complex128",
}
