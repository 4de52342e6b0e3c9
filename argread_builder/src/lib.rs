//! Builder module for `argread`.
//! See [documentation root](https://docs.rs/argread/latest/argread/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod error;
mod parser;

pub use api::*;
pub use error::{Error, ValueError};
pub use num_complex::{Complex, Complex32, Complex64};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
