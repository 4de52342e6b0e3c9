//! Derive Api for `argread` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(ReadArgs)]`.
//! This implements [`ReadArgs`](../trait.ReadArgs.html) for `S`, which registers each field of `S` as a slot.
//! Then, either bind `S` onto a reader via [`Reader::structure`](../struct.Reader.html#method.structure), or read the Cli directly via `S::read_args()`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_copy.rs")]
//! ```
//!
//! ```console
//! $ demo_copy -rl -b 4096 a.txt b.txt 644
//! Parameters {
//!     recursive: true,
//!     verbosity: 3,
//!     buffer: 4096,
//!     source: "a.txt",
//!     destination: "b.txt",
//!     mode: "644",
//!     attempts: None,
//! }
//! ```
//!
//! ### Field Configuration
//! Each field is configured by an optional `#[argread("..")]` annotation, whose text is a comma separated list of components:
//! ```console
//! Annotation                    | Slot
//! ---------------------------------------------------------------------
//! (none) or ""                  | positional (or variadic, for Vec<T>)
//! "skip"                        | none; the field is ignored
//! "optional"                    | optional
//! "flag,SHORT,LONG"             | flag setting `true` (bool fields only)
//! "flag,SHORT,LONG,DEFAULT"     | flag setting DEFAULT, parsed as the field type
//! "SHORT,LONG"                  | named value
//! ```
//!
//! Either of `SHORT` or `LONG` may be left empty, but not both.
//! Fields are registered in declaration order, so the order of positional and optional fields on the struct is their order on the Cli.
//!
//! The field types supported are those implementing [`Value`](../trait.Value.html) (ex: `String`, `bool`, `u32`, `f64`, `Complex64`), plus `Vec<T>` of those.
//! A `Vec<T>` field is always the variadic, and may only be annotated with `"skip"`.
//! Any other field type must be annotated with `"skip"`.
//!
//! Misconfigured annotations are reported as compile errors.
//! For example:
//! ```compile_fail
//! use argread::derive::*;
//!
//! #[derive(Default, ReadArgs)]
//! struct Parameters {
//!     #[argread("flag,v,verbose")]
//!     verbosity: u8,
//! }
//! ```
//!
//! A flag default which does not parse as the field type, or a name clashing with another registration, panics at registration time.
//! ```should_panic
//! use argread::{derive::*, Reader};
//!
//! #[derive(Default, ReadArgs)]
//! struct Parameters {
//!     #[argread("flag,l,level,high")]
//!     level: u8,
//! }
//!
//! let mut parameters = Parameters::default();
//! Reader::new().structure(&mut parameters);
//! ```
pub use argread_builder::ReadArgs;
pub use argread_derive::*;
