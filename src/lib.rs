//! `argread` is a small, order-sensitive command line argument reader for Rust.
//!
//! The program declares *slots* on a [`Reader`], each bound to a target it owns, and then processes a list of tokens.
//! Processing parses each token into its target type, and writes it through to the target.
//! `argread` is deliberately small; it does not generate help text, and it does not support sub-commands.
//!
//! # Usage
//! This page includes a few demos on using `argread`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_summer_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_summer_b.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer -v 1 2 3
//! Sum of [1, 2, 3]: 6
//!
//! $ summer 1 blah
//! Parse error: error setting variant argument {arguments: 1 blah}: unable to parse value {input: blah, type: uint32}: invalid digit found in string
//! ```
//!
//! # Builder Api
//! Configure `argread` by starting with a [`Reader`] and chaining registrations.
//! There are five kinds of slots:
//! * *Flag*: a switch without an operand (ex: `-v` or `--verbose`).
//! Flags take a short name, a long name, or both, and set a fixed value into the target when present.
//! Short flags may be grouped in a single token (ex: `-xvf`).
//! * *Named value*: a switch with an operand (ex: `-o out.txt` or `--output out.txt`).
//! The operand is always the token immediately following the switch, even when it looks like a switch itself.
//! In a short group, a named value may only appear last (ex: `-vo out.txt`).
//! * *Positional*: a required value, bound in declaration order.
//! * *Optional*: a value bound in declaration order after the positionals, when there are enough tokens.
//! * *Variadic*: a list taking every token left after the positionals.
//! A reader with a variadic ignores its optional slots.
//!
//! Each kind of slot has a typed registration (ex: [`Reader::named`]) and a closure registration (ex: [`Reader::named_func`]).
//! The typed registrations parse via the [`Value`] trait, which `argread` implements for strings, booleans, integers, floats and complex numbers.
//!
//! Switches are read first, from anywhere in the input.
//! Tokens which are not switches are bound to the positional, then optional or variadic, slots in the order they appear.
//! ```
//! use argread::Reader;
//!
//! let mut verbose = false;
//! let mut output = String::from("a.out");
//! let mut input = String::default();
//! let mut level: u8 = 1;
//!
//! let mut reader = Reader::new()
//!     .flag(&mut verbose, true, Some('v'), Some("verbose"))
//!     .named(&mut output, Some('o'), Some("output"))
//!     .pos(&mut input)
//!     .optional(&mut level);
//! reader.process(&["main.c", "-vo", "main", "3"]).unwrap();
//! drop(reader);
//!
//! assert!(verbose);
//! assert_eq!(output, "main");
//! assert_eq!(input, "main.c");
//! assert_eq!(level, 3);
//! ```
//!
//! ### Errors
//! Problems with the input are reported as an [`Error`] from [`Reader::process`].
//! Processing stops at the first error; targets which were already written are left as they are.
//!
//! Problems with the registrations themselves are programmer errors, and cause a panic at registration time.
//! For example, registering two switches with the same name:
//! ```should_panic
//! use argread::Reader;
//!
//! let mut apple = false;
//! let mut avocado = false;
//! Reader::new()
//!     .flag(&mut apple, true, Some('a'), None)
//!     .flag(&mut avocado, true, Some('a'), None);
//! ```
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit `tracing` debug events for registration and dispatch.
pub mod derive;

pub use argread_builder::*;
