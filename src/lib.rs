//! `cmdline` is a declarative, type-directed command line translator for Rust.
//!
//! A program declares the fields of a record it wants populated from the command line.
//! Each field is described by a *switch* (ex: `-d`), whether the switch *consumes the next token* as its value, and the field's type.
//! `cmdline` then scans the tokens, converting the value for each matched switch into the field's type and assigning it into the record.
//!
//! `cmdline` prioritizes the following design concerns:
//! * *Type directed conversion*:
//! The user never calls any `&str -> T` conversion functions directly; the field's type selects the converter.
//! * *Best-effort translation*:
//! Unrecognized tokens are ignored and malformed values convert to zero.
//! The only error is a switch missing its value.
//! * *Deterministic records*:
//! The record is reset to its `Default` before any token is examined, so unmentioned fields always read as their zero value.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/translate.rs")]
//! ```
//!
//! ```console
//! $ translate -d 0x1F -e -p hello -f 2.5 -w wide
//! Parameters {
//!     depth: 31,
//!     enabled: true,
//!     path: Some(
//!         "hello",
//!     ),
//!     factor: 2.5,
//!     wide: WideString("wide"),
//! }
//!
//! $ translate -d
//! Parse error: No value provided to switch '-d' (field 'depth').
//! -d
//! ^
//! Failed to parse command line!
//! ```
//!
//! # Builder Api
//! Configure `cmdline` by starting with a [`CommandLine`] and `add`ing [`Descriptor`]s.
//! ```
//! use cmdline::{CommandLine, Descriptor, WideString};
//!
//! #[derive(Debug, Default)]
//! struct Parameters {
//!     depth: i32,
//!     enabled: bool,
//!     wide: WideString,
//! }
//!
//! let translator = CommandLine::new("translate")
//!     .add(Descriptor::value("depth", "-d", |p: &mut Parameters| &mut p.depth))
//!     .add(Descriptor::presence("enabled", "-e", |p: &mut Parameters| &mut p.enabled))
//!     .add(Descriptor::value("wide", "-w", |p: &mut Parameters| &mut p.wide))
//!     .build();
//!
//! let parameters = translator.parse_tokens(&["-d", "017", "-e", "-w", "abc"]).unwrap();
//! assert_eq!(parameters.depth, 15);
//! assert!(parameters.enabled);
//! assert_eq!(parameters.wide.as_units_with_nul().len(), 4);
//! ```
//!
//! ### Field types
//! The field's type `T` must implement [FieldType](./prelude/trait.FieldType.html):
//! * Integers (`i8`..`i64`, `isize`, `u8`..`u64`, `usize`): the base is detected from the prefix (`0x` hexadecimal, `0b` binary, a leading `0` octal, otherwise decimal).
//! The longest valid run of digits is converted, clamping on overflow, then truncated to the field's width.
//! * `bool`: true when the token is a nonzero integer, or when the token is the switch itself.
//! So a presence-only `bool` is true whenever its switch appears.
//! * `f32`, `f64`: the longest prefix forming a decimal floating point literal.
//! * `String`, `Option<String>`, `PathBuf`: an owned copy of the token.
//! * [`WideString`], `Option<WideString>`: an owned, NUL terminated, wide character copy of the token.
//!
//! ### Matching
//! * Switches match tokens exactly (case-sensitive).
//! * Every descriptor matching a token fires, in registration order.
//! Several switches may target the same field (aliases); the last to fire wins.
//! * A consumed value token is never itself matched as a switch.
//!
//! ### Logging
//! Enable the `tracing_debug` feature to log the translation through [`tracing`](https://docs.rs/tracing), including ignored tokens and rejected values.
pub mod derive;

pub use cmdline_builder::*;
