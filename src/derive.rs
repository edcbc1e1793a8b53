//! Derive Api for `cmdline` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a record struct `S` instrumented with `#[derive(Default, CmdLine)]`.
//! This will generate a function `S::cmdline_parse() -> S` which translates the Cli parameters into `S`.
//!
//! ```no_run
#![doc = include_str!("../demos/translate.rs")]
//! ```
//!
//! ### Parser Configuration
//! * `#[cmdline(program = "..")]` sets the program name (default `env!("CARGO_CRATE_NAME")`).
//!
//! ### Field Configuration
//! Every field requires a switch, unless it is skipped:
//! * `#[cmdline(switch = "..")]` binds the field to the switch.
//! Repeat it to register aliases (ex: `#[cmdline(switch = "-d", switch = "--depth")]`).
//! * `#[cmdline(next)]` or `#[cmdline(presence)]` to explicitly take the value from the following token, or to make the field presence-only.
//! By default `bool` fields are presence-only, and all others take the following token.
//! * `#[cmdline(skip)]` leaves the field out of the translator, at its default.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, CmdLine)]
//! struct Parameters {
//!     #[cmdline(switch = "-q")]
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Descriptor::new("quick", "-q", true, |record: &mut Parameters| &mut record.quick))
//!
//!     #[cmdline(switch = "-b", switch = "--brown")]
//!     brown: bool,
//!     // the above generates:
//!     //  .add(Descriptor::new("brown", "-b", false, |record: &mut Parameters| &mut record.brown))
//!     //  .add(Descriptor::new("brown", "--brown", false, |record: &mut Parameters| &mut record.brown))
//!
//!     #[cmdline(next, switch = "-f")]
//!     fox: bool,
//!     // the above generates:
//!     //  .add(Descriptor::new("fox", "-f", true, |record: &mut Parameters| &mut record.fox))
//!
//!     #[cmdline(skip)]
//!     jumps: Vec<String>,
//!     // the above generates nothing
//! }
//! ```
//!
//! ### Generated Functions
//! * `S::cmdline_translator() -> Translator<'static, S>`
//! * `S::cmdline_parse() -> S`
//! * `S::cmdline_parse_tokens(tokens: &[&str]) -> Result<S, i32>`
pub use cmdline_builder::{CommandLine, Descriptor, Translator};
pub use cmdline_derive::*;
