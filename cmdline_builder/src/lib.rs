//! Builder module for `cmdline`.
//! See [documentation root](https://docs.rs/cmdline/latest/cmdline/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod convert;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod wide;

pub use api::*;
pub use convert::convert;
pub use model::*;
pub use parser::{ConfigError, ParseError, Translator};
pub use wide::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
