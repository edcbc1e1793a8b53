//! Derive module for `cmdline`.
//! See [documentation root](https://docs.rs/cmdline/latest/cmdline/derive/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::parse_macro_input;

/// Derive a command line translator for a struct.
///
/// Generates the following functions on the struct `S`:
/// * `S::cmdline_translator() -> Translator<'static, S>`: builds the translator (exits with `1` on a configuration error).
/// * `S::cmdline_parse() -> S`: translates the Cli [`std::env::args`], exiting with `1` on a parse error.
/// * `S::cmdline_parse_tokens(&[&str]) -> Result<S, i32>`: translates the given tokens, which exclude the program name.
///
/// The struct must implement `Default`; every field not mentioned on the command line reads as its default.
///
/// ### Struct attributes
/// * `#[cmdline(program = "..")]`: the program name (default `env!("CARGO_CRATE_NAME")`).
///
/// ### Field attributes
/// * `#[cmdline(switch = "..")]`: the switch which triggers the field (required).
/// Repeat to register aliases, ex: `#[cmdline(switch = "-d", switch = "--depth")]`.
/// * `#[cmdline(next)]` or `#[cmdline(presence)]`: whether the field takes its value from the following token, or is presence-only.
/// The default is presence-only for `bool`, and the following token for everything else.
/// * `#[cmdline(skip)]`: leave the field out of the translator.
///
/// ### Example
/// ```ignore
/// use cmdline::derive::*;
///
/// #[derive(Debug, Default, CmdLine)]
/// #[cmdline(program = "example")]
/// struct Parameters {
///     #[cmdline(switch = "-d", switch = "--depth")]
///     depth: i32,
///     #[cmdline(switch = "-v")]
///     verbose: bool,
///     #[cmdline(skip)]
///     internal: Vec<String>,
/// }
///
/// let parameters = Parameters::cmdline_parse_tokens(&["-v", "--depth", "0x10"]).unwrap();
/// assert_eq!(parameters.depth, 16);
/// assert!(parameters.verbose);
/// ```
#[proc_macro_derive(CmdLine, attributes(cmdline))]
pub fn cmdline(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(parser) => TokenStream2::from(parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
