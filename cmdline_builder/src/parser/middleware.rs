use std::env;

use crate::api::Descriptor;
use crate::parser::base::{ErrorContext, ParseError, Registry};
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The translator of command line tokens into a record `R`.
///
/// Built via [`CommandLine`](crate::CommandLine).
pub struct Translator<'a, R> {
    program: String,
    registry: Registry<'a, R>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a, R> std::fmt::Debug for Translator<'a, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("program", &self.program)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<'a, R> Translator<'a, R> {
    pub(crate) fn new(
        program: impl Into<String>,
        registry: Registry<'a, R>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            registry,
            user_interface,
        }
    }

    /// The program name this translator was configured with.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The registered field descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor<'a, R>> {
        self.registry.descriptors()
    }
}

impl<'a, R: Default> Translator<'a, R> {
    /// Translate the tokens into `record`.
    ///
    /// The `tokens` exclude the program name.
    /// The record is first reset to `R::default()`, so every field not mentioned on the command line reads as its zero value.
    /// Then the tokens are scanned left to right:
    /// 1. A token equal to a descriptor's switch triggers that descriptor (every matching descriptor fires, in registration order).
    /// 2. A value-consuming descriptor converts the following token, which is then skipped.
    /// Otherwise, the switch itself is converted.
    /// 3. Tokens which trigger nothing are ignored.
    ///
    /// Malformed values are never errors: they convert to the zero value of the field's type.
    /// The only failure is a value-consuming switch as the last token ([`ParseError::MissingValue`]).
    /// On failure `record` is left at `R::default()` plus whatever was assigned before the failing switch.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{CommandLine, Descriptor, ParseError};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     depth: u8,
    /// }
    ///
    /// let translator = CommandLine::new("program")
    ///     .add(Descriptor::value("depth", "-d", |o: &mut Options| &mut o.depth))
    ///     .build();
    /// let mut options = Options::default();
    ///
    /// translator.translate(&mut options, &["-d", "017"]).unwrap();
    /// assert_eq!(options.depth, 15);
    ///
    /// let error = translator.translate(&mut options, &["-d"]).unwrap_err();
    /// assert_eq!(error.index(), 0);
    /// ```
    pub fn translate(&self, record: &mut R, tokens: &[&str]) -> Result<(), ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Translating {tokens:?} for '{}'.", self.program);
        }
        self.registry.translate(record, tokens)
    }

    /// Translate the full argument vector into `record`.
    ///
    /// The first element of `argv` is the program name, and is skipped.
    /// An `argv` holding no more than the program name translates to `R::default()`.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{CommandLine, Descriptor};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// let translator = CommandLine::new("program")
    ///     .add(Descriptor::presence("verbose", "-v", |o: &mut Options| &mut o.verbose))
    ///     .build();
    /// let mut options = Options::default();
    ///
    /// translator.translate_argv(&mut options, &["program", "-v"]).unwrap();
    /// assert!(options.verbose);
    ///
    /// translator.translate_argv(&mut options, &["-v"]).unwrap();
    /// assert!(!options.verbose);
    /// ```
    pub fn translate_argv(&self, record: &mut R, argv: &[&str]) -> Result<(), ParseError> {
        self.translate(record, argv.get(1..).unwrap_or_default())
    }

    /// Run the translator against the input tokens, producing a fresh record.
    ///
    /// The `tokens` exclude the program name.
    /// If the translator encounters an error, it reports it (along with where in the tokens it happened) and returns with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<R, i32> {
        let mut record = R::default();

        match self.translate(&mut record, tokens) {
            Ok(()) => Ok(record),
            Err(error) => {
                let index = error.index();
                self.user_interface.print_error(error);
                self.user_interface
                    .print_error_context(ErrorContext::new(index, tokens));
                Err(1)
            }
        }
    }

    /// Run the translator against the Cli [`env::args`], producing a fresh record.
    ///
    /// If the translator encounters an error, it will exit with error code `1` (via `std::process::exit`).
    pub fn parse(&self) -> R {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(record) => record,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
