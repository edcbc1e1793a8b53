use crate::api::Descriptor;
use crate::parser::{ConfigError, ConsoleInterface, Registry, Translator, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line translator configuration.
///
/// Field descriptors are registered in order; on each token every matching descriptor fires in that order.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::{CommandLine, Descriptor};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Options {
///     depth: i32,
///     verbose: bool,
/// }
///
/// let translator = CommandLine::new("program")
///     .add(Descriptor::value("depth", "-d", |o: &mut Options| &mut o.depth))
///     .add(Descriptor::presence("verbose", "-v", |o: &mut Options| &mut o.verbose))
///     .build();
///
/// let options = translator.parse_tokens(&["-v", "-d", "0x10"]).unwrap();
/// assert_eq!(options, Options { depth: 16, verbose: true });
/// ```
pub struct CommandLine<'a, R> {
    program: String,
    descriptors: Vec<Descriptor<'a, R>>,
}

impl<'a, R> CommandLine<'a, R> {
    /// Create a command line translator configuration.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::CommandLine;
    ///
    /// #[derive(Default)]
    /// struct Options {}
    ///
    /// let translator = CommandLine::<Options>::new("program")
    ///     .build();
    ///
    /// translator.parse_tokens(&[]).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            descriptors: Vec::default(),
        }
    }

    /// Register a field descriptor.
    ///
    /// A field may be registered under several switches (aliases) by adding one descriptor per switch.
    /// Several fields may also share the same switch, in which case each fires in registration order.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{CommandLine, Descriptor};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     path: String,
    /// }
    ///
    /// let translator = CommandLine::new("program")
    ///     .add(Descriptor::value("path", "-p", |o: &mut Options| &mut o.path))
    ///     .add(Descriptor::value("path", "--path", |o: &mut Options| &mut o.path))
    ///     .build();
    ///
    /// assert_eq!(translator.parse_tokens(&["--path", "a"]).unwrap().path, "a");
    /// assert_eq!(translator.parse_tokens(&["-p", "b"]).unwrap().path, "b");
    /// ```
    pub fn add(mut self, descriptor: Descriptor<'a, R>) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Translator<'a, R>, ConfigError> {
        let registry = Registry::new(self.descriptors)?;
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built translator for '{}' with registry: {registry:?}.",
                self.program
            );
        }
        Ok(Translator::new(self.program, registry, user_interface))
    }

    /// Build the translator as a Result.
    /// This finalizes the configuration and checks for errors (ex: an empty switch).
    pub fn build_translator(self) -> Result<Translator<'a, R>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the translator.
    /// This finalizes the configuration and checks for errors (ex: an empty switch).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Translator<'a, R> {
        match self.build_translator() {
            Ok(translator) => translator,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
