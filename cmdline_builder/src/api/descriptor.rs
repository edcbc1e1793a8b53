use crate::api::binding::Binding;
use crate::model::{Value, ValueKind};
use crate::parser::AnonymousBinding;
use crate::prelude::FieldType;

/// A field descriptor: binds one field of the record `R` to a switch.
///
/// A descriptor is the four-tuple of *semantic type*, *field name*, *switch*, and *consumes-next*.
/// The semantic type is not given explicitly; it comes from the field's [`FieldType`] via the `accessor`.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::{Descriptor, Signedness, ValueKind};
///
/// #[derive(Default)]
/// struct Options {
///     depth: i32,
///     verbose: bool,
/// }
///
/// let depth = Descriptor::new("depth", "-d", true, |o: &mut Options| &mut o.depth);
/// let verbose = Descriptor::new("verbose", "-v", false, |o: &mut Options| &mut o.verbose);
///
/// assert_eq!(depth.kind(), ValueKind::Integer { signedness: Signedness::Signed, width: 4 });
/// assert!(depth.consumes_next());
/// assert_eq!(verbose.kind(), ValueKind::Boolean);
/// assert!(!verbose.consumes_next());
/// ```
pub struct Descriptor<'a, R> {
    name: String,
    switch: String,
    consumes_next: bool,
    binding: Box<dyn AnonymousBinding<R> + 'a>,
}

impl<'a, R: 'a> Descriptor<'a, R> {
    /// Create a field descriptor.
    ///
    /// * `name`: the name of the field, used in error messages.
    /// * `switch`: the token which triggers this descriptor (ex: `"-d"`), matched exactly and case-sensitively.
    /// * `consumes_next`: whether the token following the switch is the value.
    /// Otherwise, the switch itself is converted (see [presence](#method.presence)).
    /// * `accessor`: returns the field inside the record.
    pub fn new<T, F>(
        name: impl Into<String>,
        switch: impl Into<String>,
        consumes_next: bool,
        accessor: F,
    ) -> Self
    where
        T: FieldType + 'a,
        F: Fn(&mut R) -> &mut T + 'a,
    {
        Self {
            name: name.into(),
            switch: switch.into(),
            consumes_next,
            binding: Box::new(Binding::new(accessor)),
        }
    }

    /// Create a field descriptor which takes its value from the token following the switch.
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
    ///     .build();
    ///
    /// let options = translator.parse_tokens(&["-p", "hello"]).unwrap();
    /// assert_eq!(options.path, "hello");
    /// ```
    pub fn value<T, F>(name: impl Into<String>, switch: impl Into<String>, accessor: F) -> Self
    where
        T: FieldType + 'a,
        F: Fn(&mut R) -> &mut T + 'a,
    {
        Self::new(name, switch, true, accessor)
    }

    /// Create a presence-only field descriptor, which consumes no value.
    ///
    /// The switch itself is converted.
    /// For a `bool` field this always yields `true`, since a boolean token equal to its switch is `true`.
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
    ///
    /// assert!(translator.parse_tokens(&["-v"]).unwrap().verbose);
    /// assert!(!translator.parse_tokens(&[]).unwrap().verbose);
    /// ```
    pub fn presence<T, F>(name: impl Into<String>, switch: impl Into<String>, accessor: F) -> Self
    where
        T: FieldType + 'a,
        F: Fn(&mut R) -> &mut T + 'a,
    {
        Self::new(name, switch, false, accessor)
    }
}

impl<'a, R> Descriptor<'a, R> {
    /// The name of the bound field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The switch which triggers this descriptor.
    pub fn switch(&self) -> &str {
        &self.switch
    }

    /// Whether the token following the switch is consumed as the value.
    pub fn consumes_next(&self) -> bool {
        self.consumes_next
    }

    /// The semantic type of the bound field.
    pub fn kind(&self) -> ValueKind {
        self.binding.kind()
    }

    pub(crate) fn assign(&self, record: &mut R, value: Value) -> bool {
        self.binding.assign(record, value)
    }
}

impl<'a, R> std::fmt::Debug for Descriptor<'a, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let consumes = if self.consumes_next { " VALUE" } else { "" };

        write!(
            f,
            "Descriptor[{name}: {kind}, {switch}{consumes}]",
            name = self.name,
            kind = self.kind(),
            switch = self.switch,
        )
    }
}
