use thiserror::Error;

use crate::api::Descriptor;
use crate::convert::convert;
use crate::model::{Value, ValueKind};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid translator configuration, reported by `CommandLine::build_translator`.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A fatal error encountered while translating the command line.
///
/// Everything else is best-effort: unknown tokens are ignored, and malformed values convert to zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value-consuming switch was the last token.
    #[error("Parse error: No value provided to switch '{switch}' (field '{field}').")]
    MissingValue {
        /// The field the switch is bound to.
        field: String,
        /// The switch which expected a value.
        switch: String,
        /// The index of the switch amongst the tokens.
        index: usize,
    },
}

impl ParseError {
    /// The index of the offending token.
    pub fn index(&self) -> usize {
        match self {
            ParseError::MissingValue { index, .. } => *index,
        }
    }
}

/// Points out the offending token underneath the tokens of the command line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, tokens: &[&str]) -> Self {
        Self {
            index,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let offset: usize = self
            .tokens
            .iter()
            .take(self.index)
            .map(|token| token.chars().count() + 1)
            .sum();
        writeln!(f, "{}", self.tokens.join(" "))?;
        write!(f, "{:offset$}^", "")
    }
}

/// Behaviour to assign a converted [`Value`] into some field of the record `R`.
///
/// The field's type is erased here, so that fields of every type may sit in a single registry.
/// The typed side of this lives in `api::binding`.
pub(crate) trait AnonymousBinding<R> {
    /// The semantic type of the bound field.
    fn kind(&self) -> ValueKind;

    /// Assign the value into the record, returning whether the field accepted it.
    fn assign(&self, record: &mut R, value: Value) -> bool;
}

#[cfg(test)]
pub(crate) mod test {
    use crate::api::Descriptor;
    use crate::wide::WideString;

    #[derive(Debug, Default, Clone, PartialEq)]
    pub(crate) struct Record {
        pub(crate) depth: i32,
        pub(crate) enabled: bool,
        pub(crate) path: Option<String>,
        pub(crate) factor: f32,
        pub(crate) wide: WideString,
        pub(crate) mask: u8,
    }

    pub(crate) fn descriptors<'a>() -> Vec<Descriptor<'a, Record>> {
        vec![
            Descriptor::value("depth", "-d", |r: &mut Record| &mut r.depth),
            Descriptor::presence("enabled", "-e", |r: &mut Record| &mut r.enabled),
            Descriptor::value("path", "-p", |r: &mut Record| &mut r.path),
            Descriptor::value("factor", "-f", |r: &mut Record| &mut r.factor),
            Descriptor::value("wide", "-w", |r: &mut Record| &mut r.wide),
            Descriptor::value("mask", "-m", |r: &mut Record| &mut r.mask),
        ]
    }
}

/// The field descriptor registry, along with the dispatch loop over it.
pub(crate) struct Registry<'a, R> {
    descriptors: Vec<Descriptor<'a, R>>,
}

impl<'a, R> std::fmt::Debug for Registry<'a, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.descriptors.iter()).finish()
    }
}

impl<'a, R> Registry<'a, R> {
    pub(crate) fn new(descriptors: Vec<Descriptor<'a, R>>) -> Result<Self, ConfigError> {
        for descriptor in &descriptors {
            if descriptor.switch().is_empty() {
                return Err(ConfigError(format!(
                    "Switch for field '{}' cannot be empty.",
                    descriptor.name()
                )));
            }
        }

        Ok(Self { descriptors })
    }

    pub(crate) fn descriptors(&self) -> std::slice::Iter<'_, Descriptor<'a, R>> {
        self.descriptors.iter()
    }
}

impl<'a, R: Default> Registry<'a, R> {
    /// Reset the record, then translate each matched token into its field.
    pub(crate) fn translate(&self, record: &mut R, tokens: &[&str]) -> Result<(), ParseError> {
        *record = R::default();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor];
            #[cfg(feature = "tracing_debug")]
            let mut matched = false;

            // Every matching descriptor fires, in registration order.
            for descriptor in self.descriptors.iter() {
                if descriptor.switch() != token {
                    continue;
                }

                #[cfg(feature = "tracing_debug")]
                {
                    matched = true;
                }

                let input = if descriptor.consumes_next() {
                    if cursor + 1 >= tokens.len() {
                        return Err(ParseError::MissingValue {
                            field: descriptor.name().to_string(),
                            switch: token.to_string(),
                            index: cursor,
                        });
                    }

                    cursor += 1;
                    tokens[cursor]
                } else {
                    token
                };

                let value = convert(descriptor.kind(), input, token);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Matched '{token}' to {descriptor:?}, converting '{input}' to {value:?}."
                    );
                }

                if !descriptor.assign(record, value) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Field '{}' rejected the value for '{token}'; leaving it at its default.",
                            descriptor.name()
                        );
                    }
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                if !matched {
                    debug!("Ignoring unrecognized token '{token}'.");
                }
            }

            cursor += 1;
        }

        Ok(())
    }
}
