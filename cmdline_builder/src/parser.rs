mod base;
mod interface;
mod middleware;

pub use base::{ConfigError, ParseError};
pub(crate) use base::{AnonymousBinding, ErrorContext, Registry};
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use middleware::Translator;

#[cfg(test)]
pub(crate) use base::test;
#[cfg(test)]
pub(crate) use interface::util;
