mod binding;
mod core;
mod descriptor;
mod field;

pub use self::core::CommandLine;
pub use descriptor::Descriptor;
