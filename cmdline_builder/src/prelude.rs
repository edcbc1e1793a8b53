//! Traits which, typically, may be imported without concern: `use cmdline::prelude::*`.
use crate::model::{Value, ValueKind};

/// Behaviour for a type that can be the target of a [`Descriptor`](../struct.Descriptor.html).
// Needs to be imported in order to implement a custom `FieldType`.
pub trait FieldType: Sized {
    /// The semantic type of the field, which selects its converter.
    const KIND: ValueKind;

    /// Accept a converted value.
    /// Returning `None` leaves the field untouched (at its default).
    fn from_value(value: Value) -> Option<Self>;
}
