use std::marker::PhantomData;

use crate::model::{Value, ValueKind};
use crate::parser::AnonymousBinding;
use crate::prelude::FieldType;

/// Binds a field of type `T` inside the record `R`, reached through `accessor`.
///
/// We use this at the bottom of the registry object graph so the compiler can maintain each field's type.
pub(crate) struct Binding<R, T, F> {
    accessor: F,
    _phantom: PhantomData<fn(&mut R) -> T>,
}

impl<R, T, F> Binding<R, T, F>
where
    F: Fn(&mut R) -> &mut T,
{
    pub(crate) fn new(accessor: F) -> Self {
        Self {
            accessor,
            _phantom: PhantomData,
        }
    }
}

impl<R, T, F> AnonymousBinding<R> for Binding<R, T, F>
where
    T: FieldType,
    F: Fn(&mut R) -> &mut T,
{
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn assign(&self, record: &mut R, value: Value) -> bool {
        match T::from_value(value) {
            Some(field) => {
                *(self.accessor)(record) = field;
                true
            }
            None => false,
        }
    }
}
