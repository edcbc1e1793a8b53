use std::path::PathBuf;

use crate::model::{FloatWidth, Signedness, Value, ValueKind};
use crate::prelude::FieldType;
use crate::wide::WideString;

macro_rules! integer_field {
    ($variant:ident, $signedness:expr, $($t:ty),*) => {
        $(
            impl FieldType for $t {
                const KIND: ValueKind = ValueKind::Integer {
                    signedness: $signedness,
                    width: std::mem::size_of::<$t>(),
                };

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        // Keep the low-order bits, same as copying the low-order bytes of the widest value.
                        Value::$variant(v) => Some(v as $t),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_field!(Signed, Signedness::Signed, i8, i16, i32, i64, isize);
integer_field!(Unsigned, Signedness::Unsigned, u8, u16, u32, u64, usize);

impl FieldType for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for f32 {
    const KIND: ValueKind = ValueKind::Float(FloatWidth::Single);

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Single(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for f64 {
    const KIND: ValueKind = ValueKind::Float(FloatWidth::Double);

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for String {
    const KIND: ValueKind = ValueKind::NarrowString;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Narrow(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for PathBuf {
    const KIND: ValueKind = ValueKind::NarrowString;

    fn from_value(value: Value) -> Option<Self> {
        String::from_value(value).map(PathBuf::from)
    }
}

impl FieldType for WideString {
    const KIND: ValueKind = ValueKind::WideString;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Wide(v) => Some(v),
            _ => None,
        }
    }
}

// An unset string field reads as `None`.
impl FieldType for Option<String> {
    const KIND: ValueKind = ValueKind::NarrowString;

    fn from_value(value: Value) -> Option<Self> {
        String::from_value(value).map(Some)
    }
}

impl FieldType for Option<WideString> {
    const KIND: ValueKind = ValueKind::WideString;

    fn from_value(value: Value) -> Option<Self> {
        WideString::from_value(value).map(Some)
    }
}
