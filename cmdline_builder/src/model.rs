use crate::wide::WideString;

/// Whether an integer field holds signed or unsigned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// `i8`, `i16`, `i32`, `i64`, `isize`.
    Signed,
    /// `u8`, `u16`, `u32`, `u64`, `usize`.
    Unsigned,
}

/// The precision of a floating point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    /// `f32`.
    Single,
    /// `f64`.
    Double,
}

/// The semantic type of a field.
///
/// Each kind selects exactly one converter (see [`convert`](./fn.convert.html)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An integer of any width.
    Integer {
        /// Signed or unsigned.
        signedness: Signedness,
        /// The storage size of the field, in bytes.
        width: usize,
    },
    /// A `bool`, including presence-only flags.
    Boolean,
    /// A floating point number.
    Float(FloatWidth),
    /// An owned narrow (UTF-8) string.
    NarrowString,
    /// An owned wide character string.
    WideString,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer {
                signedness: Signedness::Signed,
                width,
            } => write!(f, "i{}", width * 8),
            ValueKind::Integer {
                signedness: Signedness::Unsigned,
                width,
            } => write!(f, "u{}", width * 8),
            ValueKind::Boolean => write!(f, "bool"),
            ValueKind::Float(FloatWidth::Single) => write!(f, "f32"),
            ValueKind::Float(FloatWidth::Double) => write!(f, "f64"),
            ValueKind::NarrowString => write!(f, "string"),
            ValueKind::WideString => write!(f, "wide string"),
        }
    }
}

/// A converted token, ready to be assigned into a field.
///
/// Integers are always carried at their widest representation.
/// The field narrows them on assignment, keeping the low-order bits.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Result of a signed integer conversion.
    Signed(i64),
    /// Result of an unsigned integer conversion.
    Unsigned(u64),
    /// Result of a boolean conversion.
    Boolean(bool),
    /// Result of a single precision conversion.
    Single(f32),
    /// Result of a double precision conversion.
    Double(f64),
    /// An owned copy of the token.
    Narrow(String),
    /// An owned wide character copy of the token.
    Wide(WideString),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueKind::Integer { signedness: Signedness::Signed, width: 4 }, "i32")]
    #[case(ValueKind::Integer { signedness: Signedness::Unsigned, width: 1 }, "u8")]
    #[case(ValueKind::Boolean, "bool")]
    #[case(ValueKind::Float(FloatWidth::Single), "f32")]
    #[case(ValueKind::Float(FloatWidth::Double), "f64")]
    #[case(ValueKind::NarrowString, "string")]
    #[case(ValueKind::WideString, "wide string")]
    fn display_kind(#[case] kind: ValueKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
