//! Typed converters: one per [`ValueKind`].
//!
//! Conversion is best-effort, following the C library conventions of `strtoll`/`strtoull`/`strtod`.
//! The longest valid prefix of a token is converted and the remainder ignored.
//! A token without any valid prefix converts to zero rather than failing.
use crate::model::{FloatWidth, Signedness, Value, ValueKind};
use crate::wide::WideString;

/// Convert the `token` into a [`Value`] of the semantic type `kind`.
///
/// The `trigger` is the switch which matched this conversion.
/// It only matters for [`ValueKind::Boolean`]: a token equal to its trigger converts to `true`.
/// This is what makes presence-only flags work, since they pass their switch as both the token and the trigger.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::{convert, Signedness, Value, ValueKind};
///
/// let kind = ValueKind::Integer { signedness: Signedness::Signed, width: 4 };
/// assert_eq!(convert(kind, "0x1F", "-d"), Value::Signed(31));
/// assert_eq!(convert(kind, "0b101", "-d"), Value::Signed(5));
/// assert_eq!(convert(kind, "017", "-d"), Value::Signed(15));
/// assert_eq!(convert(kind, "nope", "-d"), Value::Signed(0));
///
/// assert_eq!(convert(ValueKind::Boolean, "-e", "-e"), Value::Boolean(true));
/// assert_eq!(convert(ValueKind::Boolean, "0", "-e"), Value::Boolean(false));
/// ```
pub fn convert(kind: ValueKind, token: &str, trigger: &str) -> Value {
    match kind {
        ValueKind::Integer {
            signedness: Signedness::Signed,
            ..
        } => Value::Signed(parse_signed(token)),
        ValueKind::Integer {
            signedness: Signedness::Unsigned,
            ..
        } => Value::Unsigned(parse_unsigned(token)),
        ValueKind::Boolean => Value::Boolean(parse_boolean(token, trigger)),
        ValueKind::Float(FloatWidth::Single) => {
            Value::Single(float_prefix(token).parse().unwrap_or(0.0))
        }
        ValueKind::Float(FloatWidth::Double) => {
            Value::Double(float_prefix(token).parse().unwrap_or(0.0))
        }
        ValueKind::NarrowString => Value::Narrow(token.to_string()),
        ValueKind::WideString => Value::Wide(WideString::from_narrow(token)),
    }
}

/// Detect the radix from the token prefix, returning the radix and the number of bytes to skip.
pub(crate) fn detect_radix(token: &str) -> (u32, usize) {
    match token.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', b'b' | b'B', ..] => (2, 2),
        [b'0', ..] => (8, 1),
        _ => (10, 0),
    }
}

pub(crate) fn parse_signed(token: &str) -> i64 {
    let (radix, skip) = detect_radix(token);
    scan_integer(&token[skip..], radix).signed()
}

pub(crate) fn parse_unsigned(token: &str) -> u64 {
    let (radix, skip) = detect_radix(token);
    scan_integer(&token[skip..], radix).unsigned()
}

pub(crate) fn parse_boolean(token: &str, trigger: &str) -> bool {
    scan_integer(token, 10).signed() != 0 || token == trigger
}

#[derive(Debug, PartialEq, Eq)]
struct ScannedInteger {
    negative: bool,
    magnitude: u64,
    overflow: bool,
}

impl ScannedInteger {
    fn signed(&self) -> i64 {
        if self.negative {
            if self.overflow || self.magnitude > i64::MIN.unsigned_abs() {
                i64::MIN
            } else {
                (self.magnitude as i64).wrapping_neg()
            }
        } else if self.overflow || self.magnitude > i64::MAX as u64 {
            i64::MAX
        } else {
            self.magnitude as i64
        }
    }

    fn unsigned(&self) -> u64 {
        if self.overflow {
            u64::MAX
        } else if self.negative {
            // strtoull negates in the unsigned domain.
            self.magnitude.wrapping_neg()
        } else {
            self.magnitude
        }
    }
}

fn scan_integer(text: &str, radix: u32) -> ScannedInteger {
    let text = text.trim_start_matches(is_c_space);
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let text = if radix == 16 {
        strip_hex_prefix(text)
    } else {
        text
    };
    let mut magnitude: u64 = 0;
    let mut overflow = false;

    for digit in text.chars().map_while(|c| c.to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(next) => magnitude = next,
            None => overflow = true,
        }
    }

    ScannedInteger {
        negative,
        magnitude,
        overflow,
    }
}

// Base 16 scanning tolerates its own "0x" prefix, but only when a hex digit follows.
fn strip_hex_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();

    if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        &text[2..]
    } else {
        text
    }
}

/// The longest prefix of the token which forms a decimal floating point literal.
/// Hexadecimal float literals (ex: `0x1p3`) are not recognized, so they read as `0`.
fn float_prefix(token: &str) -> &str {
    let text = token.trim_start_matches(is_c_space);
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let candidate = &bytes[end..];

        if candidate.len() >= word.len()
            && candidate[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        {
            return &text[..end + word.len()];
        }
    }

    let mut digits = 0;

    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }

    if bytes.get(end) == Some(&b'.') {
        let mut fraction = end + 1;

        while bytes.get(fraction).is_some_and(u8::is_ascii_digit) {
            fraction += 1;
            digits += 1;
        }

        if digits > 0 {
            end = fraction;
        }
    }

    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;

        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }

        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
                exponent += 1;
            }

            end = exponent;
        }
    }

    &text[..end]
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    const SIGNED: ValueKind = ValueKind::Integer {
        signedness: Signedness::Signed,
        width: 8,
    };
    const UNSIGNED: ValueKind = ValueKind::Integer {
        signedness: Signedness::Unsigned,
        width: 8,
    };

    #[rstest]
    #[case("0x1F", (16, 2))]
    #[case("0X1f", (16, 2))]
    #[case("0b101", (2, 2))]
    #[case("0B101", (2, 2))]
    #[case("017", (8, 1))]
    #[case("0", (8, 1))]
    #[case("19", (10, 0))]
    #[case("-0x1F", (10, 0))]
    #[case("", (10, 0))]
    #[case("x", (10, 0))]
    fn radix(#[case] token: &str, #[case] expected: (u32, usize)) {
        assert_eq!(detect_radix(token), expected);
    }

    #[rstest]
    #[case("0x1F", 31)]
    #[case("0b101", 5)]
    #[case("017", 15)]
    #[case("19", 19)]
    #[case("-19", -19)]
    #[case("+19", 19)]
    #[case("  42", 42)]
    #[case("42abc", 42)]
    #[case("0x", 0)]
    #[case("0x0x1F", 31)]
    #[case("0x-1F", -31)]
    #[case("09", 0)]
    #[case("0", 0)]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("-0x1F", 0)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("9223372036854775808", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    #[case("-9223372036854775809", i64::MIN)]
    #[case("99999999999999999999999", i64::MAX)]
    fn signed(#[case] token: &str, #[case] expected: i64) {
        assert_eq!(parse_signed(token), expected);
        assert_eq!(convert(SIGNED, token, "-x"), Value::Signed(expected));
    }

    #[rstest]
    #[case("0x1F", 31)]
    #[case("0xFFFFFFFFFFFFFFFF", u64::MAX)]
    #[case("0x10000000000000000", u64::MAX)]
    #[case("18446744073709551615", u64::MAX)]
    #[case("-1", u64::MAX)]
    #[case("-2", u64::MAX - 1)]
    #[case("0777", 511)]
    #[case("nope", 0)]
    fn unsigned(#[case] token: &str, #[case] expected: u64) {
        assert_eq!(parse_unsigned(token), expected);
        assert_eq!(convert(UNSIGNED, token, "-x"), Value::Unsigned(expected));
    }

    #[rstest]
    #[case("1", "-e", true)]
    #[case("7", "-e", true)]
    #[case("-1", "-e", true)]
    #[case("0", "-e", false)]
    #[case("", "-e", false)]
    #[case("true", "-e", false)]
    #[case("-e", "-e", true)]
    // No radix detection for booleans.
    #[case("0x1", "-e", false)]
    #[case("010", "-e", true)]
    fn boolean(#[case] token: &str, #[case] trigger: &str, #[case] expected: bool) {
        assert_eq!(parse_boolean(token, trigger), expected);
        assert_eq!(
            convert(ValueKind::Boolean, token, trigger),
            Value::Boolean(expected)
        );
    }

    #[rstest]
    #[case("1.5", "1.5")]
    #[case("  -1.5e3xyz", "-1.5e3")]
    #[case("+.5", "+.5")]
    #[case("5.", "5.")]
    #[case("1e", "1")]
    #[case("1e+", "1")]
    #[case("2E-2", "2E-2")]
    #[case("inf", "inf")]
    #[case("-Infinity", "-Infinity")]
    #[case("NaN(123)", "NaN")]
    #[case(".", "")]
    #[case("-", "")]
    #[case("abc", "")]
    #[case("", "")]
    #[case("é1", "")]
    #[case("0x1p3", "0")]
    fn prefix(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(float_prefix(token), expected);
    }

    #[rstest]
    #[case("1.5", 1.5)]
    #[case("3.14abc", 3.14)]
    #[case("-2e3", -2000.0)]
    #[case("0x1p3", 0.0)]
    #[case("abc", 0.0)]
    #[case("", 0.0)]
    fn double(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(
            convert(ValueKind::Float(FloatWidth::Double), token, "-f"),
            Value::Double(expected)
        );
    }

    #[test]
    fn single_not_double_rounded() {
        // Parsing f32 directly must match Rust's own f32 parsing.
        let token = "1.00000005960464477539062499";
        assert_eq!(
            convert(ValueKind::Float(FloatWidth::Single), token, "-f"),
            Value::Single(token.parse::<f32>().unwrap())
        );
    }

    #[test]
    fn double_special() {
        assert_matches!(
            convert(ValueKind::Float(FloatWidth::Double), "-inf", "-f"),
            Value::Double(v) if v == f64::NEG_INFINITY
        );
        assert_matches!(
            convert(ValueKind::Float(FloatWidth::Double), "nan", "-f"),
            Value::Double(v) if v.is_nan()
        );
        assert_matches!(
            convert(ValueKind::Float(FloatWidth::Double), "1e999", "-f"),
            Value::Double(v) if v == f64::INFINITY
        );
    }

    #[test]
    fn strings() {
        assert_eq!(
            convert(ValueKind::NarrowString, "hello", "-p"),
            Value::Narrow("hello".to_string())
        );
        assert_eq!(
            convert(ValueKind::WideString, "héllo", "-w"),
            Value::Wide(WideString::from_narrow("héllo"))
        );
    }

    #[test]
    fn signed_decimal_round_trip() {
        for _ in 0..1000 {
            let value: i64 = thread_rng().gen();
            assert_eq!(parse_signed(&value.to_string()), value);
        }
    }

    #[test]
    fn unsigned_decimal_round_trip() {
        for _ in 0..1000 {
            let value: u64 = thread_rng().gen();
            assert_eq!(parse_unsigned(&value.to_string()), value);
        }
    }

    #[test]
    fn double_round_trip() {
        for _ in 0..1000 {
            let value: f64 = thread_rng().gen_range(-1.0e12..1.0e12);
            assert_eq!(
                convert(ValueKind::Float(FloatWidth::Double), &value.to_string(), "-f"),
                Value::Double(value)
            );
        }
    }
}
