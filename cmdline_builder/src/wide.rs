/// The platform wide character, matching the width of C's `wchar_t`.
#[cfg(windows)]
pub type WideChar = u16;

/// The platform wide character, matching the width of C's `wchar_t`.
#[cfg(not(windows))]
pub type WideChar = u32;

/// An owned, NUL terminated, wide character string.
///
/// On Windows the units are UTF-16 code units; elsewhere they are Unicode scalar values.
///
/// Portability note: tokens are already UTF-8 (`&str`), so the conversion always decodes UTF-8.
/// It does not consult the process multibyte locale the way `mbstowcs` does.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::WideString;
///
/// let wide = WideString::from_narrow("héllo");
/// assert_eq!(wide.len(), 5);
/// assert_eq!(wide.as_units_with_nul().last(), Some(&0));
/// assert_eq!(wide.to_string_lossy(), "héllo");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WideString {
    // Always ends with a single terminating 0.
    units: Vec<WideChar>,
}

impl WideString {
    /// Create an empty wide string.
    pub fn new() -> Self {
        Self { units: vec![0] }
    }

    /// Convert a narrow string into an owned wide string.
    pub fn from_narrow(narrow: &str) -> Self {
        let mut units = encode(narrow);
        units.reserve_exact(1);
        units.push(0);
        Self { units }
    }

    /// The wide characters, without the terminator.
    pub fn as_units(&self) -> &[WideChar] {
        &self.units[..self.units.len() - 1]
    }

    /// The wide characters, including the terminator.
    pub fn as_units_with_nul(&self) -> &[WideChar] {
        &self.units
    }

    /// A pointer to the NUL terminated buffer, suitable for passing as a `const wchar_t*`.
    pub fn as_ptr(&self) -> *const WideChar {
        self.units.as_ptr()
    }

    /// The number of wide characters, without the terminator.
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// Whether the string holds no wide characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode back into a narrow string, replacing invalid units with `U+FFFD`.
    pub fn to_string_lossy(&self) -> String {
        decode(self.as_units())
    }
}

impl Default for WideString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for WideString {
    fn from(value: &str) -> Self {
        Self::from_narrow(value)
    }
}

impl std::fmt::Debug for WideString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WideString({:?})", self.to_string_lossy())
    }
}

impl std::fmt::Display for WideString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

#[cfg(windows)]
fn encode(narrow: &str) -> Vec<WideChar> {
    narrow.encode_utf16().collect()
}

#[cfg(not(windows))]
fn encode(narrow: &str) -> Vec<WideChar> {
    narrow.chars().map(WideChar::from).collect()
}

#[cfg(windows)]
fn decode(units: &[WideChar]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(not(windows))]
fn decode(units: &[WideChar]) -> String {
    units
        .iter()
        .map(|unit| char::from_u32(*unit).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let wide = WideString::default();
        assert!(wide.is_empty());
        assert_eq!(wide.as_units(), &[] as &[WideChar]);
        assert_eq!(wide.as_units_with_nul(), &[0]);
        assert_eq!(wide, WideString::from_narrow(""));
    }

    #[rstest]
    #[case("abc", 3)]
    #[case("héllo", 5)]
    #[case("日本語", 3)]
    fn from_narrow(#[case] narrow: &str, #[case] length: usize) {
        // Execute
        let wide = WideString::from_narrow(narrow);

        // Verify
        assert_eq!(wide.len(), length);
        assert_eq!(wide.as_units_with_nul().len(), length + 1);
        assert_eq!(wide.as_units_with_nul()[length], 0);
        assert_eq!(wide.to_string_lossy(), narrow);
        assert_eq!(format!("{wide}"), narrow);
    }

    #[test]
    fn ascii_units() {
        let wide = WideString::from("ab");
        assert_eq!(wide.as_units(), &[97, 98]);
        assert_eq!(format!("{wide:?}"), "WideString(\"ab\")");
    }
}
