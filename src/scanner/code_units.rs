// ============================================================================
// Code Units
// Non-owning view over narrow or wide character code units
// ============================================================================

/// Borrowed run of code units to scan.
///
/// Only the ASCII subset of each width takes part in numeric literals, so the
/// scanner looks at every unit through [`unit`](Self::unit) and never decodes
/// multi-unit sequences. No terminator is assumed; the slice bounds are the
/// literal bounds.
///
/// # Example
/// ```
/// use str_to_num::scanner::{wide_literal, CodeUnits};
///
/// const WIDE: [u16; 10] = wide_literal(b"1234567890");
/// let tail = CodeUnits::wide(&WIDE).tail(5);
/// assert_eq!(tail.len(), 5);
/// assert_eq!(tail.unit(0), u32::from(b'6'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeUnits<'a> {
    /// 8-bit units (`&str`, byte strings)
    Narrow(&'a [u8]),
    /// 16-bit units (UTF-16 / Windows `wchar_t`)
    Wide16(&'a [u16]),
    /// 32-bit units (UTF-32 / Unix `wchar_t`)
    Wide32(&'a [u32]),
}

impl<'a> CodeUnits<'a> {
    /// View over 8-bit units.
    #[inline]
    pub const fn narrow(units: &'a [u8]) -> Self {
        CodeUnits::Narrow(units)
    }

    /// View over the bytes of a string slice.
    #[inline]
    pub const fn narrow_str(s: &'a str) -> Self {
        CodeUnits::Narrow(s.as_bytes())
    }

    /// View over 16-bit units.
    #[inline]
    pub const fn wide(units: &'a [u16]) -> Self {
        CodeUnits::Wide16(units)
    }

    /// View over 32-bit units.
    #[inline]
    pub const fn wide32(units: &'a [u32]) -> Self {
        CodeUnits::Wide32(units)
    }

    /// Number of code units in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        match *self {
            CodeUnits::Narrow(s) => s.len(),
            CodeUnits::Wide16(s) => s.len(),
            CodeUnits::Wide32(s) => s.len(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of one code unit in bytes.
    #[inline]
    pub const fn unit_width(&self) -> usize {
        match *self {
            CodeUnits::Narrow(_) => 1,
            CodeUnits::Wide16(_) => 2,
            CodeUnits::Wide32(_) => 4,
        }
    }

    /// Code unit at `index`, widened to `u32`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    pub const fn unit(&self, index: usize) -> u32 {
        match *self {
            CodeUnits::Narrow(s) => s[index] as u32,
            CodeUnits::Wide16(s) => s[index] as u32,
            CodeUnits::Wide32(s) => s[index],
        }
    }

    /// Sub-view of at most `count` units starting at `pos`.
    ///
    /// `count` is clamped to what remains. A `pos` past the end gives an
    /// empty view rather than panicking.
    pub const fn substr(self, pos: usize, count: usize) -> Self {
        let len = self.len();
        let start = if pos > len { len } else { pos };
        let remaining = len - start;
        let take = if count > remaining { remaining } else { count };
        match self {
            CodeUnits::Narrow(s) => CodeUnits::Narrow(window(s, start, take)),
            CodeUnits::Wide16(s) => CodeUnits::Wide16(window(s, start, take)),
            CodeUnits::Wide32(s) => CodeUnits::Wide32(window(s, start, take)),
        }
    }

    /// Sub-view from `pos` to the end.
    #[inline]
    pub const fn tail(self, pos: usize) -> Self {
        self.substr(pos, usize::MAX)
    }
}

// Callers guarantee start + take <= s.len().
const fn window<T>(s: &[T], start: usize, take: usize) -> &[T] {
    let (_, rest) = s.split_at(start);
    let (head, _) = rest.split_at(take);
    head
}

/// Build a 16-bit literal from an ASCII byte string at compile time.
pub const fn wide_literal<const N: usize>(ascii: &[u8; N]) -> [u16; N] {
    let mut out = [0u16; N];
    let mut i = 0;
    while i < N {
        out[i] = ascii[i] as u16;
        i += 1;
    }
    out
}

/// Build a 32-bit literal from an ASCII byte string at compile time.
pub const fn wide32_literal<const N: usize>(ascii: &[u8; N]) -> [u32; N] {
    let mut out = [0u32; N];
    let mut i = 0;
    while i < N {
        out[i] = ascii[i] as u32;
        i += 1;
    }
    out
}

// ============================================================================
// ASCII Classification
// ============================================================================

/// Value of a decimal digit unit.
#[inline]
pub(crate) const fn decimal_digit(unit: u32) -> Option<u32> {
    match unit {
        0x30..=0x39 => Some(unit - 0x30),
        _ => None,
    }
}

/// Value of a hex digit unit (either case).
#[inline]
pub(crate) const fn hex_digit(unit: u32) -> Option<u32> {
    match unit {
        0x30..=0x39 => Some(unit - 0x30),
        0x41..=0x46 => Some(unit - 0x41 + 10),
        0x61..=0x66 => Some(unit - 0x61 + 10),
        _ => None,
    }
}

#[inline]
pub(crate) const fn digit_in_radix(unit: u32, radix: u32) -> Option<u32> {
    if radix == 16 {
        hex_digit(unit)
    } else {
        decimal_digit(unit)
    }
}

#[inline]
pub(crate) const fn is_ascii(unit: u32, byte: u8) -> bool {
    unit == byte as u32
}

/// Case-insensitive match against an ASCII letter.
#[inline]
pub(crate) const fn is_ascii_letter(unit: u32, lower: u8) -> bool {
    unit == lower as u32 || unit == lower.to_ascii_uppercase() as u32
}

/// `0x` / `0X` at `pos`.
#[inline]
pub(crate) const fn has_hex_prefix(units: &CodeUnits<'_>, pos: usize) -> bool {
    pos + 1 < units.len()
        && is_ascii(units.unit(pos), b'0')
        && is_ascii_letter(units.unit(pos + 1), b'x')
}

// ============================================================================
// Conversions
// ============================================================================

impl<'a> From<&'a str> for CodeUnits<'a> {
    fn from(s: &'a str) -> Self {
        CodeUnits::narrow_str(s)
    }
}

impl<'a> From<&'a String> for CodeUnits<'a> {
    fn from(s: &'a String) -> Self {
        CodeUnits::narrow_str(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for CodeUnits<'a> {
    fn from(s: &'a [u8]) -> Self {
        CodeUnits::Narrow(s)
    }
}

impl<'a> From<&'a [u16]> for CodeUnits<'a> {
    fn from(s: &'a [u16]) -> Self {
        CodeUnits::Wide16(s)
    }
}

impl<'a> From<&'a [u32]> for CodeUnits<'a> {
    fn from(s: &'a [u32]) -> Self {
        CodeUnits::Wide32(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for CodeUnits<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        CodeUnits::Narrow(s)
    }
}

impl<'a, const N: usize> From<&'a [u16; N]> for CodeUnits<'a> {
    fn from(s: &'a [u16; N]) -> Self {
        CodeUnits::Wide16(s)
    }
}

impl<'a, const N: usize> From<&'a [u32; N]> for CodeUnits<'a> {
    fn from(s: &'a [u32; N]) -> Self {
        CodeUnits::Wide32(s)
    }
}

impl<'a> From<&'a Vec<u8>> for CodeUnits<'a> {
    fn from(s: &'a Vec<u8>) -> Self {
        CodeUnits::Narrow(s.as_slice())
    }
}

impl<'a> From<&'a Vec<u16>> for CodeUnits<'a> {
    fn from(s: &'a Vec<u16>) -> Self {
        CodeUnits::Wide16(s.as_slice())
    }
}

impl<'a> From<&'a Vec<u32>> for CodeUnits<'a> {
    fn from(s: &'a Vec<u32>) -> Self {
        CodeUnits::Wide32(s.as_slice())
    }
}
