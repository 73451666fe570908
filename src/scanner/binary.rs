// ============================================================================
// Binary Layout
// IEEE-754 interchange formats and rounding of binary mantissas
// ============================================================================

/// Field widths of an IEEE-754 binary interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BinaryLayout {
    /// Explicit significand bits (hidden bit excluded)
    pub mantissa_bits: u32,
    /// Biased exponent field width
    pub exponent_bits: u32,
}

pub(crate) const BINARY32: BinaryLayout = BinaryLayout {
    mantissa_bits: 23,
    exponent_bits: 8,
};

pub(crate) const BINARY64: BinaryLayout = BinaryLayout {
    mantissa_bits: 52,
    exponent_bits: 11,
};

impl BinaryLayout {
    /// Significand precision in bits, hidden bit included.
    #[inline]
    pub const fn precision(&self) -> i64 {
        self.mantissa_bits as i64 + 1
    }

    /// Exponent bias; also the unbiased exponent of the largest finite value.
    #[inline]
    pub const fn bias(&self) -> i64 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// Unbiased exponent of the smallest normal value.
    #[inline]
    pub const fn min_normal_exp(&self) -> i64 {
        1 - self.bias()
    }

    /// Biased exponent field of infinities and NaNs.
    #[inline]
    pub const fn infinite_exponent(&self) -> i64 {
        (1 << self.exponent_bits) - 1
    }

    #[inline]
    pub const fn sign_bit(&self, negative: bool) -> u64 {
        (negative as u64) << (self.mantissa_bits + self.exponent_bits)
    }

    #[inline]
    pub const fn infinity(&self, negative: bool) -> u64 {
        self.sign_bit(negative) | ((self.infinite_exponent() as u64) << self.mantissa_bits)
    }

    /// Whether `bits` encodes an infinity of either sign.
    #[inline]
    pub const fn is_infinity(&self, bits: u64) -> bool {
        bits & !self.sign_bit(true) == self.infinity(false)
    }

    /// Assemble a sign, a biased exponent and explicit significand bits.
    #[inline]
    pub const fn pack(&self, negative: bool, biased_exponent: i64, mantissa: u64) -> u64 {
        self.sign_bit(negative)
            | ((biased_exponent as u64) << self.mantissa_bits)
            | (mantissa & ((1 << self.mantissa_bits) - 1))
    }
}

/// Round `mantissa × 2^exponent` (plus a sticky remainder) into `layout`.
///
/// Returns a signed infinity when the rounded value exceeds the finite range
/// and a signed zero when it falls below half the smallest subnormal.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn round_binary(
    layout: &BinaryLayout,
    negative: bool,
    mantissa: u64,
    sticky: bool,
    exponent: i64,
) -> u64 {
    let sign_bit = layout.sign_bit(negative);
    if mantissa == 0 {
        return sign_bit;
    }

    // value = (m / 2^63) × 2^e2 with the top bit of m set
    let leading = mantissa.leading_zeros();
    let m = mantissa << leading;
    let e2 = exponent.saturating_add(63 - leading as i64);
    if e2 > layout.bias() {
        return layout.infinity(negative);
    }

    let precision = layout.precision();
    let min_normal = layout.min_normal_exp();
    let keep = if e2 >= min_normal {
        precision
    } else {
        precision - (min_normal - e2)
    };
    let shift = 64 - keep;
    if shift > 64 {
        return sign_bit;
    }
    let shift = shift as u32;

    let wide = m as u128;
    let mut kept = (wide >> shift) as u64;
    let rem = wide & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    if rem > half || (rem == half && (sticky || kept & 1 == 1)) {
        kept += 1;
    }

    let hidden = 1u64 << layout.mantissa_bits;
    if e2 >= min_normal {
        let (kept, e2) = if kept == hidden << 1 {
            (kept >> 1, e2 + 1)
        } else {
            (kept, e2)
        };
        if e2 > layout.bias() {
            return layout.infinity(negative);
        }
        layout.pack(negative, e2 + layout.bias(), kept)
    } else {
        // Subnormal; rounding up into the hidden bit yields the smallest normal.
        sign_bit | kept
    }
}
