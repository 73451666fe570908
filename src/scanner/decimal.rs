// ============================================================================
// Decimal Conversion
// Correctly rounded decimal to binary conversion in fixed storage
// ============================================================================
//
// Significant digits are kept in a fixed array of MAX_DIGITS entries; digits
// past that only record whether any of them was nonzero. MAX_DIGITS exceeds
// the longest decimal expansion that can decide a rounding boundary of a
// binary64 value, so the sticky flag is all the dropped tail contributes.
//
// Conversion repeatedly multiplies or divides the digit string by powers of
// two until the value lies in [1/2, 1), then extracts mantissa bits and
// rounds half to even. Everything is `const fn` and allocation free.

use super::binary::BinaryLayout;

/// Significant digits retained before the tail collapses into a flag.
pub(crate) const MAX_DIGITS: usize = 768;

/// Longest digit string that always fits in a `u64`.
const MAX_EXACT_DIGITS: usize = 19;

/// Decimal point positions beyond this are certainly zero or infinity.
const DECIMAL_POINT_RANGE: i64 = 2047;

/// Largest shift per step; `5^MAX_SHIFT` must fit in a `u128`.
const MAX_SHIFT: u32 = 55;

/// `floor(n * log2(10))`: the shift that removes `n` decimal places.
const SHIFTS: [u8; 17] = [0, 3, 6, 9, 13, 16, 19, 23, 26, 29, 33, 36, 39, 43, 46, 49, 53];

const fn shift_for(places: i64) -> u32 {
    if places < SHIFTS.len() as i64 {
        SHIFTS[places as usize] as u32
    } else {
        MAX_SHIFT
    }
}

/// Arbitrary-length decimal significand `0.d1d2d3… × 10^decimal_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decimal {
    negative: bool,
    num_digits: usize,
    decimal_point: i64,
    truncated: bool,
    digits: [u8; MAX_DIGITS],
}

impl Decimal {
    pub const fn new(negative: bool) -> Self {
        Self {
            negative,
            num_digits: 0,
            decimal_point: 0,
            truncated: false,
            digits: [0; MAX_DIGITS],
        }
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    const fn store(&mut self, digit: u8) {
        if self.num_digits < MAX_DIGITS {
            self.digits[self.num_digits] = digit;
            self.num_digits += 1;
        } else if digit != 0 {
            self.truncated = true;
        }
    }

    /// Append a digit from before the decimal point.
    pub const fn push_integer_digit(&mut self, digit: u8) {
        if self.num_digits == 0 && digit == 0 {
            return;
        }
        self.store(digit);
        self.decimal_point += 1;
    }

    /// Append a digit from after the decimal point.
    pub const fn push_fraction_digit(&mut self, digit: u8) {
        if self.num_digits == 0 && digit == 0 {
            self.decimal_point -= 1;
            return;
        }
        self.store(digit);
    }

    /// Scale by `10^exponent`.
    pub const fn scale(&mut self, exponent: i64) {
        self.decimal_point = self.decimal_point.saturating_add(exponent);
    }

    /// Drop trailing zero digits.
    pub const fn trim(&mut self) {
        while self.num_digits != 0 && self.digits[self.num_digits - 1] == 0 {
            self.num_digits -= 1;
        }
    }

    /// `(mantissa, exponent)` with `value = mantissa × 10^exponent` exactly,
    /// when the digits fit in a `u64`.
    pub const fn exact_parts(&self) -> Option<(u64, i64)> {
        if self.num_digits == 0 {
            return Some((0, 0));
        }
        if self.truncated || self.num_digits > MAX_EXACT_DIGITS {
            return None;
        }
        let mut mantissa = 0u64;
        let mut i = 0;
        while i < self.num_digits {
            mantissa = mantissa * 10 + self.digits[i] as u64;
            i += 1;
        }
        Some((mantissa, self.decimal_point - self.num_digits as i64))
    }

    /// Correctly rounded bit pattern of this value in `layout`, with
    /// overflow to a signed infinity and underflow to a signed zero.
    pub const fn to_binary(mut self, layout: &BinaryLayout) -> u64 {
        let zero = layout.sign_bit(self.negative);
        let infinity = layout.infinity(self.negative);
        let min_exp = -layout.bias();
        let infinite_power = layout.infinite_exponent();

        if self.num_digits == 0 || self.decimal_point < -324 {
            return zero;
        }
        if self.decimal_point >= 310 {
            return infinity;
        }

        let mut exp2: i64 = 0;
        while self.decimal_point > 0 {
            let shift = shift_for(self.decimal_point);
            self.right_shift(shift);
            if self.decimal_point < -DECIMAL_POINT_RANGE {
                return zero;
            }
            exp2 += shift as i64;
        }
        while self.decimal_point <= 0 {
            let shift = if self.decimal_point == 0 {
                match self.digits[0] {
                    5..=9 => break,
                    0 | 1 => 2,
                    _ => 1,
                }
            } else {
                shift_for(-self.decimal_point)
            };
            self.left_shift(shift);
            if self.decimal_point > DECIMAL_POINT_RANGE {
                return infinity;
            }
            exp2 -= shift as i64;
        }

        // [1/2, 1) to the [1, 2) convention of the exponent field
        exp2 -= 1;
        while min_exp + 1 > exp2 {
            let mut shift = min_exp + 1 - exp2;
            if shift > MAX_SHIFT as i64 {
                shift = MAX_SHIFT as i64;
            }
            self.right_shift(shift as u32);
            exp2 += shift;
        }
        if exp2 - min_exp >= infinite_power {
            return infinity;
        }

        self.left_shift(layout.mantissa_bits + 1);
        let mut mantissa = self.round();
        if mantissa >= 1u64 << (layout.mantissa_bits + 1) {
            // carried into a new leading bit
            self.right_shift(1);
            exp2 += 1;
            mantissa = self.round();
            if exp2 - min_exp >= infinite_power {
                return infinity;
            }
        }
        let mut biased = exp2 - min_exp;
        if mantissa < 1u64 << layout.mantissa_bits {
            biased -= 1;
        }
        layout.pack(self.negative, biased, mantissa)
    }

    /// Integer part, rounded half to even.
    const fn round(&self) -> u64 {
        if self.num_digits == 0 || self.decimal_point < 0 {
            return 0;
        }
        if self.decimal_point > 18 {
            return u64::MAX;
        }
        let point = self.decimal_point as usize;
        let mut value = 0u64;
        let mut i = 0;
        while i < point {
            value *= 10;
            if i < self.num_digits {
                value += self.digits[i] as u64;
            }
            i += 1;
        }
        let mut round_up = false;
        if point < self.num_digits {
            round_up = self.digits[point] >= 5;
            if self.digits[point] == 5 && point + 1 == self.num_digits {
                round_up = self.truncated || (point != 0 && self.digits[point - 1] & 1 == 1);
            }
        }
        if round_up {
            value += 1;
        }
        value
    }

    /// Number of digits a left shift by `shift` adds: one less when the
    /// leading digits sort below those of `5^shift`.
    const fn digits_added_by_left_shift(&self, shift: u32) -> usize {
        let mut added = 0;
        let mut power = 1u64 << shift;
        while power != 0 {
            added += 1;
            power /= 10;
        }

        let pow5 = 5u128.pow(shift);
        let mut divisor = 1u128;
        while divisor <= pow5 / 10 {
            divisor *= 10;
        }
        let mut i = 0;
        while divisor != 0 {
            let p5 = ((pow5 / divisor) % 10) as u8;
            if i >= self.num_digits || self.digits[i] < p5 {
                return added - 1;
            }
            if self.digits[i] > p5 {
                return added;
            }
            i += 1;
            divisor /= 10;
        }
        added
    }

    /// Multiply by `2^shift`.
    const fn left_shift(&mut self, shift: u32) {
        if self.num_digits == 0 {
            return;
        }
        let added = self.digits_added_by_left_shift(shift);
        let mut read = self.num_digits;
        let mut write = self.num_digits + added;
        let mut n = 0u64;
        while read != 0 {
            read -= 1;
            write -= 1;
            n += (self.digits[read] as u64) << shift;
            self.emit_from_end(write, n % 10);
            n /= 10;
        }
        while n > 0 {
            write -= 1;
            self.emit_from_end(write, n % 10);
            n /= 10;
        }
        self.num_digits += added;
        if self.num_digits > MAX_DIGITS {
            self.num_digits = MAX_DIGITS;
        }
        self.decimal_point += added as i64;
        self.trim();
    }

    const fn emit_from_end(&mut self, index: usize, digit: u64) {
        if index < MAX_DIGITS {
            self.digits[index] = digit as u8;
        } else if digit > 0 {
            self.truncated = true;
        }
    }

    /// Divide by `2^shift`.
    const fn right_shift(&mut self, shift: u32) {
        let mut read = 0;
        let mut write = 0;
        let mut n = 0u64;
        while n >> shift == 0 {
            if read < self.num_digits {
                n = 10 * n + self.digits[read] as u64;
                read += 1;
            } else if n == 0 {
                return;
            } else {
                while n >> shift == 0 {
                    n *= 10;
                    read += 1;
                }
                break;
            }
        }
        self.decimal_point -= read as i64 - 1;
        if self.decimal_point < -DECIMAL_POINT_RANGE {
            self.num_digits = 0;
            self.decimal_point = 0;
            self.truncated = false;
            return;
        }

        let mask = (1u64 << shift) - 1;
        while read < self.num_digits {
            let digit = (n >> shift) as u8;
            n = 10 * (n & mask) + self.digits[read] as u64;
            read += 1;
            self.digits[write] = digit;
            write += 1;
        }
        while n > 0 {
            let digit = (n >> shift) as u8;
            n = 10 * (n & mask);
            if write < MAX_DIGITS {
                self.digits[write] = digit;
                write += 1;
            } else if digit > 0 {
                self.truncated = true;
            }
        }
        self.num_digits = write;
        self.trim();
    }
}
