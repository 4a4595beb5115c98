//! # Bit Arithmetic Engine
//!
//! Fixed-width complement arithmetic, popcount, minimal-bit counts and
//! Hamming distance, all over [`Num`] at an active width `W`. Operands
//! outside the `W`-bit pattern range (negative, or past the mask) yield
//! [`Num::Undefined`] instead of panicking.

use crate::num::Num;

/// Widest supported analysis width, in bits.
pub const MAX_WIDTH: u32 = 64;

/// All-ones pattern for a `width`-bit value.
#[inline]
pub fn mask(width: u32) -> u128 {
    debug_assert!(width >= 1 && width <= 128);
    if width == 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Pattern of `v` at `width` bits, if `v` is a representable non-negative
/// value.
fn pattern(v: Num, width: u32) -> Option<u128> {
    let v = v.value()?;
    if v < 0 {
        return None;
    }
    let bits = v as u128;
    (bits <= mask(width)).then_some(bits)
}

/// Flip every bit of `v` interpreted as a `width`-bit pattern.
pub fn ones_complement(v: Num, width: u32) -> Num {
    match pattern(v, width) {
        Some(bits) => Num::Defined((bits ^ mask(width)) as i128),
        None => Num::Undefined,
    }
}

/// One's complement plus one, wrapping 2^width back to 0.
pub fn twos_complement(v: Num, width: u32) -> Num {
    match pattern(v, width) {
        Some(bits) => {
            let m = mask(width);
            let inverted = bits ^ m;
            // inverted == m only for v == 0; +1 would be 2^width.
            let out = if inverted == m { 0 } else { inverted + 1 };
            Num::Defined(out as i128)
        }
        None => Num::Undefined,
    }
}

/// Count of set bits in `v`'s standard (not width-padded) representation.
/// Negative values count the bits of the magnitude.
pub fn popcount(v: Num) -> Num {
    match v.value() {
        Some(v) => Num::Defined(v.unsigned_abs().count_ones() as i128),
        None => Num::Undefined,
    }
}

/// ceil(log2(v)): the minimal bit count for a positive magnitude.
/// Undefined for v <= 0 (log of a non-positive number).
pub fn min_bits(v: Num) -> Num {
    match v.value() {
        Some(v) if v > 0 => Num::Defined(ceil_log2(v) as i128),
        _ => Num::Undefined,
    }
}

/// ceil(log2(v)) for v > 0, without floating point: 66 -> 7, 64 -> 6, 1 -> 0.
pub(crate) fn ceil_log2(v: i128) -> u32 {
    debug_assert!(v > 0);
    128 - ((v - 1).unsigned_abs()).leading_zeros()
}

/// Count of differing character positions between two bit-strings.
///
/// Zip semantics: positions past the shorter string are ignored. Both
/// analysis call sites pass two `W`-bit strings, so truncation never
/// fires there.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}
