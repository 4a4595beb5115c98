//! # Numeric Values
//!
//! A parsed input is either a concrete `i128` or the undefined marker.
//! Undefined is contagious: every operation on an undefined operand yields
//! undefined rather than an error, so a single out-of-range intermediate
//! shows up as "undefined" in its table cell without aborting the run.
//!
//! `i128` storage leaves headroom above the 64-bit maximum analysis width,
//! so two's complements up to 2^64 - 1 and shifted sums like
//! `(a << word_size) + b` stay exactly representable. Anything that would
//! still overflow is mapped to [`Num::Undefined`] via checked arithmetic.

use std::fmt;

use crate::error::{ProbeError, Result};

/// A numeric value or the undefined marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Num {
    Defined(i128),
    Undefined,
}

impl Num {
    /// Parse an integer literal: optional sign, `0x`/`0o`/`0b` prefix or
    /// plain decimal, `_` digit separators allowed.
    pub fn parse(token: &str) -> Result<Self> {
        parse_int_literal(token).map(Num::Defined)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Num::Undefined)
    }

    /// Extract the concrete value, if any.
    #[inline]
    pub fn value(&self) -> Option<i128> {
        match self {
            Num::Defined(v) => Some(*v),
            Num::Undefined => None,
        }
    }

    fn binary_op(self, rhs: Num, op: impl FnOnce(i128, i128) -> Option<i128>) -> Num {
        match (self, rhs) {
            (Num::Defined(a), Num::Defined(b)) => match op(a, b) {
                Some(v) => Num::Defined(v),
                None => Num::Undefined,
            },
            _ => Num::Undefined,
        }
    }

    pub fn add(self, rhs: Num) -> Num {
        self.binary_op(rhs, i128::checked_add)
    }

    pub fn sub(self, rhs: Num) -> Num {
        self.binary_op(rhs, i128::checked_sub)
    }

    pub fn bit_or(self, rhs: Num) -> Num {
        self.binary_op(rhs, |a, b| Some(a | b))
    }

    pub fn bit_and(self, rhs: Num) -> Num {
        self.binary_op(rhs, |a, b| Some(a & b))
    }

    pub fn bit_xor(self, rhs: Num) -> Num {
        self.binary_op(rhs, |a, b| Some(a ^ b))
    }

    /// Left shift; overflow out of `i128` yields undefined.
    pub fn shift_left(self, shift: u32) -> Num {
        match self {
            Num::Defined(v) => {
                if shift >= 127 {
                    return if v == 0 { Num::Defined(0) } else { Num::Undefined };
                }
                match 1i128.checked_shl(shift).and_then(|m| v.checked_mul(m)) {
                    Some(out) => Num::Defined(out),
                    None => Num::Undefined,
                }
            }
            Num::Undefined => Num::Undefined,
        }
    }

    /// Arithmetic right shift, saturating the shift amount.
    pub fn shift_right(self, shift: u32) -> Num {
        match self {
            Num::Defined(v) => Num::Defined(v >> shift.min(127)),
            Num::Undefined => Num::Undefined,
        }
    }
}

impl From<i128> for Num {
    fn from(v: i128) -> Self {
        Num::Defined(v)
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Defined(v) => write!(f, "{}", v),
            Num::Undefined => write!(f, "undefined"),
        }
    }
}

/// Parse `token` under generic integer-literal rules (the radix is taken
/// from the `0x`/`0o`/`0b` prefix, defaulting to decimal).
pub fn parse_int_literal(token: &str) -> Result<i128> {
    let bad = || ProbeError::InvalidInput(token.to_string());

    let trimmed = token.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, digits) = if let Some(d) = body.strip_prefix("0x").or(body.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o").or(body.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b").or(body.strip_prefix("0B")) {
        (2, d)
    } else {
        (10, body)
    };

    let digits = digits.replace('_', "");
    // from_str_radix accepts its own sign; the sign was consumed above.
    if digits.is_empty() || digits.starts_with('-') || digits.starts_with('+') {
        return Err(bad());
    }

    let magnitude = i128::from_str_radix(&digits, radix).map_err(|_| bad())?;
    Ok(if negative { -magnitude } else { magnitude })
}
