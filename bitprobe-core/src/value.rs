//! # Value Wrapper
//!
//! A [`NamedValue`] pairs a numeric value with its table label and a `raw`
//! flag. Raw values (complement results) are already bit patterns, so
//! formatting skips the overflow adjustment for them. Formatting widths
//! all derive from the active width `W`: hex pads to `W / 4` digits
//! (integer division), binary to `W` digits, decimal aligns to
//! `ceil(W * log10(2))` columns.

use crate::bits::{mask, MAX_WIDTH};
use crate::error::Result;
use crate::num::Num;

/// A numeric value with a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    pub label: String,
    pub num: Num,
    /// Bypass the overflow adjustment: the value is already a bit pattern.
    pub raw: bool,
}

impl NamedValue {
    pub fn new(label: impl Into<String>, num: impl Into<Num>) -> Self {
        NamedValue {
            label: label.into(),
            num: num.into(),
            raw: false,
        }
    }

    /// A value in raw mode (complement results).
    pub fn raw(label: impl Into<String>, num: impl Into<Num>) -> Self {
        NamedValue {
            label: label.into(),
            num: num.into(),
            raw: true,
        }
    }

    /// Parse a numeric literal into a named value.
    pub fn parse(token: &str, label: impl Into<String>) -> Result<Self> {
        Ok(NamedValue::new(label, Num::parse(token)?))
    }

    /// The value as displayed: negative values become their `width`-bit
    /// two's-complement pattern under the overflow policy (unless raw),
    /// and anything past `2^width - 1` is undefined.
    pub fn effective(&self, width: u32, overflow: bool) -> Num {
        // the shift below needs width <= MAX_WIDTH; Options enforces this
        // for CLI runs, direct callers must too
        debug_assert!(width >= 1 && width <= MAX_WIDTH);
        let v = match self.num.value() {
            Some(v) => v,
            None => return Num::Undefined,
        };
        let adjusted = if !self.raw && overflow && v < 0 {
            (1i128 << width) + v
        } else {
            v
        };
        if adjusted > mask(width) as i128 || (!self.raw && overflow && adjusted < 0) {
            Num::Undefined
        } else {
            Num::Defined(adjusted)
        }
    }

    pub fn as_decimal(&self, width: u32, overflow: bool) -> String {
        fmt_decimal(self.effective(width, overflow), width)
    }

    pub fn as_hex(&self, width: u32, overflow: bool) -> String {
        fmt_hex(self.effective(width, overflow), width)
    }

    pub fn as_binary(&self, width: u32, overflow: bool) -> String {
        fmt_binary(self.effective(width, overflow), width)
    }

    /// The (label, dec, hex, bin) table row.
    pub fn row(&self, width: u32, overflow: bool) -> [String; 4] {
        [
            self.label.clone(),
            self.as_decimal(width, overflow),
            self.as_hex(width, overflow),
            self.as_binary(width, overflow),
        ]
    }
}

/// Decimal column count for a `width`-bit value.
fn decimal_columns(width: u32) -> usize {
    (width as f64 * 2f64.log10()).ceil() as usize
}

/// Signed decimal, space-signed and right-aligned to the width-derived
/// column count (wider values simply overflow the column).
pub fn fmt_decimal(num: Num, width: u32) -> String {
    let v = match num.value() {
        Some(v) => v,
        None => return "undefined".to_string(),
    };
    let signed = if v < 0 {
        v.to_string()
    } else {
        format!(" {}", v)
    };
    format!("{:>1$}", signed, decimal_columns(width))
}

/// Lowercase hex, zero-padded to `width / 4` digits. Negative values keep
/// their sign, with the zero padding after it.
pub fn fmt_hex(num: Num, width: u32) -> String {
    fmt_radix(num, (width / 4) as usize, |m| format!("{:x}", m))
}

/// Binary, zero-padded to exactly `width` digits.
pub fn fmt_binary(num: Num, width: u32) -> String {
    fmt_radix(num, width as usize, |m| format!("{:b}", m))
}

fn fmt_radix(num: Num, digits: usize, render: impl Fn(u128) -> String) -> String {
    let v = match num.value() {
        Some(v) => v,
        None => return "undefined".to_string(),
    };
    let body = render(v.unsigned_abs());
    if v < 0 {
        // sign counts toward the padded width, zeros go after it
        let pad = digits.saturating_sub(1);
        format!("-{:0>1$}", body, pad.max(body.len()))
    } else {
        format!("{:0>1$}", body, digits)
    }
}
