//! # Single/Pair Analysis
//!
//! Builds the ordered list of named derived values for one integer or a
//! pair. Width resolution happens first (pair inputs resolve together, so
//! each side's own rows use the pair width), then every derived value is
//! wrapped as a fresh [`NamedValue`].

use tracing::debug;

use crate::bits;
use crate::error::{ProbeError, Result};
use crate::num::Num;
use crate::options::Options;
use crate::value::NamedValue;

/// An analysis result: the resolved width plus the ordered row values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub width: u32,
    pub overflow: bool,
    pub values: Vec<NamedValue>,
}

impl Report {
    /// Render every value as a (label, dec, hex, bin) row.
    pub fn rows(&self) -> Vec<[String; 4]> {
        self.values
            .iter()
            .map(|v| v.row(self.width, self.overflow))
            .collect()
    }
}

/// Analyze a single integer literal.
pub fn analyze_one(token: &str, opts: &Options) -> Result<Report> {
    let a = NamedValue::parse(token, "A")?;
    let width = opts.width.resolve(&candidates(&[&a]))?;
    debug!(token, width, "analyzing one value");
    Ok(Report {
        width,
        overflow: opts.overflow,
        values: derive_one(a, width, opts),
    })
}

/// Analyze a pair of integer literals.
pub fn analyze_two(first: &str, second: &str, opts: &Options) -> Result<Report> {
    let a = NamedValue::parse(first, "A")?;
    let b = NamedValue::parse(second, "B")?;
    // Width resolves over the pair before either side's own rows are
    // derived, so both analyses share the pair width.
    let width = opts.width.resolve(&candidates(&[&a, &b]))?;
    debug!(first, second, width, "analyzing pair");

    let ws = opts.word_size;
    let (ai, bi) = (a.num, b.num);

    let mut values = derive_one(a, width, opts);
    values.extend(derive_one(b, width, opts));
    values.extend([
        NamedValue::new("A - B", ai.sub(bi)),
        NamedValue::new("B - A", bi.sub(ai)),
        NamedValue::new("A + B", ai.add(bi)),
        NamedValue::new("A | B", ai.bit_or(bi)),
        NamedValue::new("A & B", ai.bit_and(bi)),
        NamedValue::new("A ^ B", ai.bit_xor(bi)),
        NamedValue::new(format!("A << {} + B", ws), ai.shift_left(ws).add(bi)),
        NamedValue::new(format!("B << {} + A", ws), bi.shift_left(ws).add(ai)),
        NamedValue::new("A &~ B", ai.bit_and(bits::twos_complement(bi, width))),
        NamedValue::new("distance(A, B)", distance(ai, bi, width, opts)),
    ]);

    Ok(Report {
        width,
        overflow: opts.overflow,
        values,
    })
}

/// Validate the positional-argument count for a command.
pub fn check_arity(args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(ProbeError::Arity {
            expected,
            actual: args.len(),
            args: args.to_vec(),
        });
    }
    Ok(())
}

/// The six per-value rows: the value itself, both complements (raw),
/// popcount, minimal bits, and the word-size right shift of the raw
/// parsed integer.
fn derive_one(value: NamedValue, width: u32, opts: &Options) -> Vec<NamedValue> {
    let name = value.label.clone();
    let out = value.effective(width, opts.overflow);
    let raw_int = value.num;
    let ws = opts.word_size;
    vec![
        value,
        NamedValue::raw(
            format!("~{} ({} bits)", name, width),
            bits::ones_complement(out, width),
        ),
        NamedValue::raw(
            format!("twos_compl({}, {} bits)", name, width),
            bits::twos_complement(out, width),
        ),
        NamedValue::new(format!("popcount({})", name), bits::popcount(out)),
        NamedValue::new(format!("nbits({})", name), bits::min_bits(out)),
        NamedValue::new(format!("{} >> {}", name, ws), raw_int.shift_right(ws)),
    ]
}

/// Hamming distance between the two effective values' binary strings.
fn distance(a: Num, b: Num, width: u32, opts: &Options) -> Num {
    let a = NamedValue::new("", a).effective(width, opts.overflow);
    let b = NamedValue::new("", b).effective(width, opts.overflow);
    if a.is_undefined() || b.is_undefined() {
        return Num::Undefined;
    }
    let a_bits = crate::value::fmt_binary(a, width);
    let b_bits = crate::value::fmt_binary(b, width);
    Num::Defined(bits::hamming_distance(&a_bits, &b_bits) as i128)
}

/// Width-inference candidates: the raw parsed integers, in input order.
fn candidates(values: &[&NamedValue]) -> Vec<i128> {
    values.iter().filter_map(|v| v.num.value()).collect()
}
