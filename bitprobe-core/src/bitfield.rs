//! # Bit-field Decoder
//!
//! Parses a `name:width,...` field spec and slices a value's bit string
//! into the named sub-fields. Bit-field decoding always drives the active
//! width from the spec's total, overriding any width inference.

use tracing::debug;

use crate::bits::ceil_log2;
use crate::error::{ProbeError, Result};
use crate::num::parse_int_literal;
use crate::options::Options;

/// Largest single field: the widest slice `u128` can reparse.
pub const MAX_FIELD_BITS: u32 = 128;

/// One named field of a bit-field spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub bits: u32,
}

/// A decoded bit-field: headers plus the per-field binary slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitfieldReport {
    pub width: u32,
    pub fields: Vec<Field>,
    /// One binary substring per field, in spec order.
    pub slices: Vec<String>,
}

impl BitfieldReport {
    /// Header cells: an empty corner plus `name [bits]` per field.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![String::new()];
        headers.extend(
            self.fields
                .iter()
                .map(|f| format!("{} [{}]", f.name, f.bits)),
        );
        headers
    }

    /// The three value rows: binary, decimal and hex per field.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let values: Vec<u128> = self
            .slices
            .iter()
            // Slices come from our own binary rendering and are at most
            // MAX_FIELD_BITS long, so reparsing cannot fail.
            .map(|s| u128::from_str_radix(s, 2).unwrap_or(0))
            .collect();
        vec![
            std::iter::once("Bin".to_string())
                .chain(self.slices.iter().cloned())
                .collect(),
            std::iter::once("Dec".to_string())
                .chain(values.iter().map(|v| v.to_string()))
                .collect(),
            std::iter::once("Hex".to_string())
                .chain(values.iter().map(|v| format!("{:x}", v)))
                .collect(),
        ]
    }
}

/// Parse a comma-separated `name:width` field spec.
pub fn parse_spec(spec: &str) -> Result<Vec<Field>> {
    let parse_error = |detail: String| ProbeError::SpecParse {
        spec: spec.to_string(),
        detail,
    };

    let mut fields = Vec::new();
    for token in spec.trim().split(',') {
        let token = token.trim();
        let (name, bits) = token
            .split_once(':')
            .ok_or_else(|| parse_error(format!("missing ':' in '{}'", token)))?;
        let bits: u32 = bits
            .trim()
            .parse()
            .map_err(|_| parse_error(format!("invalid width '{}' for field '{}'", bits, name)))?;
        if bits == 0 {
            return Err(parse_error(format!("field '{}' has zero width", name)));
        }
        if bits > MAX_FIELD_BITS {
            return Err(parse_error(format!(
                "field '{}' is wider than {} bits",
                name, MAX_FIELD_BITS
            )));
        }
        fields.push(Field {
            name: name.trim().to_string(),
            bits,
        });
    }
    Ok(fields)
}

/// Decode `num_str` against `spec_str`, slicing its bit pattern into the
/// declared fields.
pub fn decode(spec_str: &str, num_str: &str, opts: &Options) -> Result<BitfieldReport> {
    let fields = parse_spec(spec_str)?;
    let width = fields
        .iter()
        .try_fold(0u32, |acc, f| acc.checked_add(f.bits))
        .ok_or_else(|| ProbeError::SpecParse {
            spec: spec_str.to_string(),
            detail: "total width overflows".to_string(),
        })?;

    let value = parse_int_literal(num_str)?;
    if value < 0 {
        // a bit pattern, not a signed quantity
        return Err(ProbeError::InvalidInput(num_str.to_string()));
    }
    let value_bits = if value > 0 { ceil_log2(value) } else { 0 };
    if value_bits > width {
        return Err(ProbeError::WidthMismatch {
            spec_bits: width,
            value_bits,
            token: num_str.to_string(),
        });
    }
    debug!(spec = spec_str, num = num_str, width, "decoding bit-field");

    let mut bits = format!("{:0>1$b}", value as u128, width as usize);
    if !opts.msb_first {
        bits = bits.chars().rev().collect();
    }

    let mut slices = Vec::with_capacity(fields.len());
    let mut cursor = 0;
    for field in &fields {
        let end = cursor + field.bits as usize;
        slices.push(bits[cursor..end].to_string());
        cursor = end;
    }

    Ok(BitfieldReport {
        width,
        fields,
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let fields = parse_spec("sign:1,exponent:8,fraction:23").unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], Field { name: "sign".to_string(), bits: 1 });
        assert_eq!(fields[2], Field { name: "fraction".to_string(), bits: 23 });
    }

    #[test]
    fn test_parse_spec_trims() {
        let fields = parse_spec(" a:1 , b:2 ").unwrap();
        assert_eq!(fields[0].name, "a");
        assert_eq!(fields[1].bits, 2);
    }

    #[test]
    fn test_parse_spec_malformed() {
        for bad in ["sign;1,exponent:8", "a:x", "a:1,,b:2", "a:0", "a:200"] {
            let err = parse_spec(bad).unwrap_err();
            assert!(
                matches!(err, ProbeError::SpecParse { .. }),
                "expected SpecParse for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_decode_float32() {
        let report = decode(
            "sign:1,exponent:8,fraction:23",
            "0xfff1a238",
            &Options::default(),
        )
        .unwrap();
        assert_eq!(report.width, 32);
        // 0xfff1a238 = 11111111111100011010001000111000
        assert_eq!(report.slices[0], "1");
        assert_eq!(report.slices[1], "11111111");
        assert_eq!(report.slices[2], "11100011010001000111000");
        // slices reassemble the original pattern
        assert_eq!(
            report.slices.concat(),
            format!("{:032b}", 0xfff1a238u32)
        );
    }

    #[test]
    fn test_decode_rows() {
        let report = decode("hi:4,lo:4", "0xa5", &Options::default()).unwrap();
        let rows = report.rows();
        assert_eq!(rows[0], ["Bin", "1010", "0101"]);
        assert_eq!(rows[1], ["Dec", "10", "5"]);
        assert_eq!(rows[2], ["Hex", "a", "5"]);
        assert_eq!(report.headers(), ["", "hi [4]", "lo [4]"]);
    }

    #[test]
    fn test_decode_lsb_first() {
        let mut opts = Options::default();
        opts.assign("m", "0").unwrap();
        let report = decode("hi:4,lo:4", "0xa5", &opts).unwrap();
        // 10100101 reversed is 10100101; use an asymmetric value instead
        let report2 = decode("hi:4,lo:4", "0xf0", &opts).unwrap();
        assert_eq!(report2.slices, ["0000", "1111"]);
        assert_eq!(report.slices, ["1010", "0101"]);
    }

    #[test]
    fn test_decode_width_mismatch() {
        let err = decode("a:4,b:4", "0xfff", &Options::default()).unwrap_err();
        match err {
            ProbeError::WidthMismatch {
                spec_bits,
                value_bits,
                token,
            } => {
                assert_eq!(spec_bits, 8);
                assert_eq!(value_bits, 12);
                assert_eq!(token, "0xfff");
            }
            other => panic!("expected WidthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_exact_fit() {
        // 0xfff needs exactly 12 bits
        assert!(decode("a:4,b:8", "0xfff", &Options::default()).is_ok());
    }

    #[test]
    fn test_decode_zero() {
        let report = decode("a:2,b:2", "0", &Options::default()).unwrap();
        assert_eq!(report.slices, ["00", "00"]);
    }

    #[test]
    fn test_decode_rejects_negative() {
        assert!(matches!(
            decode("a:8", "-5", &Options::default()),
            Err(ProbeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_decode_bad_number() {
        assert!(matches!(
            decode("a:8", "0x4az", &Options::default()),
            Err(ProbeError::InvalidInput(_))
        ));
    }
}
