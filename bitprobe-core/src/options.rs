//! # Per-Invocation Options
//!
//! One `Options` value is built per CLI run from `key=value` tokens and
//! passed into every computation; there is no ambient global state. Each
//! option has a short and a long alias, matching the CLI surface:
//!
//! | keys | meaning | default |
//! |---|---|---|
//! | `n`, `n_bits` | active width in bits, `-1` = auto | auto |
//! | `w`, `word_size` | shift amount for the word-shift rows | 4 |
//! | `o`, `overflow` | show negative values as two's-complement patterns | on |
//! | `f`, `format` | table style | `fancy_grid` |
//! | `m`, `msbfirst` | most significant bit first in bit-field slicing | on |

use tracing::debug;

use crate::bits::MAX_WIDTH;
use crate::error::{ProbeError, Result};
use crate::width::Width;

/// Table rendering style (named after the tabulate styles the original
/// format option accepted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    #[default]
    FancyGrid,
    Grid,
    Simple,
    Plain,
}

impl TableStyle {
    pub const NAMES: [&'static str; 4] = ["fancy_grid", "grid", "simple", "plain"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fancy_grid" => Some(TableStyle::FancyGrid),
            "grid" => Some(TableStyle::Grid),
            "simple" => Some(TableStyle::Simple),
            "plain" => Some(TableStyle::Plain),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TableStyle::FancyGrid => "fancy_grid",
            TableStyle::Grid => "grid",
            TableStyle::Simple => "simple",
            TableStyle::Plain => "plain",
        }
    }
}

/// Options for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub width: Width,
    pub word_size: u32,
    pub overflow: bool,
    pub style: TableStyle,
    pub msb_first: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            width: Width::Auto,
            word_size: 4,
            overflow: true,
            style: TableStyle::FancyGrid,
            msb_first: true,
        }
    }
}

impl Options {
    /// Apply one `key=value` assignment.
    pub fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        debug!(key, value, "option assignment");
        match key {
            "n" | "n_bits" => {
                let bits: i64 = parse_value(key, value, "expected an integer")?;
                self.width = match bits {
                    -1 => Width::Auto,
                    b if (1..=MAX_WIDTH as i64).contains(&b) => Width::Bits(b as u32),
                    _ => {
                        return Err(ProbeError::InvalidOptionValue {
                            key: key.to_string(),
                            value: value.to_string(),
                            reason: format!("width must be -1 (auto) or 1..={}", MAX_WIDTH),
                        })
                    }
                };
            }
            "w" | "word_size" => {
                self.word_size = parse_value(key, value, "expected a non-negative integer")?;
            }
            "o" | "overflow" => {
                self.overflow = parse_flag(key, value)?;
            }
            "f" | "format" => {
                self.style = TableStyle::from_name(value).ok_or_else(|| {
                    ProbeError::InvalidOptionValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        reason: format!("known styles: {}", TableStyle::NAMES.join(", ")),
                    }
                })?;
            }
            "m" | "msbfirst" => {
                self.msb_first = parse_flag(key, value)?;
            }
            _ => {
                return Err(ProbeError::UnknownOption {
                    key: key.to_string(),
                    info: Options::info().to_string(),
                })
            }
        }
        Ok(())
    }

    /// One line per option for help output and unknown-key errors.
    pub fn info() -> &'static str {
        concat!(
            "\t(n, n_bits) -> Number of bits (-1 = auto)\n",
            "\t(w, word_size) -> Word size\n",
            "\t(o, overflow) -> Whether to overflow negative numbers\n",
            "\t(f, format) -> Table format (fancy_grid, grid, simple, plain)\n",
            "\t(m, msbfirst) -> Whether to put the most significant bit first in a bitstring",
        )
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, reason: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ProbeError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
}

/// Truthy parse: `true`/`false` or any integer, zero meaning false.
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => {
            let n: i64 = parse_value(key, value, "expected true/false or an integer")?;
            Ok(n != 0)
        }
    }
}
