//! # bitprobe core
//!
//! Bit-level inspection of one or two integers at a terminal: fixed-width
//! one's/two's complements, popcount, Hamming distance, derived pair
//! values and bit-field decomposition.
//!
//! ## Key pieces
//! - [`Num`]: a concrete `i128` or the contagious undefined marker
//! - [`bits`]: the fixed-width arithmetic engine
//! - [`Width`]: explicit or magnitude-inferred active width
//! - [`Options`]: the per-invocation configuration, built from `key=value`
//!   CLI tokens
//! - [`analyze`]: the single/pair derived-value row sets
//! - [`bitfield`]: `name:width` spec parsing and slicing
//!
//! Everything is pure and synchronous; one invocation builds one report
//! and drops it after printing.

pub mod analyze;
pub mod bitfield;
pub mod bits;
pub mod error;
pub mod num;
pub mod options;
pub mod value;
pub mod width;

pub use analyze::{analyze_one, analyze_two, check_arity, Report};
pub use bitfield::{decode, parse_spec, BitfieldReport, Field};
pub use bits::MAX_WIDTH;
pub use error::{ProbeError, Result};
pub use num::Num;
pub use options::{Options, TableStyle};
pub use value::NamedValue;
pub use width::Width;
