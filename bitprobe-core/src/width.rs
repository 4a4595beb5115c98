//! Width policy: explicit width, or inference from input magnitude.

use tracing::debug;

use crate::bits::ceil_log2;
use crate::error::{ProbeError, Result};

/// The active-width setting for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Infer from the first computed input(s).
    Auto,
    /// Explicit width in bits (1..=[`crate::bits::MAX_WIDTH`]).
    Bits(u32),
}

impl Width {
    /// Resolve the effective width for this invocation: an explicit width
    /// is used unchanged, otherwise the maximum of each candidate's
    /// minimal-bit requirement, clamped to at least 1 bit.
    ///
    /// Inference is only defined for positive magnitudes; a zero or
    /// negative candidate in auto mode is an error rather than a log of a
    /// non-positive number.
    pub fn resolve(self, candidates: &[i128]) -> Result<u32> {
        match self {
            Width::Bits(bits) => Ok(bits),
            Width::Auto => {
                let mut width = 1;
                for &v in candidates {
                    if v <= 0 {
                        return Err(ProbeError::WidthInference(v));
                    }
                    width = width.max(ceil_log2(v));
                }
                debug!(width, ?candidates, "inferred active width");
                Ok(width)
            }
        }
    }
}
