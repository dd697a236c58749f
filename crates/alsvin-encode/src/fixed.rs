//! Fixed-point quantization with two's-complement wrap.
//!
//! Real values are scaled by `2^exponent`, rounded to the nearest integer
//! with ties going to the even neighbour, and reduced modulo
//! `2^bit_width`. Negative values land in the upper half of the code
//! range, two's-complement style. Overflow wraps silently and by design:
//! the downstream tree arithmetic operates modulo the register width, so
//! saturating here would corrupt it.

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};

/// A fixed-point format: binary scale factor plus storage width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPoint {
    exponent: i32,
    bit_width: u32,
}

impl FixedPoint {
    /// Create a format with the given scale exponent and bit width.
    ///
    /// The width must lie in `1..=64`; 64 is the untruncated wrap.
    pub fn new(exponent: i32, bit_width: u32) -> EncodeResult<Self> {
        if bit_width == 0 || bit_width > 64 {
            return Err(EncodeError::InvalidBitWidth(bit_width));
        }
        Ok(Self {
            exponent,
            bit_width,
        })
    }

    /// The binary scale exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The storage width in bits.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    fn mask(&self) -> u64 {
        if self.bit_width == 64 {
            u64::MAX
        } else {
            (1u64 << self.bit_width) - 1
        }
    }

    /// Encode one value: scale by `2^exponent`, round (ties to even),
    /// wrap into the storage width.
    ///
    /// No range check: a value outside the representable range wraps
    /// modulo `2^bit_width`. One caveat at the extreme: the intermediate
    /// signed cast clamps scaled magnitudes at ±2⁶³ before the wrap, so
    /// only widths near 64 with astronomically large inputs can observe
    /// the clamp instead of a pure modular reduction.
    pub fn encode(&self, value: f64) -> u64 {
        let scaled = (value * 2f64.powi(self.exponent)).round_ties_even() as i64;
        (scaled as u64) & self.mask()
    }

    /// Encode a slice, tagging the result with this format.
    pub fn encode_all(&self, values: &[f64]) -> QuantizedVector {
        QuantizedVector {
            codes: values.iter().map(|&v| self.encode(v)).collect(),
            scale_exponent: self.exponent,
            bit_width: self.bit_width,
        }
    }

    /// Reinterpret a code as a signed value of this width and return its
    /// absolute value.
    ///
    /// Only the magnitude survives this direction; the tree builder needs
    /// nothing more.
    pub fn magnitude(&self, code: u64) -> u64 {
        magnitude(code, self.bit_width)
    }
}

/// Two's-complement magnitude of `code` within `bit_width` bits.
///
/// `bit_width` must lie in `1..=64`, the same domain [`FixedPoint::new`]
/// enforces; anything else has no meaningful sign bit.
pub fn magnitude(code: u64, bit_width: u32) -> u64 {
    debug_assert!(
        (1..=64).contains(&bit_width),
        "bit width {bit_width} outside 1..=64"
    );
    let shift = 64 - bit_width;
    let signed = ((code << shift) as i64) >> shift;
    signed.unsigned_abs()
}

/// A sequence of wrapped fixed-point codes tagged with its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizedVector {
    codes: Vec<u64>,
    scale_exponent: i32,
    bit_width: u32,
}

impl QuantizedVector {
    /// The stored codes.
    pub fn codes(&self) -> &[u64] {
        &self.codes
    }

    /// The scale exponent the codes were produced with.
    pub fn scale_exponent(&self) -> i32 {
        self.scale_exponent
    }

    /// The storage width the codes were wrapped into.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if there are no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
