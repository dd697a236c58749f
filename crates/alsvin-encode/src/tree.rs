//! Flattened binary sum-trees for amplitude initialization.
//!
//! QRAM-style state preparation needs, for every address prefix, the total
//! probability mass under that prefix, without rescanning the leaves. The
//! builder reduces a quantized vector bottom-up: adjacent leaf pairs
//! combine into the sum of their squared decoded magnitudes, and every
//! level above sums raw stored values. Each round of parents is prepended
//! to everything accumulated so far, so the flattened result reads
//! root-level first and original codes last, terminated by a single zero
//! sentinel.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixed::{QuantizedVector, magnitude};

/// A complete binary reduction tree, flattened with the newest (root-most)
/// nodes first and the original codes last before the zero sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmplitudeTree {
    nodes: Vec<u64>,
    bit_width: u32,
}

impl AmplitudeTree {
    /// Build the tree bottom-up from a quantized vector.
    ///
    /// All arithmetic wraps modulo 2^64, matching the modular register
    /// semantics of the codes themselves. An odd trailing element at any
    /// level is carried forward unpaired and pairs up one level higher.
    pub fn build(codes: &QuantizedVector) -> Self {
        let leaf_count = codes.len();
        let width = codes.bit_width();
        let mut level: Vec<u64> = codes.codes().to_vec();
        let mut pair_count = leaf_count;

        while pair_count > 1 {
            let mut next = Vec::with_capacity(level.len() + pair_count / 2);
            let mut i = 0;
            while i + 1 < pair_count {
                let parent = if pair_count == leaf_count {
                    // Leaf level: decoded magnitudes, squared and summed.
                    let l = magnitude(level[i], width);
                    let r = magnitude(level[i + 1], width);
                    l.wrapping_mul(l).wrapping_add(r.wrapping_mul(r))
                } else {
                    level[i].wrapping_add(level[i + 1])
                };
                next.push(parent);
                i += 2;
            }
            // The whole previous array rides along behind the new parents,
            // unpaired tail element included.
            next.extend_from_slice(&level);
            level = next;
            pair_count = pair_count.div_ceil(2);
        }

        level.push(0); // sentinel
        debug!(
            leaves = leaf_count,
            nodes = level.len(),
            "built amplitude tree"
        );
        Self {
            nodes: level,
            bit_width: width,
        }
    }

    /// The flattened node sequence, sentinel included.
    pub fn nodes(&self) -> &[u64] {
        &self.nodes
    }

    /// Storage width of the leaf codes.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// The root-level accumulation: total squared mass of all leaves.
    ///
    /// `None` for a tree built from fewer than two codes, where no pairing
    /// ever happened.
    pub fn root(&self) -> Option<u64> {
        // Two trailing entries means a lone code plus the sentinel.
        if self.nodes.len() > 2 {
            Some(self.nodes[0])
        } else {
            None
        }
    }

    /// Total number of flattened nodes, sentinel included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True only for a tree of nothing at all (never produced by `build`,
    /// which always appends the sentinel).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
