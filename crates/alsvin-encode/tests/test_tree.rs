//! Tests for amplitude sum-tree construction.

use alsvin_encode::{AmplitudeTree, FixedPoint};
use proptest::prelude::*;

fn quantize(values: &[f64], width: u32) -> alsvin_encode::QuantizedVector {
    FixedPoint::new(0, width).unwrap().encode_all(values)
}

// ---------------------------------------------------------------------------
// Exact layouts
// ---------------------------------------------------------------------------

#[test]
fn four_leaves_flatten_root_first() {
    // Codes 1, -2, 3, 4 at width 8 → leaves [1, 254, 3, 4].
    // Leaf parents: 1² + 2² = 5 and 3² + 4² = 25; root: 5 + 25 = 30.
    let q = quantize(&[1.0, -2.0, 3.0, 4.0], 8);
    let tree = AmplitudeTree::build(&q);
    assert_eq!(tree.nodes(), &[30, 5, 25, 1, 254, 3, 4, 0]);
    assert_eq!(tree.root(), Some(30));
    assert_eq!(tree.bit_width(), 8);
}

#[test]
fn odd_leaf_count_carries_the_tail_forward() {
    // Leaves [1, 2, 3]: first round pairs (1, 2) → 1² + 2² = 5, the 3 is
    // carried unpaired; second round pairs the new 5 with the head of the
    // carried block → 5 + 1 = 6.
    let q = quantize(&[1.0, 2.0, 3.0], 8);
    let tree = AmplitudeTree::build(&q);
    assert_eq!(tree.nodes(), &[6, 5, 1, 2, 3, 0]);
}

#[test]
fn two_leaves() {
    let q = quantize(&[3.0, -4.0], 8);
    let tree = AmplitudeTree::build(&q);
    assert_eq!(tree.nodes(), &[25, 3, 252, 0]);
    assert_eq!(tree.root(), Some(25));
}

#[test]
fn single_leaf_has_no_pairing() {
    let q = quantize(&[7.0], 8);
    let tree = AmplitudeTree::build(&q);
    assert_eq!(tree.nodes(), &[7, 0]);
    assert_eq!(tree.root(), None);
}

#[test]
fn empty_input_is_just_the_sentinel() {
    let q = quantize(&[], 8);
    let tree = AmplitudeTree::build(&q);
    assert_eq!(tree.nodes(), &[0]);
    assert_eq!(tree.root(), None);
}

// ---------------------------------------------------------------------------
// Wrap semantics
// ---------------------------------------------------------------------------

#[test]
fn leaf_squares_wrap_modulo_64_bits() {
    // Width-64 codes close to 2³²·k make the squared magnitudes overflow;
    // the parents must wrap rather than panic or saturate.
    let fp = FixedPoint::new(0, 64).unwrap();
    let big = 2f64.powi(40);
    let q = fp.encode_all(&[big, big]);
    let tree = AmplitudeTree::build(&q);

    let code = 1u64 << 40;
    let square = code.wrapping_mul(code); // 2⁸⁰ mod 2⁶⁴
    assert_eq!(tree.root(), Some(square.wrapping_add(square)));
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

/// Number of nodes the flattened tree must hold for `n` leaves: every
/// level retains its elements, plus the sentinel.
fn expected_len(mut n: usize) -> usize {
    let mut total = n;
    while n > 1 {
        total += n / 2;
        n = n.div_ceil(2);
    }
    total + 1
}

proptest! {
    #[test]
    fn length_matches_level_sum(values in prop::collection::vec(-100.0f64..100.0, 0..40)) {
        let q = quantize(&values, 16);
        let tree = AmplitudeTree::build(&q);
        prop_assert_eq!(tree.len(), expected_len(values.len()));
        prop_assert_eq!(*tree.nodes().last().unwrap(), 0);
    }

    #[test]
    fn leaves_survive_verbatim(values in prop::collection::vec(-100.0f64..100.0, 1..40)) {
        let q = quantize(&values, 16);
        let tree = AmplitudeTree::build(&q);
        let n = values.len();
        let tail = &tree.nodes()[tree.len() - 1 - n..tree.len() - 1];
        prop_assert_eq!(tail, q.codes());
    }

    #[test]
    fn leaf_parents_sum_squared_magnitudes(values in prop::collection::vec(-100.0f64..100.0, 2..40)) {
        let fp = FixedPoint::new(0, 16).unwrap();
        let q = fp.encode_all(&values);
        let tree = AmplitudeTree::build(&q);
        let n = values.len();
        let parents = n / 2;
        // Leaf parents sit immediately before the leaf block.
        let start = tree.len() - 1 - n - parents;
        for (k, parent) in tree.nodes()[start..start + parents].iter().enumerate() {
            let l = fp.magnitude(q.codes()[2 * k]);
            let r = fp.magnitude(q.codes()[2 * k + 1]);
            prop_assert_eq!(*parent, l * l + r * r);
        }
    }
}
