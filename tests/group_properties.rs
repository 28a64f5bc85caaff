//! End-to-end checks of the algebraic properties the arithmetic engine
//! must satisfy, exercised entirely through the crate's public API.
//!
//! `add`/`sub`/`madd`/`dbl` return the `P1P1` intermediate form and have
//! no public conversion back to `P3` — composing them further is only
//! ever done inside the crate, where the group-law tests in `src/group.rs`
//! already cover doubling and addition directly. This file sticks to the
//! operations a downstream caller actually has: the codecs, the
//! membership checks and the two scalar-multiplication entry points.

use edwards25519::{
    decode, encode, has_small_order, is_canonical, is_on_curve, is_on_main_subgroup, scalar_mult,
    scalar_mult_base, table,
};

fn scalar(bytes: [u8; 4]) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[..4].copy_from_slice(&bytes);
    s
}

#[test]
fn decode_then_encode_roundtrips_the_base_point() {
    let b = table::base_point();
    let bytes = encode(&b);
    assert!(is_canonical(&bytes));

    let decoded = decode(&bytes).expect("base point decodes");
    assert_eq!(encode(&decoded), bytes);
}

#[test]
fn decoded_points_satisfy_the_curve_equation() {
    let b = table::base_point();
    let decoded = decode(&encode(&b)).unwrap();
    assert!(is_on_curve(&decoded));
}

#[test]
fn scalar_mult_by_zero_is_the_identity() {
    let b = table::base_point();
    let identity = scalar_mult(&b, &[0u8; 32]);
    assert!(has_small_order(&encode(&identity)));
}

#[test]
fn scalar_mult_by_one_is_a_no_op() {
    let b = table::base_point();
    let same = scalar_mult(&b, &scalar([1, 0, 0, 0]));
    assert_eq!(encode(&same), encode(&b));
}

#[test]
fn fixed_base_and_variable_base_scalar_mult_agree() {
    let s = scalar([123, 45, 6, 78]);
    let b = table::base_point();

    let via_table = scalar_mult_base(&s);
    let via_window = scalar_mult(&b, &s);

    assert_eq!(encode(&via_table), encode(&via_window));
}

#[test]
fn different_scalars_produce_different_points() {
    let a = scalar_mult_base(&scalar([5, 0, 0, 0]));
    let b = scalar_mult_base(&scalar([6, 0, 0, 0]));
    assert_ne!(encode(&a), encode(&b));
}

#[test]
fn base_point_generates_the_main_subgroup() {
    let b = table::base_point();
    assert!(is_on_main_subgroup(&b));
    assert!(!has_small_order(&encode(&b)));
}

#[test]
fn is_canonical_rejects_an_out_of_range_encoding() {
    assert!(!is_canonical(&[0xffu8; 32]));
}

#[test]
fn decode_rejects_a_y_with_no_curve_point() {
    // Small sequential y values: roughly half of them have no x solving
    // the curve equation, so the first failure shows up quickly.
    let found_an_invalid_one = (2u64..64).any(|y| {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&y.to_le_bytes());
        decode(&bytes).is_err()
    });
    assert!(found_an_invalid_one);
}

#[test]
fn ristretto_round_trips_and_rejects_bad_input() {
    let b = table::base_point();
    let encoded = edwards25519::ristretto_encode(&b);
    let decoded = edwards25519::ristretto_decode(&encoded).expect("canonical point decodes");
    assert_eq!(edwards25519::ristretto_encode(&decoded), encoded);

    assert!(edwards25519::ristretto_decode(&[0xffu8; 32]).is_none());
}

#[test]
fn hash_to_group_functions_are_deterministic_and_on_curve() {
    let uniform_bytes = [9u8; 32];
    let p = edwards25519::from_uniform(&uniform_bytes);
    assert!(is_on_curve(&p));
    assert!(is_on_main_subgroup(&p));
    assert_eq!(
        encode(&p),
        encode(&edwards25519::from_uniform(&uniform_bytes))
    );

    let wide_bytes = [9u8; 64];
    let q = edwards25519::from_hash_ristretto255(&wide_bytes);
    assert!(is_on_curve(&q));
}

#[test]
fn mul_by_group_order_is_exported_at_the_crate_root() {
    let b = table::base_point();
    let r = edwards25519::mul_by_group_order(&b);
    assert!(is_on_curve(&r));
}
