//! Ristretto255 encoding, decoding and hashing, §4.4/§4.5.
//!
//! Ristretto wraps the cofactor-8 Edwards curve in a prime-order group by
//! picking one canonical representative out of each coset of the
//! order-8 subgroup and defining encode/decode so that every Edwards point
//! in a coset serializes identically. The arithmetic here never appears in
//! [`crate::group`]: every operation works in terms of that module's
//! `P3`/`Cached`/`P1P1` types and the curve constants it exports.

use std::sync::OnceLock;

use crate::field::FieldElement as Fe;
use crate::group::{GeP3, D, SQRTM1};

/// `1/sqrt(a - d)` with `a = -1`, i.e. `1/sqrt(-1 - d)`.
const INVSQRT_A_MINUS_D: Fe = Fe([
    6111485, 4156064, -27798727, 12243468, -25904040, 120897, 20826367, -7060776, 6093568,
    -1986012,
]);

/// `sqrt((a*d) - 1)` with `a = -1`, i.e. `sqrt(-d - 1)`, used by the
/// Ristretto-flavored Elligator map. Derived from `D` at first use rather
/// than embedded as a hex literal — `D` already has to be trusted, and this
/// is just its square root times a fixed sign.
fn sqrt_ad_minus_one() -> Fe {
    static V: OnceLock<Fe> = OnceLock::new();
    *V.get_or_init(|| sqrt_ratio_i(&(-D - Fe::ONE), &Fe::ONE).1)
}

/// `1 - d^2`, used by the Ristretto-flavored Elligator map.
fn one_minus_d_sq() -> Fe {
    static V: OnceLock<Fe> = OnceLock::new();
    *V.get_or_init(|| Fe::ONE - D.square())
}

/// `(d - 1)^2`, used by the Ristretto-flavored Elligator map.
fn d_minus_one_sq() -> Fe {
    static V: OnceLock<Fe> = OnceLock::new();
    *V.get_or_init(|| (D - Fe::ONE).square())
}

/// `sqrt_ratio_i(u, v)`: the Ristretto255 variable-time-free square-root
/// helper. Returns `(was_square, r)` where `r^2 = u/v` if `u/v` is a
/// square, or `r^2 = i*u/v` otherwise, always returning the
/// non-negative root.
///
/// Built on [`FieldElement::pow22523`](crate::field::FieldElement), the
/// same `(p-5)/8` addition chain the Edwards decoder in
/// [`crate::group::GeP3::from_bytes`] uses — Ristretto decode needs
/// exactly the same kind of conditional square root, just with the extra
/// sign bookkeeping the Ristretto spec calls for.
pub(crate) fn sqrt_ratio_i(u: &Fe, v: &Fe) -> (bool, Fe) {
    let v3 = v.square() * *v;
    let v7 = v3.square() * *v;
    let mut r = (*u * v3) * (*u * v7).pow22523();

    let check = *v * r.square();
    let u_neg = -*u;
    let correct_sign = crate::ct::fe_eq(&check, u);
    let flipped_sign = crate::ct::fe_eq(&check, &u_neg);
    let flipped_sign_i = crate::ct::fe_eq(&check, &(u_neg * SQRTM1));

    let r_prime = r * SQRTM1;
    r.conditional_move(&r_prime, (flipped_sign || flipped_sign_i) as u32);

    let r_is_negative = r.is_negative() != 0;
    let neg_r = -r;
    r.conditional_move(&neg_r, r_is_negative as u32);

    (correct_sign || flipped_sign, r)
}

/// `ristretto_encode`, §4.4: canonicalizes the coset representative so
/// that every Edwards point equivalent under the order-8 subgroup
/// produces the same 32 bytes.
pub fn ristretto_encode(p: &GeP3) -> [u8; 32] {
    let mut x = p.x;
    let mut y = p.y;

    let u1 = (p.z + y) * (p.z - y);
    let u2 = x * y;
    let (_, invsqrt) = sqrt_ratio_i(&Fe::ONE, &(u1 * u2.square()));

    let i1 = invsqrt * u1;
    let i2 = invsqrt * u2;
    let z_inv = i1 * (i2 * p.t);
    let mut den_inv = i2;

    let ix = x * SQRTM1;
    let iy = y * SQRTM1;
    let enchanted_denominator = i1 * INVSQRT_A_MINUS_D;

    let rotate = (p.t * z_inv).is_negative() as u32;
    x.conditional_move(&iy, rotate);
    y.conditional_move(&ix, rotate);
    den_inv.conditional_move(&enchanted_denominator, rotate);

    let y_neg = -y;
    y.conditional_move(&y_neg, (x * z_inv).is_negative() as u32);

    let mut s = den_inv * (p.z - y);
    let s_neg = -s;
    s.conditional_move(&s_neg, s.is_negative() as u32);

    s.to_bytes()
}

/// `ristretto_decode`, §4.4: returns `None` for non-canonical encodings,
/// non-square candidates, or representations whose sign disagrees with
/// the canonical form.
pub fn ristretto_decode(bytes: &[u8; 32]) -> Option<GeP3> {
    // `is_canonical` ignores bit 7 of byte 31 (Edwards uses it as a sign
    // bit); Ristretto has no sign bit, so that bit contributing to the
    // integer value must be checked here instead.
    if !crate::encoding::is_canonical(bytes) || bytes[31] & 0x80 != 0 {
        return None;
    }

    let s = Fe::from_bytes(bytes);
    if s.is_negative() != 0 {
        return None;
    }

    let s2 = s.square();
    let u1 = Fe::ONE - s2;
    let u2 = Fe::ONE + s2;
    let u2_sqr = u2.square();

    let v = u1.square() * (-D) - u2_sqr;

    let (was_square, invsqrt) = sqrt_ratio_i(&Fe::ONE, &(v * u2_sqr));

    let den_x = invsqrt * u2;
    let den_y = invsqrt * den_x * v;

    let mut x = (s + s) * den_x;
    let x_neg = -x;
    x.conditional_move(&x_neg, x.is_negative() as u32);

    let y = u1 * den_y;
    let t = x * y;

    if !was_square || t.is_negative() != 0 || y.is_non_zero() == 0 {
        return None;
    }

    Some(GeP3 {
        x,
        y,
        z: Fe::ONE,
        t,
    })
}

/// The Elligator 2 map restricted to the Ristretto coset structure: maps
/// one field element to a point on the curve, used twice by
/// [`crate::elligator::from_hash_ristretto255`].
pub(crate) fn ristretto_elligator(r0: &Fe) -> GeP3 {
    let one = Fe::ONE;
    let r = SQRTM1 * r0.square();
    let ns = (r + one) * one_minus_d_sq();
    let c = -one;
    let d = (c - D * r) * (r + D);

    let (was_square, mut s) = sqrt_ratio_i(&ns, &d);
    let s_prime = -(s * *r0).ct_abs();
    s.conditional_move(&s_prime, (!was_square) as u32);
    let mut c = c;
    c.conditional_move(&r, (!was_square) as u32);

    let n = c * (r - one) * d_minus_one_sq() - d;
    let s2 = s.square();

    let w0 = (s + s) * d;
    let w1 = n * sqrt_ad_minus_one();
    let w2 = one - s2;
    let w3 = one + s2;

    // W0..W3 are already extended coordinates (X, Y, Z, T), not a P1P1
    // intermediate: unlike the group-law formulas, this map produces them
    // directly, so no further P1P1 -> P3 conversion is applied here.
    GeP3 {
        x: w0 * w3,
        y: w2 * w1,
        z: w1 * w3,
        t: w0 * w2,
    }
}

impl Fe {
    /// The field element's absolute value: `self` if its canonical
    /// representative is even, `-self` otherwise.
    fn ct_abs(self) -> Fe {
        let neg = -self;
        let mut out = self;
        out.conditional_move(&neg, out.is_negative() as u32);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_encodes_to_the_known_test_vector() {
        let b = crate::table::base_point();
        assert_eq!(
            ristretto_encode(&b),
            [
                0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00,
                0x51, 0x5f, 0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45,
                0xe0, 0x8d, 0x2d, 0x76,
            ]
        );
    }

    #[test]
    fn encode_decode_roundtrips() {
        let b = crate::table::base_point();
        let encoded = ristretto_encode(&b);
        let decoded = ristretto_decode(&encoded).expect("canonical encoding decodes");
        assert!(crate::encoding::is_on_curve(&decoded));
        assert_eq!(ristretto_encode(&decoded), encoded);
    }

    #[test]
    fn decode_rejects_non_canonical_encoding() {
        assert!(ristretto_decode(&[0xffu8; 32]).is_none());
    }

    #[test]
    fn decode_rejects_negative_s() {
        // `s`'s own canonical encoding with bit 7 forced on fails the
        // negative-field-element check before any curve arithmetic runs.
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        bytes[31] = 0x80;
        assert!(ristretto_decode(&bytes).is_none());
    }

    #[test]
    fn elligator_lands_on_curve_for_several_inputs() {
        for seed in [1u8, 2, 3, 42, 255] {
            let r0 = Fe::from_bytes(&[seed; 32]);
            let p = ristretto_elligator(&r0);
            assert!(crate::encoding::is_on_curve(&p));
        }
    }
}
