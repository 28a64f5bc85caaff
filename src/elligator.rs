//! Hash-to-curve, §4.5: Elligator 2 for the Edwards curve, and the
//! Ristretto255-flavored map used to build a hash-to-group function out
//! of 64 bytes of hash output.

use crate::field::FieldElement as Fe;
use crate::group::{GeP1P1, GeP3};
use crate::ristretto::sqrt_ratio_i;

/// `A = 486662`, the Montgomery-form curve coefficient: `v^2 = u^3 + A*u^2 + u`.
const MONTGOMERY_A: Fe = Fe([486662, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// `sqrt(-(A+2))`, the constant the Montgomery-to-Edwards birational map
/// scales `u/v` by to produce the Edwards `x` coordinate.
const SQRT_MINUS_A_MINUS_2: Fe = Fe([
    -12222970, -8312128, -11511410, 9067497, -15300785, -241793, 25456130, 14121551, -12187136,
    3972024,
]);

/// The fixed non-square `Z = 2` the Elligator 2 map scales `r^2` by.
const Z: Fe = Fe([2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// Elligator 2, mapping a field element `r` to a Montgomery `(u, v)` pair
/// on the curve, following RFC 9380 §6.7.1's `map_to_curve_elligator2`
/// specialized to `B = 1`.
fn elligator2(r: &Fe) -> (Fe, Fe) {
    let one = Fe::ONE;
    let minus_one = -one;

    let mut tv1 = Z * r.square();
    let e1 = crate::ct::fe_eq(&tv1, &minus_one);
    tv1.conditional_move(&Fe::ZERO, e1 as u32);

    let x1 = -MONTGOMERY_A * (one + tv1).invert();

    let mut gx1 = x1 + MONTGOMERY_A;
    gx1 = gx1 * x1;
    gx1 = gx1 + one;
    gx1 = gx1 * x1;

    let x2 = -x1 - MONTGOMERY_A;
    let gx2 = tv1 * gx1;

    let (e2, _) = sqrt_ratio_i(&gx1, &one);

    let mut x = x2;
    x.conditional_move(&x1, e2 as u32);
    let mut y2 = gx2;
    y2.conditional_move(&gx1, e2 as u32);

    let (_, mut y) = sqrt_ratio_i(&y2, &one);
    let e3 = y.is_negative() != 0;
    let neg_y = -y;
    y.conditional_move(&neg_y, (e2 != e3) as u32);

    (x, y)
}

/// Birational map from Montgomery `(u, v)` to twisted-Edwards `(x, y)`.
fn montgomery_to_edwards(u: &Fe, v: &Fe) -> GeP3 {
    let y = (*u - Fe::ONE) * (*u + Fe::ONE).invert();
    let x = SQRT_MINUS_A_MINUS_2 * *u * v.invert();
    let t = x * y;
    GeP3 {
        x,
        y,
        z: Fe::ONE,
        t,
    }
}

/// Multiplies by the cofactor 8 via three doublings, lifting a point that
/// may sit in any coset of the order-8 subgroup into the prime-order
/// subgroup.
fn clear_cofactor(p: &GeP3) -> GeP3 {
    let mut r = p.double();
    for _ in 0..2 {
        r = GeP3::from_p1p1(&r).double();
    }
    GeP3::from_p1p1(&r)
}

/// `from_uniform`, §4.5: interprets `bytes` as a field element, maps it
/// onto the curve via Elligator 2, and clears the cofactor.
pub fn from_uniform(bytes: &[u8; 32]) -> GeP3 {
    let r = Fe::from_bytes(bytes);
    let (u, v) = elligator2(&r);
    clear_cofactor(&montgomery_to_edwards(&u, &v))
}

/// `from_hash_ristretto255`, §4.5: splits 64 bytes into two field
/// elements, maps each with the Ristretto-specific one-way map
/// ([`crate::ristretto::ristretto_elligator`]), and adds the results.
pub fn from_hash_ristretto255(bytes: &[u8; 64]) -> GeP3 {
    let mut half = [0u8; 32];
    half.copy_from_slice(&bytes[0..32]);
    let r1 = Fe::from_bytes(&half);
    half.copy_from_slice(&bytes[32..64]);
    let r2 = Fe::from_bytes(&half);

    let p1 = crate::ristretto::ristretto_elligator(&r1);
    let p2 = crate::ristretto::ristretto_elligator(&r2);

    let cached = crate::group::GeCached::from_p3(&p2);
    GeP3::from_p1p1(&GeP1P1::add(&p1, &cached))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding;

    #[test]
    fn from_uniform_lands_on_curve_and_main_subgroup() {
        let bytes = [7u8; 32];
        let p = from_uniform(&bytes);
        assert!(encoding::is_on_curve(&p));
        assert!(encoding::is_on_main_subgroup(&p));
    }

    #[test]
    fn from_hash_ristretto255_lands_on_curve() {
        let bytes = [3u8; 64];
        let p = from_hash_ristretto255(&bytes);
        assert!(encoding::is_on_curve(&p));
    }

    #[test]
    fn from_uniform_is_deterministic() {
        let bytes = [42u8; 32];
        assert_eq!(
            from_uniform(&bytes).to_bytes(),
            from_uniform(&bytes).to_bytes()
        );
    }

    #[test]
    fn from_uniform_varies_with_input() {
        let a = from_uniform(&[1u8; 32]).to_bytes();
        let b = from_uniform(&[2u8; 32]).to_bytes();
        assert_ne!(a, b);
    }
}
