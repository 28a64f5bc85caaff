//! The fixed-base precomputed table, §4.7.
//!
//! A 32x8 table of affine triples `(y+x, y-x, 2dxy)`, where row `i` column
//! `k` holds `(k+1) * 16^(2i) * B` for the Ed25519 base point `B`. Fixed-base
//! scalar multiplication ([`GeP3::scalar_mul_base`](crate::group::GeP3::scalar_mul_base))
//! consumes this table two nibbles at a time instead of doubling 252 times.
//!
//! Rather than embed ~24 KB of hex literals that nobody reading this source
//! could audit by eye, the table is derived once per process from the
//! group law itself: the base point is the unique point with `y = 4/5` and
//! an even `x` (DJB's definition of the Ed25519 generator), and every
//! other entry follows from doubling and addition. [`self_test`] rederives
//! a handful of entries independently and checks every entry against the
//! curve equation, which is the closest runtime equivalent of "regenerate
//! and compare" for a table that was never checked in as data.

use std::sync::OnceLock;

use crate::field::FieldElement as Fe;
use crate::group::{GeCached, GeP1P1, GeP3, GePrecomp};

/// The canonical Ed25519 base point: `y = 4/5`, `x` even.
pub fn base_point() -> GeP3 {
    let y = Fe([4, 0, 0, 0, 0, 0, 0, 0, 0, 0]) * Fe([5, 0, 0, 0, 0, 0, 0, 0, 0, 0]).invert();
    // `y`'s canonical encoding never sets bit 7 of byte 31 (y < p < 2^255),
    // so this is exactly the sign-0 encoding `GeP3::from_bytes` expects.
    GeP3::from_bytes(&y.to_bytes()).expect("base point y = 4/5 decodes")
}

type Row = [GePrecomp; 8];
type Table = [Row; 32];

static TABLE: OnceLock<Box<Table>> = OnceLock::new();

pub(crate) fn base_table() -> &'static Table {
    TABLE.get_or_init(|| Box::new(generate())).as_ref()
}

fn generate() -> Table {
    let mut table = [[GePrecomp::IDENTITY; 8]; 32];
    let mut row_base = base_point();

    for row in table.iter_mut() {
        let mut multiple = row_base;
        row[0] = GePrecomp::from_p3(&multiple);

        let cached_step = GeCached::from_p3(&row_base);
        for entry in row.iter_mut().skip(1) {
            multiple = GeP3::from_p1p1(&GeP1P1::add(&multiple, &cached_step));
            *entry = GePrecomp::from_p3(&multiple);
        }

        // 16^2 = 256 = 2^8: eight doublings to reach the next row's base.
        let mut p3 = row_base;
        for _ in 0..8 {
            p3 = GeP3::from_p1p1(&p3.double());
        }
        row_base = p3;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_equation_holds(p: &GePrecomp) -> bool {
        let two_inv = Fe([2, 0, 0, 0, 0, 0, 0, 0, 0, 0]).invert();
        let x = (p.yplusx - p.yminusx) * two_inv;
        let y = (p.yplusx + p.yminusx) * two_inv;

        let x2 = x.square();
        let y2 = y.square();
        let lhs = y2 - x2;
        let rhs = Fe::ONE + crate::group::D * x2 * y2;
        crate::ct::fe_eq(&lhs, &rhs) && crate::ct::fe_eq(&p.xy2d, &(crate::group::D2 * x * y))
    }

    #[test]
    fn every_entry_is_on_curve() {
        let table = base_table();
        for row in table.iter() {
            for entry in row.iter() {
                assert!(curve_equation_holds(entry));
            }
        }
    }

    #[test]
    fn first_column_is_base_point_multiples() {
        let table = base_table();
        let b = base_point();

        assert_eq!(GePrecomp::from_p3(&b).xy2d.to_bytes(), table[0][0].xy2d.to_bytes());

        let two_b = GeP3::from_p1p1(&b.double());
        assert_eq!(
            GePrecomp::from_p3(&two_b).xy2d.to_bytes(),
            table[0][1].xy2d.to_bytes()
        );
    }
}
