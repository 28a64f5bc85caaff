//! Edwards25519 and Ristretto255 group arithmetic.
//!
//! This crate implements the point representations, group law, scalar
//! multiplication and encodings needed to build Ed25519 signatures,
//! X25519 key exchange, or a Ristretto255-based protocol on top — without
//! implementing any of those protocols itself. There is no signing, no
//! verification, no key derivation: just the arithmetic engine.
//!
//! # Layout
//!
//! - [`field`] — the prime-field arithmetic everything else is built on.
//! - [`group`] — the five point representations and the group law.
//! - [`table`] — the precomputed fixed-base multiplication table.
//! - [`encoding`] — canonicity, curve-membership and subgroup checks.
//! - [`ristretto`] — the Ristretto255 encoding.
//! - [`elligator`] — Elligator 2 hash-to-curve.
//! - [`ct`] — the constant-time primitives the rest of the crate is built
//!   from.
//!
//! # Design
//!
//! No heap allocation, no I/O, no dependencies: every operation here is a
//! pure function of its inputs, safe to call concurrently from any number
//! of threads. Operations on secret data (scalar multiplication, point
//! decoding) are constant-time with respect to that data; operations that
//! only ever see public data (double-scalar verification-style products)
//! are intentionally out of scope for this crate, which favors the
//! constant-time path in all cases.

pub mod ct;
pub mod elligator;
pub mod encoding;
pub mod error;
pub mod field;
pub mod group;
pub mod ristretto;
pub mod table;

pub use elligator::{from_hash_ristretto255, from_uniform};
pub use encoding::{
    has_small_order, is_canonical, is_on_curve, is_on_main_subgroup, mul_by_group_order,
};
pub use error::DecodeError;
pub use group::{GeCached, GeP1P1, GeP2, GeP3, GePrecomp};
pub use ristretto::{ristretto_decode, ristretto_encode};

/// `decode`, §6: the fallible Ed25519 byte decode.
pub fn decode(bytes: &[u8; 32]) -> Result<GeP3, DecodeError> {
    GeP3::from_bytes(bytes)
}

/// `encode`, §6: the infallible Ed25519 byte encode.
pub fn encode(p: &GeP3) -> [u8; 32] {
    p.to_bytes()
}

/// `add`, §6: `P3 + Cached -> P1P1`.
pub fn add(p: &GeP3, q: &GeCached) -> GeP1P1 {
    GeP1P1::add(p, q)
}

/// `sub`, §6: `P3 - Cached -> P1P1`.
pub fn sub(p: &GeP3, q: &GeCached) -> GeP1P1 {
    GeP1P1::sub(p, q)
}

/// `madd`, §6: `P3 + Precomp -> P1P1`, mixed addition against an affine
/// table entry.
pub fn madd(p: &GeP3, q: &GePrecomp) -> GeP1P1 {
    GeP1P1::madd(p, q)
}

/// `dbl`, §6: doubling, available from either [`GeP2`] or [`GeP3`].
pub fn dbl(p: &GeP3) -> GeP1P1 {
    p.double()
}

/// `scalar_mult`, §6: constant-time variable-base scalar multiplication.
pub fn scalar_mult(p: &GeP3, scalar: &[u8; 32]) -> GeP3 {
    p.scalar_mul(scalar)
}

/// `scalar_mult_base`, §6: constant-time fixed-base scalar
/// multiplication against the Ed25519 base point.
pub fn scalar_mult_base(scalar: &[u8; 32]) -> GeP3 {
    GeP3::scalar_mul_base(scalar)
}
