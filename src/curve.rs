/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    edwards::{
        EdwardsPoint,
        CompressedEdwardsY,
        EdwardsBasepointTable
    },
    traits::IsIdentity
};

///Size in bytes of an encoded scalar or compressed curve point.
pub const KEY_SIZE: usize = 32;

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &EdwardsBasepointTable = &constants::ED25519_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: EdwardsPoint = constants::ED25519_BASEPOINT_POINT;

///Encode a point to its canonical compressed bytes.
pub fn encode_point(point: &EdwardsPoint) -> [u8; KEY_SIZE] {
    return point.compress().to_bytes()
}

///Reduce 64 uniformly random bytes to a scalar.
///
///The wide reduction keeps the result uniformly distributed modulo the group order.
pub fn scalar_from_wide(bytes: &[u8; 64]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basepoint_table_matches_point() {
        let scalar = Scalar::from(7u64);
        assert_eq!(&scalar * G, scalar * G_POINT);
    }

    #[test]
    fn encoded_basepoint() {
        assert_eq!(
            hex::encode(encode_point(&G_POINT)),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
    }
}
