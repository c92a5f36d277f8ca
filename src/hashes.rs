/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha3::{
    Keccak256,
    Digest
};
use crate::curve::*;

///Hash bytes to bytes with Keccak-256 (the original padding, not SHA3-256).
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(msg);
    return hasher.finalize().into()
}

///Hash bytes to scalar.
///
///The digest is reduced modulo the group order, like CryptoNote's `sc_reduce32`.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(h_bytes(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_empty_input() {
        assert_eq!(
            hex::encode(h_bytes(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn scalar_is_reduced() {
        let scalar = h_scalar(b"cryptonote");
        assert_eq!(Scalar::from_canonical_bytes(scalar.to_bytes()), Some(scalar));
    }
}
