/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! [Elliptic Curve Diffie Hellman (ECDH)](https://en.wikipedia.org/wiki/Elliptic-curve_Diffie%E2%80%93Hellman) key derivations.

use zeroize::Zeroize;

use crate::internal_common::*;

///Shared secret between a transaction key `R = r*G` and a view key `A = a*G`.
///
///The sender computes it as `8*r*A`, the recipient as `8*a*R`.
///Multiplying by the cofactor keeps the result in the prime-order subgroup.
///
///**This should not be publically shared.**
#[derive(Clone, PartialEq, Eq)]
pub struct DerivationSecret(
    [u8; KEY_SIZE]

); impl DerivationSecret {
    fn from_point(point: &EdwardsPoint) -> Self {
        return Self(point.mul_by_cofactor().compress().to_bytes())
    }

    ///The recipient's side: view secret key `a` and transaction public key `R`.
    pub fn from_receiver(view_secret: &SecretKey, transaction_public: &PublicKey) -> Self {
        return Self::from_point(&(view_secret.as_scalar() * transaction_public.point()))
    }

    ///The sender's side: transaction secret key `r` and the recipient's view public key `A`.
    pub fn from_sender(transaction_secret: &SecretKey, view_public: &PublicKey) -> Self {
        return Self::from_point(&(transaction_secret.as_scalar() * view_public.point()))
    }

    ///`Hs(D || varint(index))`, the scalar binding this secret to one output.
    pub fn to_scalar(&self, index: u64) -> Scalar {
        let mut msg = self.0.to_vec();
        msg.extend(varint::encode(index));
        let scalar = h_scalar(&msg);
        msg.zeroize();
        return scalar
    }

    ///The one-time public key of output `index` paid to `spend`: `Hs(D || index)*G + B`.
    pub fn output_public_key(&self, index: u64, spend: &PublicKey) -> PublicKey {
        return PublicKey::from_point(&self.to_scalar(index) * G + spend.point())
    }

    ///The one-time secret key of output `index`: `Hs(D || index) + b`.
    pub fn output_secret_key(&self, index: u64, spend_secret: &SecretKey) -> SecretKey {
        return SecretKey::from_scalar(self.to_scalar(index) + spend_secret.as_scalar())
    }

} impl Zeroize for DerivationSecret {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }

} impl Drop for DerivationSecret {
    fn drop(&mut self) {
        self.zeroize()
    }

} impl std::fmt::Debug for DerivationSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivationSecret(..)")
    }
}
