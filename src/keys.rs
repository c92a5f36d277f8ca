/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Key material: secret scalars, public curve points, and the pairs linking them.

use std::{
    fmt,
    hash::{Hash, Hasher}
};

use serde::{Serialize, Deserialize};
use zeroize::Zeroize;

use crate::curve::*;
use crate::errors::{InvalidKeyError, KeyField};
use crate::random::ScalarSource;
use crate::address::{self, Network, WalletAddress};

///A public key: a validated point on the curve.
///
///The encoded bytes the key was decoded from are kept,
///so that comparisons against other encoded keys are bit-for-bit.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct PublicKey {
    compressed: CompressedEdwardsY,
    point: EdwardsPoint

} impl PublicKey {
    ///Decode a public key, rejecting bytes which are not a curve point, are not
    ///the canonical encoding of their point, or are the identity.
    pub fn decode(bytes: &[u8; KEY_SIZE], field: KeyField) -> Result<Self, InvalidKeyError> {
        let compressed = CompressedEdwardsY(*bytes);
        let point = compressed.decompress()
            .ok_or(InvalidKeyError::NotOnCurve(field))?;
        //y >= p, or x = 0 with the sign bit set
        if point.compress() != compressed {
            return Err(InvalidKeyError::NonCanonicalPoint(field))
        }
        if point.is_identity() {
            return Err(InvalidKeyError::Identity(field))
        }
        return Ok(Self{compressed, point})
    }

    ///Wrap a point computed locally.
    pub fn from_point(point: EdwardsPoint) -> Self {
        return Self{compressed: point.compress(), point}
    }

    ///The elliptic curve point of this key.
    pub fn point(&self) -> &EdwardsPoint {
        return &self.point
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        return self.compressed.as_bytes()
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.as_bytes())
    }

} impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        return self.compressed == other.compressed
    }

} impl Eq for PublicKey {}
impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }

} impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }

} impl TryFrom<[u8; KEY_SIZE]> for PublicKey {
    type Error = InvalidKeyError;

    fn try_from(bytes: [u8; KEY_SIZE]) -> Result<Self, Self::Error> {
        return Self::decode(&bytes, KeyField::Encoded)
    }

} impl From<PublicKey> for [u8; KEY_SIZE] {
    fn from(key: PublicKey) -> Self {
        return key.compressed.to_bytes()
    }
}


///A secret key: a scalar in canonical reduced form.
///
///The scalar is wiped from memory when the key is dropped, and is never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct SecretKey(
    Scalar

); impl SecretKey {
    ///Decode a secret key, rejecting bytes which are not a canonical scalar.
    pub fn decode(bytes: &[u8; KEY_SIZE], field: KeyField) -> Result<Self, InvalidKeyError> {
        return match Scalar::from_canonical_bytes(*bytes) {
            Some(scalar) => Ok(Self(scalar)),
            None => Err(InvalidKeyError::NonCanonicalScalar(field))
        }
    }

    pub fn from_scalar(scalar: Scalar) -> Self {
        return Self(scalar)
    }

    pub fn as_scalar(&self) -> &Scalar {
        return &self.0
    }

    ///Compute the matching public key, `secret * G`.
    pub fn to_public(&self) -> PublicKey {
        return PublicKey::from_point(&self.0 * G)
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        return self.0.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.0.as_bytes())
    }

} impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }

} impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize()
    }

} impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }

} impl TryFrom<[u8; KEY_SIZE]> for SecretKey {
    type Error = InvalidKeyError;

    fn try_from(bytes: [u8; KEY_SIZE]) -> Result<Self, Self::Error> {
        return Self::decode(&bytes, KeyField::Encoded)
    }

} impl From<SecretKey> for [u8; KEY_SIZE] {
    fn from(key: SecretKey) -> Self {
        return key.to_bytes()
    }
}


///A secret key together with its public key, `public = secret * G`.
///
///Serializes as the secret key only; the public key is recomputed on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SecretKey", into = "SecretKey")]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey

} impl KeyPair {
    ///Generate a new key pair from a random scalar.
    pub fn generate(source: &dyn ScalarSource) -> Self {
        return Self::from_secret(SecretKey::from_scalar(source.next_scalar()))
    }

    ///Build the key pair belonging to a secret key.
    pub fn from_secret(secret: SecretKey) -> Self {
        let public = secret.to_public();
        return Self{secret, public}
    }

    pub fn secret(&self) -> &SecretKey {
        return &self.secret
    }

    pub fn public(&self) -> &PublicKey {
        return &self.public
    }

} impl From<SecretKey> for KeyPair {
    fn from(secret: SecretKey) -> Self {
        return Self::from_secret(secret)
    }

} impl From<KeyPair> for SecretKey {
    fn from(pair: KeyPair) -> Self {
        return pair.secret.clone()
    }
}


///The spend and view key pairs of a wallet account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKeys {
    pub spend: KeyPair,
    pub view: KeyPair

} impl AccountKeys {
    ///Generate independent random spend and view keys.
    pub fn generate(source: &dyn ScalarSource) -> Self {
        return Self {
            spend: KeyPair::generate(source),
            view: KeyPair::generate(source)
        }
    }

    ///The public address of this account on the given network.
    pub fn address(&self, network: &Network) -> WalletAddress {
        return address::encode(self.spend.public(), self.view.public(), network.address_prefix)
    }
}
