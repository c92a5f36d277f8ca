/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use serde::{
    Serialize,
    Deserialize,
};
pub use crate::errors::SerializationError;

#[cfg(feature = "to_bytes")]
use crate::{
    keys::{PublicKey, SecretKey, KeyPair, AccountKeys},
    scan::{OutputRecord, MatchResult}
};

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`) bytes
///for the key and scan types of this crate.
///
///Keys are written as their fixed 32 byte encodings, so a `KeyPair` is 32 bytes
///and `AccountKeys` are 64 bytes (spend secret, then view secret).
///Public keys are validated again when read back.
#[cfg(feature = "to_bytes")]
pub trait ToBytes<'a>: Sized + Serialize + Deserialize<'a> {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return match bincode::serialize(self) {
            Ok(bytes) => Ok(bytes),
            Err(_) => Err(SerializationError::EncodingError)
        }
    }

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, SerializationError> {
        return match bincode::deserialize(bytes) {
            Ok(value) => Ok(value),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for PublicKey {}
#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for SecretKey {}
#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for KeyPair {}
#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for AccountKeys {}
#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for OutputRecord {}
#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for MatchResult {}
