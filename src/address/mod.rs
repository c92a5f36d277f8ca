/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CryptoNote public wallet addresses.
//!
//! An address is `base58(varint(prefix) || spend || view || checksum)`,
//! where the checksum is the first 4 bytes of the Keccak-256 hash of everything before it.

pub mod base58;

use std::fmt::Display;

use serde::{Serialize, Deserialize};

use crate::internal_common::*;

///Number of checksum bytes appended to the address data.
pub const CHECKSUM_SIZE: usize = 4;

///Network parameters relevant to addresses.
///
///The presets are Monero's prefixes. A coin with its own prefix uses `Network::new`
///or sets `address_prefix` in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    ///Base58 address prefix, varint-encoded at the start of every address.
    pub address_prefix: u64

} impl Network {
    pub const MAINNET: Network = Network{address_prefix: 18};
    pub const TESTNET: Network = Network{address_prefix: 53};
    pub const STAGENET: Network = Network{address_prefix: 24};

    pub const fn new(address_prefix: u64) -> Self {
        return Self{address_prefix}
    }

} impl Default for Network {
    fn default() -> Self {
        return Self::MAINNET
    }
}

///An encoded public wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(
    String

); impl WalletAddress {
    pub fn as_str(&self) -> &str {
        return &self.0
    }

    ///Decode this address back into its spend and view public keys.
    pub fn decode(&self, prefix: u64) -> Result<(PublicKey, PublicKey), AddressError> {
        return decode(&self.0, prefix)
    }

} impl Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }

} impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        return address.0
    }
}

///Encode a spend and view public key into an address with the given network prefix.
pub fn encode(spend: &PublicKey, view: &PublicKey, prefix: u64) -> WalletAddress {
    let mut data = varint::encode(prefix);
    data.extend_from_slice(spend.as_bytes());
    data.extend_from_slice(view.as_bytes());
    let checksum = h_bytes(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_SIZE]);

    return WalletAddress(base58::encode(&data))
}

///Decode an address into its spend and view public keys.
///
///Fails if the string is not valid base58, the checksum does not match,
///the prefix differs from `prefix`, or either key is not a valid point.
pub fn decode(address: &str, prefix: u64) -> Result<(PublicKey, PublicKey), AddressError> {
    let data = base58::decode(address)?;
    if data.len() < CHECKSUM_SIZE {
        return Err(AddressError::InvalidLength)
    }

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_SIZE);
    if h_bytes(body)[..CHECKSUM_SIZE] != *checksum {
        return Err(AddressError::InvalidChecksum)
    }

    let (found, prefix_len) = varint::decode(body).ok_or(AddressError::InvalidLength)?;
    if found != prefix {
        return Err(AddressError::PrefixMismatch{expected: prefix, found})
    }

    let keys = &body[prefix_len..];
    if keys.len() != 2 * KEY_SIZE {
        return Err(AddressError::InvalidLength)
    }
    let mut spend = [0u8; KEY_SIZE];
    let mut view = [0u8; KEY_SIZE];
    spend.copy_from_slice(&keys[..KEY_SIZE]);
    view.copy_from_slice(&keys[KEY_SIZE..]);

    return Ok((
        PublicKey::decode(&spend, KeyField::AddressSpendKey)?,
        PublicKey::decode(&view, KeyField::AddressViewKey)?
    ))
}
