/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Stealth address detection: finding the outputs of a transaction which belong to a wallet.
//!
//! For a transaction public key `R`, view secret key `a` and spend public key `B`,
//! output `i` with one-time key `P` belongs to `B` iff `P == Hs(8aR || i)*G + B`.

mod derivation;

use std::collections::HashSet;

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::internal_common::*;

pub use derivation::DerivationSecret;

///A candidate transaction output.
///
///The key is kept as raw bytes until the scan validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    ///Amount in the coin's smallest unit.
    pub amount: u64,
    ///Encoded one-time public key.
    pub key: [u8; KEY_SIZE]
}

///A set of encoded spend public keys.
///
///Duplicates are dropped on insertion. Iteration follows insertion order,
///but callers building the set from an unordered source should not rely on it.
#[derive(Debug, Clone, Default)]
pub struct SpendKeySet {
    keys: Vec<[u8; KEY_SIZE]>,
    seen: HashSet<[u8; KEY_SIZE]>

} impl SpendKeySet {
    pub fn new() -> Self {
        return Self::default()
    }

    ///Adds a key, returning `false` if it was already present.
    pub fn insert(&mut self, key: [u8; KEY_SIZE]) -> bool {
        if !self.seen.insert(key) {
            return false
        }
        self.keys.push(key);
        return true
    }

    pub fn len(&self) -> usize {
        return self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; KEY_SIZE]> {
        return self.keys.iter()
    }

    pub fn contains(&self, key: &[u8; KEY_SIZE]) -> bool {
        return self.seen.contains(key)
    }

} impl FromIterator<[u8; KEY_SIZE]> for SpendKeySet {
    fn from_iter<I: IntoIterator<Item = [u8; KEY_SIZE]>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        return set
    }
}

///An output found to belong to one of the scanned spend keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    ///Position of the output within the scanned transaction.
    pub index: usize,
    pub amount: u64,
    pub output_key: PublicKey,
    ///The spend public key the output was sent to.
    pub spend_key: PublicKey
}

///Everything needed to scan one transaction, before any curve validation.
#[derive(Clone)]
pub struct ScanRequest {
    pub transaction_public_key: [u8; KEY_SIZE],
    pub outputs: Vec<OutputRecord>,
    pub view_secret_key: Zeroizing<[u8; KEY_SIZE]>,
    pub spend_keys: SpendKeySet

} impl ScanRequest {
    ///Validate every key of the request, then scan.
    ///
    ///All keys are checked before any derivation, so an invalid key anywhere
    ///fails the whole request and no partial result is produced.
    ///Besides malformed and identity keys, a transaction key of small order is
    ///rejected with `InvalidKeyError::SmallOrder`, since its cofactor-cleared
    ///derivation would be the identity.
    pub fn execute(&self) -> Result<Vec<MatchResult>, InvalidKeyError> {
        let transaction_public = PublicKey::decode(
            &self.transaction_public_key, KeyField::TransactionPublicKey)?;
        if transaction_public.point().is_small_order() {
            return Err(InvalidKeyError::SmallOrder(KeyField::TransactionPublicKey))
        }
        let view_secret = SecretKey::decode(&self.view_secret_key, KeyField::ViewSecretKey)?;

        for (index, output) in self.outputs.iter().enumerate() {
            PublicKey::decode(&output.key, KeyField::OutputKey(index))?;
        }
        let spend_keys = self.spend_keys.iter()
            .enumerate()
            .map(|(index, key)| PublicKey::decode(key, KeyField::SpendPublicKey(index)))
            .collect::<Result<Vec<PublicKey>, InvalidKeyError>>()?;

        return Ok(scan(&transaction_public, &self.outputs, &view_secret, &spend_keys))
    }

} impl std::fmt::Debug for ScanRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanRequest")
            .field("transaction_public_key", &hex::encode(self.transaction_public_key))
            .field("outputs", &self.outputs.len())
            .field("spend_keys", &self.spend_keys.len())
            .finish_non_exhaustive()
    }
}

///Find the outputs sent to any of `spend_keys`.
///
///Matches are returned in output order. If one output matches several spend keys,
///every match is reported; well-formed data never does this.
pub fn scan(
    transaction_public: &PublicKey,
    outputs: &[OutputRecord],
    view_secret: &SecretKey,
    spend_keys: &[PublicKey]
) -> Vec<MatchResult> {
    let mut matches = Vec::new();
    if outputs.is_empty() || spend_keys.is_empty() {
        return matches
    }

    let derivation = DerivationSecret::from_receiver(view_secret, transaction_public);
    for (index, output) in outputs.iter().enumerate() {
        //Hs(D || i)*G is shared by every spend key
        let shared = &derivation.to_scalar(index as u64) * G;
        let before = matches.len();

        for spend_key in spend_keys {
            let candidate = PublicKey::from_point(shared + spend_key.point());
            if *candidate.as_bytes() == output.key {
                matches.push(MatchResult {
                    index,
                    amount: output.amount,
                    output_key: candidate,
                    spend_key: *spend_key
                });
            }
        }

        if matches.len() - before > 1 {
            warn!(output = index, matches = matches.len() - before, "output matched more than one spend key");
        }
    }

    debug!(outputs = outputs.len(), spend_keys = spend_keys.len(), matches = matches.len(), "scanned transaction outputs");
    return matches
}

///Recover the one-time secret key of a matched output, `Hs(8aR || index) + b`.
pub fn recover_output_secret(
    transaction_public: &PublicKey,
    view_secret: &SecretKey,
    spend_secret: &SecretKey,
    index: usize
) -> SecretKey {
    return DerivationSecret::from_receiver(view_secret, transaction_public)
        .output_secret_key(index as u64, spend_secret)
}
