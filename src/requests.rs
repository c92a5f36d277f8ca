/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Request and response payloads.
//!
//! Keys travel as lowercase hex. Requests are checked for shape, hex and length here,
//! before anything is dispatched; curve validation happens in the task.

use serde::{Serialize, Deserialize};
use zeroize::{Zeroize, Zeroizing};

use crate::internal_common::*;
use crate::scan::{MatchResult, OutputRecord, ScanRequest, SpendKeySet};

///Decode a hex key field into exactly `KEY_SIZE` bytes.
pub fn decode_key(hex_str: &str, field: KeyField) -> Result<[u8; KEY_SIZE], ValidationError> {
    let bytes = Zeroizing::new(
        hex::decode(hex_str).map_err(|_| ValidationError::InvalidHex{field})?
    );
    if bytes.len() != KEY_SIZE {
        return Err(ValidationError::InvalidLength {
            field,
            expected: KEY_SIZE,
            actual: bytes.len()
        })
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    return Ok(key)
}

fn parse_json<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, ValidationError> {
    return serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))
}

///One output of a `FindOutputs` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    pub amount: u64,
    pub key: String
}

///`FindOutputs`: scan the outputs of one transaction for a wallet.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOutputsRequest {
    pub transaction_public_key: String,
    pub outputs: Vec<OutputEntry>,
    pub view_secret_key: String,
    ///Duplicates are ignored.
    pub spend_public_keys: Vec<String>

} impl FindOutputsRequest {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        return parse_json(json)
    }

    ///Check hex and lengths of every key, producing the typed scan input.
    pub fn validate(&self) -> Result<ScanRequest, ValidationError> {
        let transaction_public_key = decode_key(&self.transaction_public_key, KeyField::TransactionPublicKey)?;

        let outputs = self.outputs.iter()
            .enumerate()
            .map(|(index, output)| Ok(OutputRecord {
                amount: output.amount,
                key: decode_key(&output.key, KeyField::OutputKey(index))?
            }))
            .collect::<Result<Vec<OutputRecord>, ValidationError>>()?;

        let view_secret_key = Zeroizing::new(decode_key(&self.view_secret_key, KeyField::ViewSecretKey)?);

        let mut spend_keys = SpendKeySet::new();
        for (index, key) in self.spend_public_keys.iter().enumerate() {
            spend_keys.insert(decode_key(key, KeyField::SpendPublicKey(index))?);
        }

        return Ok(ScanRequest {
            transaction_public_key,
            outputs,
            view_secret_key,
            spend_keys
        })
    }

} impl std::fmt::Debug for FindOutputsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindOutputsRequest")
            .field("transaction_public_key", &self.transaction_public_key)
            .field("outputs", &self.outputs)
            .field("spend_public_keys", &self.spend_public_keys)
            .finish_non_exhaustive()
    }
}

///`GenerateAddressFromKeyPair`: the public keys to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub spend_public_key: String,
    pub view_public_key: String

} impl AddressRequest {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        return parse_json(json)
    }

    ///Check hex and lengths, returning the spend and view key bytes.
    pub fn validate(&self) -> Result<([u8; KEY_SIZE], [u8; KEY_SIZE]), ValidationError> {
        return Ok((
            decode_key(&self.spend_public_key, KeyField::AddressSpendKey)?,
            decode_key(&self.view_public_key, KeyField::AddressViewKey)?
        ))
    }
}

///A freshly generated key pair, hex encoded.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPairResponse {
    pub public: String,
    pub secret: String

} impl From<&KeyPair> for KeyPairResponse {
    fn from(pair: &KeyPair) -> Self {
        return Self {
            public: pair.public().to_hex(),
            secret: pair.secret().to_hex()
        }
    }

} impl std::fmt::Debug for KeyPairResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPairResponse")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }

} impl Drop for KeyPairResponse {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

///One matched output, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub index: usize,
    pub amount: u64,
    pub key: String,
    pub spend_public_key: String

} impl From<&MatchResult> for MatchResponse {
    fn from(result: &MatchResult) -> Self {
        return Self {
            index: result.index,
            amount: result.amount,
            key: result.output_key.to_hex(),
            spend_public_key: result.spend_key.to_hex()
        }
    }
}
