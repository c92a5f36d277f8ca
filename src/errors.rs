/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt::Display,
    io,
    path::PathBuf
};
use thiserror::Error;

///Identifies which key of a request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    TransactionPublicKey,
    ///The one-time key of the output at this position.
    OutputKey(usize),
    ViewSecretKey,
    ///The spend public key at this position of the request.
    SpendPublicKey(usize),
    AddressSpendKey,
    AddressViewKey,
    ///A key decoded from serialized bytes, with no request context.
    Encoded

} impl Display for KeyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::TransactionPublicKey => write!(f, "transaction public key"),
            Self::OutputKey(index) => write!(f, "key of output {}", index),
            Self::ViewSecretKey => write!(f, "view secret key"),
            Self::SpendPublicKey(index) => write!(f, "spend public key {}", index),
            Self::AddressSpendKey => write!(f, "spend public key"),
            Self::AddressViewKey => write!(f, "view public key"),
            Self::Encoded => write!(f, "encoded key")
        }
    }
}

///Request validation errors.
///
///These are detected before any work is dispatched and are reported synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    ///The field is not valid hexadecimal.
    #[error("{field} is not valid hex.")]
    InvalidHex { field: KeyField },
    ///The field decoded to the wrong number of bytes.
    #[error("{field} has invalid length: expected {expected} bytes, got {actual}.")]
    InvalidLength { field: KeyField, expected: usize, actual: usize },
    ///A required field is missing or empty.
    #[error("Missing required field: {0}.")]
    MissingField(&'static str),
    ///The payload could not be parsed into a request.
    #[error("Malformed request: {0}")]
    Malformed(String)
}

///Cryptographic input errors.
///
///The bytes have the right length but do not describe a usable key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    ///The bytes do not decode to a point on the curve.
    #[error("{0} is not a valid curve point.")]
    NotOnCurve(KeyField),
    ///The bytes decode to a point, but are not its canonical encoding.
    #[error("{0} is not a canonical point encoding.")]
    NonCanonicalPoint(KeyField),
    ///The point is the identity element.
    #[error("{0} is the identity point.")]
    Identity(KeyField),
    ///The point has small order, so any shared secret derived from it is trivial.
    #[error("{0} has small order.")]
    SmallOrder(KeyField),
    ///The bytes are not a canonical scalar.
    #[error("{0} is not a canonical scalar.")]
    NonCanonicalScalar(KeyField)
}

///Wallet address decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    ///A character outside of the base58 alphabet, or an impossible block length.
    #[error("Address is not valid base58.")]
    InvalidBase58,
    ///The decoded address has the wrong length.
    #[error("Address has invalid length.")]
    InvalidLength,
    ///The embedded checksum does not match the address contents.
    #[error("Address checksum mismatch.")]
    InvalidChecksum,
    ///The address belongs to another network.
    #[error("Address prefix {found} does not match expected prefix {expected}.")]
    PrefixMismatch { expected: u64, found: u64 },
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError)
}

///Errors reported by a wallet container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("A wallet container already exists at {0}.")]
    AlreadyExists(PathBuf),
    #[error("Wallet container storage failed: {0}")]
    Storage(String)
}

///The error outcome of a dispatched task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),
    #[error(transparent)]
    Container(#[from] ContainerError),
    ///Unrecoverable failure inside the task, such as a panic or an entropy failure.
    #[error("Fatal task error: {0}")]
    Fatal(String)
}

///Task dispatcher errors
#[derive(Debug, Error)]
pub enum DispatchError {
    ///A worker thread could not be started.
    #[error("Failed to spawn worker thread: {0}")]
    ThreadSpawnFailed(#[source] io::Error),
    ///The dispatcher no longer accepts tasks.
    #[error("The task dispatcher has been shut down.")]
    ShutDown
}

///Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Dispatcher must have at least one worker.")]
    NoWorkers,
    #[error("Malformed configuration: {0}")]
    Malformed(String)
}

///Errors returned synchronously by the wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Config(#[from] ConfigError)
}

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError
}
