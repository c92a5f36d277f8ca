/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Wallet cryptography for CryptoNote-style coins: key generation, address encoding,
//! and detection of the transaction outputs which belong to a wallet.


//internal modules
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod hashes;
pub mod varint;
pub mod random;


//"normal" public modules
pub mod errors;
pub mod curve;
pub mod keys;

pub mod address;
pub mod scan;

pub mod config;
pub mod dispatch;
pub mod container;
pub mod requests;
pub mod wallet;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, keys, to/from bytes, and elliptic curve primitives/functions are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need,
    //! and is intended for use in tests, benches, tooling, etc.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        keys::*, errors::*, tobytes::*, curve::*
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.
    //!
    //! Use `internal_common::*` if you wish to automatically import everything.

    pub use crate::{
        common::*, hashes::*, varint
    };
}
