/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Wallet containers hold an account's keys under a path and password.
//!
//! The on-disk format and its encryption belong to the container implementation,
//! not to this crate.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex
};

use crate::errors::ContainerError;
use crate::keys::AccountKeys;

///Stores newly created wallets.
pub trait WalletContainer: Send + Sync {
    ///Create a container at `path` holding `keys`, protected by `password`.
    ///
    ///Must fail rather than overwrite an existing container.
    fn create(&self, path: &Path, password: &str, keys: &AccountKeys) -> Result<(), ContainerError>;
}

///A container that keeps accounts in memory.
///
///Nothing is persisted and the password is not used; useful for tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    accounts: Mutex<HashMap<PathBuf, AccountKeys>>

} impl MemoryContainer {
    pub fn new() -> Self {
        return Self::default()
    }

    ///The account created at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<AccountKeys> {
        return self.accounts.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .cloned()
    }

    pub fn len(&self) -> usize {
        return self.accounts.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0
    }

} impl WalletContainer for MemoryContainer {
    fn create(&self, path: &Path, _password: &str, keys: &AccountKeys) -> Result<(), ContainerError> {
        let mut accounts = self.accounts.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if accounts.contains_key(path) {
            return Err(ContainerError::AlreadyExists(path.to_path_buf()))
        }
        accounts.insert(path.to_path_buf(), keys.clone());
        return Ok(())
    }
}
