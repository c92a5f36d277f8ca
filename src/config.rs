/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{num::NonZeroUsize, thread};

use serde::{Serialize, Deserialize};

use crate::address::Network;
use crate::errors::ConfigError;

///Worker pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    ///Number of worker threads.
    pub workers: usize,
    ///Worker threads are named `{thread_name}-{n}`.
    pub thread_name: String

} impl Default for DispatcherConfig {
    fn default() -> Self {
        return Self {
            workers: thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(4),
            thread_name: "wallet-worker".to_owned()
        }
    }
}

///Top-level configuration. Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub network: Network,
    pub dispatcher: DispatcherConfig

} impl WalletConfig {
    ///Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        return Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatcher.workers == 0 {
            return Err(ConfigError::NoWorkers)
        }
        return Ok(())
    }
}
