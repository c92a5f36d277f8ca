/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The wallet operations.
//!
//! Cheap operations run on the caller's thread. Wallet creation and output scanning
//! are validated on the caller's thread, then run on the dispatcher; their outcome
//! is reported exactly once, either to a completion handler or through a `TaskHandle`.

use std::{
    path::PathBuf,
    sync::Arc
};

use tracing::debug;
use zeroize::Zeroizing;

use crate::internal_common::*;
use crate::address::{self, Network, WalletAddress};
use crate::config::WalletConfig;
use crate::container::WalletContainer;
use crate::dispatch::{TaskDispatcher, TaskHandle};
use crate::random::{OsScalarSource, ScalarSource};
use crate::requests::{AddressRequest, FindOutputsRequest, KeyPairResponse};
use crate::scan::{MatchResult, ScanRequest};

type CreateTask = Box<dyn FnOnce() -> Result<(), TaskError> + Send + 'static>;

///Wallet operations over a shared worker pool.
pub struct WalletService {
    config: WalletConfig,
    dispatcher: TaskDispatcher,
    random: Arc<dyn ScalarSource>,
    container: Arc<dyn WalletContainer>

} impl WalletService {
    ///Start a service drawing keys from the operating system's random source.
    pub fn new(config: WalletConfig, container: Arc<dyn WalletContainer>) -> Result<Self, WalletError> {
        return Self::with_scalar_source(config, container, Arc::new(OsScalarSource))
    }

    ///Start a service drawing keys from `random`.
    pub fn with_scalar_source(
        config: WalletConfig,
        container: Arc<dyn WalletContainer>,
        random: Arc<dyn ScalarSource>
    ) -> Result<Self, WalletError> {
        config.validate()?;
        let dispatcher = TaskDispatcher::new(&config.dispatcher)?;
        debug!(workers = dispatcher.workers(), prefix = config.network.address_prefix, "wallet service started");

        return Ok(Self {
            config,
            dispatcher,
            random,
            container
        })
    }

    pub fn config(&self) -> &WalletConfig {
        return &self.config
    }

    pub fn network(&self) -> &Network {
        return &self.config.network
    }

    ///`CreateWallet`: generate new account keys and store them in a container at `path`.
    ///
    ///An empty path is rejected here. Container failures are reported to `on_complete`.
    pub fn create_wallet<C>(&self, path: impl Into<PathBuf>, password: &str, on_complete: C) -> Result<(), WalletError>
    where
        C: FnOnce(Result<(), TaskError>) + Send + 'static,
    {
        let task = self.create_wallet_task(path.into(), password)?;
        self.dispatcher.submit(task, on_complete)?;
        return Ok(())
    }

    ///`CreateWallet`, delivering the outcome through a handle.
    pub fn create_wallet_handle(&self, path: impl Into<PathBuf>, password: &str) -> Result<TaskHandle<()>, WalletError> {
        let task = self.create_wallet_task(path.into(), password)?;
        return Ok(self.dispatcher.spawn(task)?)
    }

    fn create_wallet_task(&self, path: PathBuf, password: &str) -> Result<CreateTask, ValidationError> {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::MissingField("path"))
        }

        let password = Zeroizing::new(password.to_owned());
        let random = self.random.clone();
        let container = self.container.clone();
        let network = self.config.network;

        return Ok(Box::new(move || -> Result<(), TaskError> {
            let keys = AccountKeys::generate(random.as_ref());
            container.create(&path, &password, &keys)?;
            debug!(path = %path.display(), address = %keys.address(&network), "wallet created");
            return Ok(())
        }))
    }

    ///`GenerateNewKeyPair`: a fresh random key pair, hex encoded.
    pub fn generate_new_key_pair(&self) -> KeyPairResponse {
        return KeyPairResponse::from(&self.generate_key_pair())
    }

    ///A fresh random key pair.
    pub fn generate_key_pair(&self) -> KeyPair {
        return KeyPair::generate(self.random.as_ref())
    }

    ///`GenerateAddressFromKeyPair`: the address of a spend and view public key on the configured network.
    ///
    ///Both keys must be 32 bytes and valid curve points.
    pub fn generate_address_from_key_pair(&self, request: &AddressRequest) -> Result<WalletAddress, WalletError> {
        let (spend, view) = request.validate()?;
        let spend = PublicKey::decode(&spend, KeyField::AddressSpendKey)?;
        let view = PublicKey::decode(&view, KeyField::AddressViewKey)?;
        return Ok(address::encode(&spend, &view, self.config.network.address_prefix))
    }

    ///`FindOutputs`: scan a transaction's outputs for the request's spend keys.
    ///
    ///Hex and length errors are returned here and nothing is dispatched.
    ///Invalid curve points are reported to `on_complete`, as is the list of matches.
    pub fn find_outputs<C>(&self, request: &FindOutputsRequest, on_complete: C) -> Result<(), WalletError>
    where
        C: FnOnce(Result<Vec<MatchResult>, TaskError>) + Send + 'static,
    {
        let scan = request.validate()?;
        debug!(outputs = scan.outputs.len(), spend_keys = scan.spend_keys.len(), "queueing output scan");
        self.dispatcher.submit(scan_task(scan), on_complete)?;
        return Ok(())
    }

    ///`FindOutputs`, delivering the outcome through a handle.
    pub fn find_outputs_handle(&self, request: &FindOutputsRequest) -> Result<TaskHandle<Vec<MatchResult>>, WalletError> {
        let scan = request.validate()?;
        return Ok(self.dispatcher.spawn(scan_task(scan))?)
    }

    ///Stop accepting requests and wait for queued ones to complete.
    pub fn shutdown(&mut self) {
        self.dispatcher.shutdown();
    }
}

fn scan_task(scan: ScanRequest) -> impl FnOnce() -> Result<Vec<MatchResult>, TaskError> + Send + 'static {
    return move || scan.execute().map_err(TaskError::from)
}
