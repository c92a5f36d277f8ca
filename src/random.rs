/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sources of secret scalars.

use std::sync::Mutex;

use rand::{
    rngs::{OsRng, StdRng},
    RngCore,
    SeedableRng
};
use zeroize::Zeroize;

use crate::curve::*;

///Provides uniformly random scalars for key generation.
///
///Implementations are shared between worker threads.
pub trait ScalarSource: Send + Sync {
    ///Return the next random scalar.
    fn next_scalar(&self) -> Scalar;
}

///Scalars drawn from the operating system's secure random source.
///
///A failing OS random source panics; inside a dispatched task this surfaces as a fatal error.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsScalarSource;

impl ScalarSource for OsScalarSource {
    fn next_scalar(&self) -> Scalar {
        let mut bytes = [0u8; 64];
        OsRng.fill_bytes(&mut bytes);
        let scalar = scalar_from_wide(&bytes);
        bytes.zeroize();
        return scalar
    }
}

///Deterministic scalars from a seeded generator.
///
///Only for tests and reproducible tooling: anyone who knows the seed knows every key.
#[derive(Debug)]
pub struct SeededScalarSource {
    rng: Mutex<StdRng>
}

impl SeededScalarSource {
    pub fn new(seed: u64) -> Self {
        return Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed))
        }
    }
}

impl ScalarSource for SeededScalarSource {
    fn next_scalar(&self) -> Scalar {
        let mut bytes = [0u8; 64];
        self.rng.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .fill_bytes(&mut bytes);
        let scalar = scalar_from_wide(&bytes);
        bytes.zeroize();
        return scalar
    }
}
