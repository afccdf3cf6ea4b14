// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backend-neutral engine facade
//!
//! The exporter talks to the entity store through this facade:
//! [`StepEngine::init`] once, then [`StepEngine::create_model`] per export
//! pass. Initialization is the single asynchronous step of the whole
//! pipeline and must complete before any entity is created; backends that
//! load schema resources or external runtimes suspend here. The built-in
//! STEP backend is ready immediately but keeps the same surface.

use crate::error::Result;
use crate::model::StepModel;

/// Handle to an initialized entity-store backend.
#[derive(Debug)]
pub struct StepEngine {
    _private: (),
}

impl StepEngine {
    /// Initializes the backend. Await this exactly once, before creating
    /// any model; every later call is synchronous.
    pub async fn init() -> Result<Self> {
        Ok(Self { _private: () })
    }

    /// Opens a fresh, empty model. The caller owns the handle for the
    /// whole export pass and is expected to close it exactly once.
    pub fn create_model(&self, name: impl Into<String>) -> StepModel {
        StepModel::new(name)
    }
}
