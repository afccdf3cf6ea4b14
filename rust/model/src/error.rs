// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or persisting the entity graph
#[derive(Error, Debug)]
pub enum Error {
    #[error("entity #{referenced} is not finalized (next instance number is #{next})")]
    UnresolvedReference { referenced: u32, next: u32 },

    #[error("engine initialization failed: {0}")]
    Init(String),
}
