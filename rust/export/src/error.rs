// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur during an export pass
///
/// There is no retry and no partial-export recovery: the first error
/// aborts the pass, and entities already persisted stay in the discarded
/// graph. A classification miss is not an error (it falls back to a
/// generic proxy).
#[derive(Error, Debug)]
pub enum ExportError {
    /// The engine failed to initialize; fatal before any entity creation.
    #[error("engine initialization failed: {0}")]
    Init(String),

    /// A mesh's geometry or metadata access behaved unexpectedly. Aborts
    /// that mesh's assembly mid-way; sibling entities persisted earlier
    /// for the same mesh remain unreferenced in the graph.
    #[error("malformed scene input: {0}")]
    MalformedInput(String),

    /// Entity-graph failure bubbled up from the model layer.
    #[error("model error: {0}")]
    Model(#[from] ponte_ifc_model::Error),
}
