// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Ponte-IFC Export
//!
//! Converts an in-memory 3D scene graph of bridge structural elements
//! into an IFC entity graph and serializes it as an exchange file.
//!
//! The pipeline classifies each visible mesh by its display name, derives
//! a rectangular extrusion section and a placement frame from the mesh
//! transform, assembles one product entity per mesh bottom-up, and ties
//! everything into a fixed Project→Site→Building→Storey chain with a
//! single containment relation.
//!
//! ## Quick Start
//!
//! ```
//! use ponte_ifc_export::{export_scene, SceneNode};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let scene = SceneNode::group("scene")
//!     .with_child(SceneNode::mesh("Pila_1", vec![-0.5, -0.5, -0.5, 0.5, 0.5, 0.5]));
//!
//! let bytes = export_scene(&scene).await.unwrap();
//! assert!(String::from_utf8(bytes).unwrap().contains("IFCCOLUMN"));
//! # });
//! ```

pub mod classify;
pub mod error;
pub mod exporter;
pub mod hierarchy;
pub mod product;
pub mod scene;

pub use classify::{classify, ElementClass};
pub use error::{ExportError, Result};
pub use exporter::{
    build_model, export_scene, traversal_root, ExportContext, ExportSummary, OUTPUT_FILE_NAME,
};
pub use hierarchy::{build_geometric_context, build_spatial_chain, SpatialChain};
pub use product::{assemble_product, ProductEntry, COMMON_PSET_NAME};
pub use scene::{Metadata, MeshGeometry, NodeKind, SceneNode, EXTERNAL_ID_KEY};
