// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Ponte-IFC Model
//!
//! Append-only IFC entity graph with STEP (ISO 10303-21) serialization.
//!
//! The model is a write-once arena: every [`StepModel::insert`] finalizes
//! one entity and returns its instance id, and attributes may only
//! reference entities finalized earlier. That single rule makes the graph
//! constructible strictly bottom-up, which is what the exchange format
//! requires: no record may point at a later instance number.
//!
//! ## Quick Start
//!
//! ```
//! use ponte_ifc_model::{Attribute, IfcClass, StepModel};
//!
//! let mut model = StepModel::new("ponte_generato");
//! let origin = model
//!     .insert(IfcClass::CartesianPoint, vec![Attribute::reals([0.0, 0.0, 0.0])])
//!     .unwrap();
//! let placement = model
//!     .insert(
//!         IfcClass::Axis2Placement3D,
//!         vec![Attribute::Ref(origin), Attribute::Null, Attribute::Null],
//!     )
//!     .unwrap();
//! assert_eq!(placement.as_u32(), 2);
//!
//! let bytes = model.save();
//! assert!(String::from_utf8(bytes).unwrap().contains("IFCCARTESIANPOINT"));
//! ```

pub mod class;
pub mod engine;
pub mod entity;
pub mod error;
pub mod guid;
pub mod model;

pub use class::IfcClass;
pub use engine::StepEngine;
pub use entity::{Attribute, EntityId};
pub use error::{Error, Result};
pub use guid::new_global_id;
pub use model::StepModel;
