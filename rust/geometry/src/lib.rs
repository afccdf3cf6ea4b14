// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Ponte-IFC Geometry
//!
//! Derivation of extrusion sections and placement frames from scene
//! transforms, using [nalgebra](https://docs.rs/nalgebra) for the math.
//!
//! The derivations are pure and infallible by design: degenerate geometry
//! yields degenerate (but legal) values, and malformed orientations
//! propagate unchanged; validating host input is not this crate's job.

pub mod bounds;
pub mod placement;
pub mod section;
pub mod types;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, UnitQuaternion, Vector3};

pub use bounds::Extent;
pub use placement::PlacementFrame;
pub use section::{extrusion_direction, RectSection};
pub use types::{Quat, Vec3};
