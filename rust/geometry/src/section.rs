// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular extrusion sections derived from bounding extents
//!
//! The section convention is fixed, not inferred from the geometry: the
//! local X/Z plane carries the rectangular cross-section and local +Y is
//! the extrusion axis. A box of scaled size (sx, sy, sz) therefore becomes
//! a `sx × sz` rectangle swept upward by `sy`.

use nalgebra::Vector3;

use crate::bounds::Extent;

/// A rectangular cross-section plus the height it is extruded by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSection {
    /// Cross-section dimension along local X.
    pub width: f64,
    /// Cross-section dimension along local Z.
    pub depth: f64,
    /// Extrusion depth along local +Y.
    pub height: f64,
}

impl RectSection {
    /// Derives the section of a mesh from its local extent and the node's
    /// non-uniform scale. A zero-size extent yields a zero-area section,
    /// which is accepted, not an error.
    pub fn from_extent_and_scale(extent: &Extent, scale: &Vector3<f64>) -> Self {
        let size = extent.size().component_mul(scale);
        Self {
            width: size.x,
            depth: size.z,
            height: size.y,
        }
    }
}

/// Direction every section is swept along: local +Y.
pub fn extrusion_direction() -> Vector3<f64> {
    Vector3::y()
}
