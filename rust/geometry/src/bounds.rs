// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding extents of local mesh geometry

use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding extent of a vertex buffer, in local coordinates.
///
/// A degenerate extent (zero size along any axis) is a legal value; a
/// single point yields `min == max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Extent {
    /// Scans a flat `x y z` position buffer, as produced by mesh geometry.
    ///
    /// Returns `None` for an empty buffer or one whose length is not a
    /// multiple of three; the caller decides how to surface that.
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        if positions.is_empty() || positions.len() % 3 != 0 {
            return None;
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        for chunk in positions.chunks_exact(3) {
            let (x, y, z) = (chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        Some(Self { min, max })
    }

    /// Edge lengths of the extent.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }
}
