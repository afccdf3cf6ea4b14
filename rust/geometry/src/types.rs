// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-facing math types (simplified for serialization)

use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D vector or point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Componentwise one, the neutral scale.
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A rotation quaternion (simplified for serialization)
///
/// Hosts hand over the orientation they carry; no unit-length check is
/// performed on this side, so a malformed quaternion propagates into the
/// derived placement frame unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Interprets the components as a unit rotation without normalizing.
    pub fn to_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::new_unchecked(Quaternion::new(self.w, self.x, self.y, self.z))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}
