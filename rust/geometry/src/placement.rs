// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement frames derived from world transforms
//!
//! The extruded solid keeps an identity frame at its own local origin and
//! grows in local +Y, so the product placement has to carry the whole
//! world pose. The world position marks the object's center; the base of
//! the extrusion sits half the extrusion height below it.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Absolute base location plus the two axis directions that pin the local
/// frame of one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementFrame {
    /// Base-of-extrusion location in world coordinates.
    pub location: Point3<f64>,
    /// Local Z axis, the frame's third basis column.
    pub axis: Vector3<f64>,
    /// Local X axis, the frame's first basis column.
    pub ref_direction: Vector3<f64>,
}

impl PlacementFrame {
    /// Derives the frame from a world position, a world orientation and
    /// the extrusion height of the product's section.
    ///
    /// The vertical coordinate shifts down by `extrusion_height / 2`,
    /// converting the center-of-object reference into the base-of-extrusion
    /// reference the solid expects. Axis directions are read straight off
    /// the rotation-matrix columns; no re-orthonormalization happens here,
    /// so a malformed orientation propagates silently.
    pub fn from_world(
        position: &Point3<f64>,
        rotation: &UnitQuaternion<f64>,
        extrusion_height: f64,
    ) -> Self {
        let matrix = rotation.to_rotation_matrix();
        let basis = matrix.matrix();
        Self {
            location: Point3::new(
                position.x,
                position.y - extrusion_height / 2.0,
                position.z,
            ),
            axis: basis.column(2).into_owned(),
            ref_direction: basis.column(0).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn vertical_shift_by_half_height() {
        let frame = PlacementFrame::from_world(
            &Point3::new(1.0, 10.0, -2.0),
            &UnitQuaternion::identity(),
            4.0,
        );
        assert_relative_eq!(frame.location, Point3::new(1.0, 8.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn identity_orientation_yields_world_axes() {
        let frame =
            PlacementFrame::from_world(&Point3::origin(), &UnitQuaternion::identity(), 0.0);
        assert_relative_eq!(frame.axis, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(frame.ref_direction, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_about_y_swaps_axes() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let frame = PlacementFrame::from_world(&Point3::origin(), &rotation, 0.0);
        // Local X maps to world -Z, local Z maps to world X.
        assert_relative_eq!(frame.ref_direction, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(frame.axis, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_height_passes_position_through() {
        let frame = PlacementFrame::from_world(
            &Point3::new(5.0, 6.0, 7.0),
            &UnitQuaternion::identity(),
            0.0,
        );
        assert_relative_eq!(frame.location, Point3::new(5.0, 6.0, 7.0), epsilon = 1e-12);
    }
}
