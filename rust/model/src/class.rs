// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Entity Classes
//!
//! Every entity class the writer can emit, as an enum instead of string
//! tags, so the exporter and its tests can match on classes cheaply.

use std::fmt;

/// IFC entity classes emitted by the bridge exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfcClass {
    // Spatial structure
    Project,
    Site,
    Building,
    BuildingStorey,

    // Building elements
    Column,
    Beam,
    Footing,
    MechanicalFastener,
    Member,
    Wall,
    BuildingElementProxy,

    // Relationships
    RelAggregates,
    RelContainedInSpatialStructure,
    RelDefinesByProperties,

    // Properties
    PropertySet,
    PropertySingleValue,

    // Geometry resources
    CartesianPoint,
    Direction,
    Axis2Placement3D,
    LocalPlacement,
    RectangleProfileDef,
    ExtrudedAreaSolid,
    ShapeRepresentation,
    ProductDefinitionShape,
    GeometricRepresentationContext,

    // Units
    SiUnit,
    UnitAssignment,
}

impl IfcClass {
    /// Upper-case STEP keyword for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "IFCPROJECT",
            Self::Site => "IFCSITE",
            Self::Building => "IFCBUILDING",
            Self::BuildingStorey => "IFCBUILDINGSTOREY",
            Self::Column => "IFCCOLUMN",
            Self::Beam => "IFCBEAM",
            Self::Footing => "IFCFOOTING",
            Self::MechanicalFastener => "IFCMECHANICALFASTENER",
            Self::Member => "IFCMEMBER",
            Self::Wall => "IFCWALL",
            Self::BuildingElementProxy => "IFCBUILDINGELEMENTPROXY",
            Self::RelAggregates => "IFCRELAGGREGATES",
            Self::RelContainedInSpatialStructure => "IFCRELCONTAINEDINSPATIALSTRUCTURE",
            Self::RelDefinesByProperties => "IFCRELDEFINESBYPROPERTIES",
            Self::PropertySet => "IFCPROPERTYSET",
            Self::PropertySingleValue => "IFCPROPERTYSINGLEVALUE",
            Self::CartesianPoint => "IFCCARTESIANPOINT",
            Self::Direction => "IFCDIRECTION",
            Self::Axis2Placement3D => "IFCAXIS2PLACEMENT3D",
            Self::LocalPlacement => "IFCLOCALPLACEMENT",
            Self::RectangleProfileDef => "IFCRECTANGLEPROFILEDEF",
            Self::ExtrudedAreaSolid => "IFCEXTRUDEDAREASOLID",
            Self::ShapeRepresentation => "IFCSHAPEREPRESENTATION",
            Self::ProductDefinitionShape => "IFCPRODUCTDEFINITIONSHAPE",
            Self::GeometricRepresentationContext => "IFCGEOMETRICREPRESENTATIONCONTEXT",
            Self::SiUnit => "IFCSIUNIT",
            Self::UnitAssignment => "IFCUNITASSIGNMENT",
        }
    }

    /// True for the spatial structure classes (project through storey).
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            Self::Project | Self::Site | Self::Building | Self::BuildingStorey
        )
    }

    /// True for classes that stand for physical building elements.
    pub fn is_building_element(&self) -> bool {
        matches!(
            self,
            Self::Column
                | Self::Beam
                | Self::Footing
                | Self::MechanicalFastener
                | Self::Member
                | Self::Wall
                | Self::BuildingElementProxy
        )
    }

    /// True for the objectified relationship classes.
    pub fn is_relationship(&self) -> bool {
        matches!(
            self,
            Self::RelAggregates
                | Self::RelContainedInSpatialStructure
                | Self::RelDefinesByProperties
        )
    }
}

impl fmt::Display for IfcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
