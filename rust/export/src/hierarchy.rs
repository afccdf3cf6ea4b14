// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric context and spatial-container chain
//!
//! Built exactly once per export pass, before any product. The chain is
//! always the same four levels (Project, Site, Building, Storey), even
//! for an empty scene, with one aggregation relation per adjacent pair.
//! The geometric context precedes the project so the project can
//! reference it.

use ponte_ifc_model::{new_global_id, Attribute, EntityId, IfcClass, StepModel};

use crate::error::Result;

/// Precision of the shared geometric context.
const CONTEXT_PRECISION: f64 = 1e-5;

/// The four spatial containers of one export pass, outermost first.
#[derive(Debug, Clone, Copy)]
pub struct SpatialChain {
    pub project: EntityId,
    pub site: EntityId,
    pub building: EntityId,
    pub storey: EntityId,
}

/// Builds the one shared geometric representation context: dimension 3,
/// fixed precision, world coordinate system at the origin, no auxiliary
/// axes.
pub fn build_geometric_context(model: &mut StepModel) -> Result<EntityId> {
    let origin = model.insert(
        IfcClass::CartesianPoint,
        vec![Attribute::reals([0.0, 0.0, 0.0])],
    )?;
    let world = model.insert(
        IfcClass::Axis2Placement3D,
        vec![Attribute::Ref(origin), Attribute::Null, Attribute::Null],
    )?;
    let context = model.insert(
        IfcClass::GeometricRepresentationContext,
        vec![
            Attribute::Null,
            Attribute::string("Model"),
            Attribute::Integer(3),
            Attribute::Real(CONTEXT_PRECISION),
            Attribute::Ref(world),
            Attribute::Null,
        ],
    )?;
    Ok(context)
}

/// One SI length unit (metre) collected into the project's unit
/// assignment.
fn build_unit_assignment(model: &mut StepModel) -> Result<EntityId> {
    let metre = model.insert(
        IfcClass::SiUnit,
        vec![
            Attribute::Derived,
            Attribute::Enumeration("LENGTHUNIT"),
            Attribute::Null,
            Attribute::Enumeration("METRE"),
        ],
    )?;
    Ok(model.insert(IfcClass::UnitAssignment, vec![Attribute::refs([metre])])?)
}

/// One aggregation relation whose child list has exactly one entry.
fn aggregate(
    model: &mut StepModel,
    parent: EntityId,
    child: EntityId,
) -> Result<EntityId> {
    Ok(model.insert(
        IfcClass::RelAggregates,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Ref(parent),
            Attribute::refs([child]),
        ],
    )?)
}

/// Builds the Project→Site→Building→Storey chain and its three
/// aggregation relations.
pub fn build_spatial_chain(
    model: &mut StepModel,
    context: EntityId,
) -> Result<SpatialChain> {
    let units = build_unit_assignment(model)?;

    let project = model.insert(
        IfcClass::Project,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string("Bridge Project"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::refs([context]),
            Attribute::Ref(units),
        ],
    )?;

    let site = model.insert(
        IfcClass::Site,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string("Site"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Enumeration("ELEMENT"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
        ],
    )?;

    let building = model.insert(
        IfcClass::Building,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string("Building"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Enumeration("ELEMENT"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
        ],
    )?;

    let storey = model.insert(
        IfcClass::BuildingStorey,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string("Storey"),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::Enumeration("ELEMENT"),
            Attribute::Real(0.0),
        ],
    )?;

    aggregate(model, project, site)?;
    aggregate(model, site, building)?;
    aggregate(model, building, storey)?;

    Ok(SpatialChain {
        project,
        site,
        building,
        storey,
    })
}
