// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-mesh product assembly
//!
//! One finalized product entity per visible mesh. Construction is strictly
//! bottom-up (profile, solid placement, solid, shape representation,
//! product shape, placement frame, product), so every record only
//! references entities that are already persisted. Each insert persists
//! immediately; if assembly fails part-way the earlier entities of that
//! mesh stay in the graph unreferenced.

use ponte_ifc_geometry::{extrusion_direction, PlacementFrame, RectSection};
use ponte_ifc_model::{new_global_id, Attribute, EntityId, IfcClass};
use tracing::debug;

use crate::classify::{classify, ElementClass};
use crate::error::{ExportError, Result};
use crate::exporter::ExportContext;
use crate::scene::SceneNode;

/// Name of the property set collecting a mesh's metadata pairs.
pub const COMMON_PSET_NAME: &str = "Pset_BridgeCommon";

/// What the relationship linker needs to know about one converted mesh.
#[derive(Debug, Clone, Copy)]
pub struct ProductEntry {
    pub class: ElementClass,
    pub id: EntityId,
}

/// Converts one visible mesh node into a finalized product entity, plus
/// an optional property set from the node's own metadata.
pub fn assemble_product(ctx: &mut ExportContext<'_>, node: &SceneNode) -> Result<ProductEntry> {
    let geometry = node.geometry().ok_or_else(|| {
        ExportError::MalformedInput(format!("node '{}' is not a mesh", node.display_name()))
    })?;
    let extent = geometry.bounding_extent().ok_or_else(|| {
        ExportError::MalformedInput(format!(
            "mesh '{}' has an empty or malformed position buffer",
            node.display_name()
        ))
    })?;

    let class = classify(node.display_name());
    let section = RectSection::from_extent_and_scale(extent, &node.scale.to_vector());
    debug!(
        name = node.display_name(),
        class = ?class,
        width = section.width,
        depth = section.depth,
        height = section.height,
        "assembling product"
    );

    let model = &mut *ctx.model;

    // Cross-section profile in the local X/Z plane.
    let profile = model.insert(
        IfcClass::RectangleProfileDef,
        vec![
            Attribute::Enumeration("AREA"),
            Attribute::string("Rect"),
            Attribute::Null,
            Attribute::Real(section.width),
            Attribute::Real(section.depth),
        ],
    )?;

    // The solid keeps an identity frame at its local origin; the product
    // placement carries the world pose.
    let solid_origin = model.insert(
        IfcClass::CartesianPoint,
        vec![Attribute::reals([0.0, 0.0, 0.0])],
    )?;
    let solid_frame = model.insert(
        IfcClass::Axis2Placement3D,
        vec![Attribute::Ref(solid_origin), Attribute::Null, Attribute::Null],
    )?;

    let sweep = extrusion_direction();
    let sweep_direction = model.insert(
        IfcClass::Direction,
        vec![Attribute::reals([sweep.x, sweep.y, sweep.z])],
    )?;
    let solid = model.insert(
        IfcClass::ExtrudedAreaSolid,
        vec![
            Attribute::Ref(profile),
            Attribute::Ref(solid_frame),
            Attribute::Ref(sweep_direction),
            Attribute::Real(section.height),
        ],
    )?;

    let representation = model.insert(
        IfcClass::ShapeRepresentation,
        vec![
            Attribute::Ref(ctx.geometric_context),
            Attribute::string("Body"),
            Attribute::string("SweptSolid"),
            Attribute::refs([solid]),
        ],
    )?;
    let shape = model.insert(
        IfcClass::ProductDefinitionShape,
        vec![Attribute::Null, Attribute::Null, Attribute::refs([representation])],
    )?;

    // Absolute placement: base of the extrusion, oriented by the mesh's
    // world rotation.
    let frame = PlacementFrame::from_world(
        &node.position.to_point(),
        &node.rotation.to_rotation(),
        section.height,
    );
    let location = model.insert(
        IfcClass::CartesianPoint,
        vec![Attribute::reals([
            frame.location.x,
            frame.location.y,
            frame.location.z,
        ])],
    )?;
    let axis = model.insert(
        IfcClass::Direction,
        vec![Attribute::reals([frame.axis.x, frame.axis.y, frame.axis.z])],
    )?;
    let ref_direction = model.insert(
        IfcClass::Direction,
        vec![Attribute::reals([
            frame.ref_direction.x,
            frame.ref_direction.y,
            frame.ref_direction.z,
        ])],
    )?;
    let local_frame = model.insert(
        IfcClass::Axis2Placement3D,
        vec![
            Attribute::Ref(location),
            Attribute::Ref(axis),
            Attribute::Ref(ref_direction),
        ],
    )?;
    let placement = model.insert(
        IfcClass::LocalPlacement,
        vec![Attribute::Null, Attribute::Ref(local_frame)],
    )?;

    let name = node.display_name();
    let tag = node.metadata.external_id().unwrap_or(name);
    let product = model.insert(
        class.ifc_class(),
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string(name),
            Attribute::Null,
            Attribute::string(name),
            Attribute::Ref(placement),
            Attribute::Ref(shape),
            Attribute::string(tag),
        ],
    )?;

    attach_properties(ctx, node, product)?;

    Ok(ProductEntry { class, id: product })
}

/// Collects the node's metadata into one property set linked to the
/// product. An empty mapping produces no entities at all, not an empty
/// set.
fn attach_properties(
    ctx: &mut ExportContext<'_>,
    node: &SceneNode,
    product: EntityId,
) -> Result<()> {
    if node.metadata.is_empty() {
        return Ok(());
    }

    let model = &mut *ctx.model;
    let mut values = Vec::with_capacity(node.metadata.len());
    for (key, value) in node.metadata.iter() {
        values.push(model.insert(
            IfcClass::PropertySingleValue,
            vec![
                Attribute::string(key),
                Attribute::Null,
                Attribute::text(value),
                Attribute::Null,
            ],
        )?);
    }

    let set = model.insert(
        IfcClass::PropertySet,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string(COMMON_PSET_NAME),
            Attribute::Null,
            Attribute::refs(values),
        ],
    )?;
    model.insert(
        IfcClass::RelDefinesByProperties,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::Null,
            Attribute::Null,
            Attribute::refs([product]),
            Attribute::Ref(set),
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponte_ifc_model::StepModel;

    fn unit_cube_positions() -> Vec<f32> {
        vec![-0.5, -0.5, -0.5, 0.5, 0.5, 0.5]
    }

    fn assemble(node: &SceneNode) -> (StepModel, ProductEntry) {
        let mut model = StepModel::new("test");
        let mut ctx = ExportContext::prepare(&mut model).unwrap();
        let entry = assemble_product(&mut ctx, node).unwrap();
        (model, entry)
    }

    #[test]
    fn product_entity_chain_is_complete() {
        let node = SceneNode::mesh("Pila_1", unit_cube_positions());
        let (model, entry) = assemble(&node);

        assert_eq!(entry.class, ElementClass::Column);
        assert_eq!(model.class_of(entry.id), Some(IfcClass::Column));
        assert_eq!(model.count_of(IfcClass::RectangleProfileDef), 1);
        assert_eq!(model.count_of(IfcClass::ExtrudedAreaSolid), 1);
        assert_eq!(model.count_of(IfcClass::ShapeRepresentation), 1);
        assert_eq!(model.count_of(IfcClass::ProductDefinitionShape), 1);
        assert_eq!(model.count_of(IfcClass::LocalPlacement), 1);
    }

    #[test]
    fn profile_and_solid_carry_scaled_dimensions() {
        let node = SceneNode::mesh("Trave_1", unit_cube_positions()).with_scale(2.0, 3.0, 4.0);
        let (model, entry) = assemble(&node);

        let (_, _, profile_attrs) = model
            .iter()
            .find(|(_, class, _)| *class == IfcClass::RectangleProfileDef)
            .unwrap();
        assert_eq!(profile_attrs[3], Attribute::Real(2.0));
        assert_eq!(profile_attrs[4], Attribute::Real(4.0));

        let (_, _, solid_attrs) = model
            .iter()
            .find(|(_, class, _)| *class == IfcClass::ExtrudedAreaSolid)
            .unwrap();
        assert_eq!(solid_attrs[3], Attribute::Real(3.0));
        assert_eq!(model.class_of(entry.id), Some(IfcClass::Beam));
    }

    #[test]
    fn placement_location_is_shifted_to_extrusion_base() {
        let node = SceneNode::mesh("Appoggio_1", unit_cube_positions())
            .with_position(1.0, 10.0, -2.0)
            .with_scale(1.0, 4.0, 1.0);
        let (model, _) = assemble(&node);

        // The second cartesian point of the mesh chain is the base
        // location (the first belongs to the solid's identity frame, and
        // one more precedes both in the shared context).
        let locations: Vec<_> = model
            .iter()
            .filter(|(_, class, _)| *class == IfcClass::CartesianPoint)
            .collect();
        let (_, _, base) = locations.last().unwrap();
        assert_eq!(base[0], Attribute::reals([1.0, 8.0, -2.0]));
    }

    #[test]
    fn tag_prefers_external_id_over_name() {
        let node = SceneNode::mesh("Pila_1", unit_cube_positions()).with_metadata("ID", "P-001");
        let (model, entry) = assemble(&node);
        let attrs = model.attributes(entry.id).unwrap();
        assert_eq!(attrs[7], Attribute::string("P-001"));

        let without_id = SceneNode::mesh("Pila_2", unit_cube_positions());
        let (model, entry) = assemble(&without_id);
        assert_eq!(model.attributes(entry.id).unwrap()[7], Attribute::string("Pila_2"));
    }

    #[test]
    fn empty_metadata_creates_no_property_entities() {
        let node = SceneNode::mesh("Arco_1", unit_cube_positions());
        let (model, _) = assemble(&node);
        assert_eq!(model.count_of(IfcClass::PropertySet), 0);
        assert_eq!(model.count_of(IfcClass::PropertySingleValue), 0);
        assert_eq!(model.count_of(IfcClass::RelDefinesByProperties), 0);
    }

    #[test]
    fn metadata_becomes_one_property_set() {
        let node = SceneNode::mesh("Spalla_1", unit_cube_positions())
            .with_metadata("Material", "Steel");
        let (model, entry) = assemble(&node);

        assert_eq!(model.count_of(IfcClass::PropertySet), 1);
        assert_eq!(model.count_of(IfcClass::PropertySingleValue), 1);
        assert_eq!(model.count_of(IfcClass::RelDefinesByProperties), 1);

        let (_, _, value_attrs) = model
            .iter()
            .find(|(_, class, _)| *class == IfcClass::PropertySingleValue)
            .unwrap();
        assert_eq!(value_attrs[0], Attribute::string("Material"));
        assert_eq!(value_attrs[2], Attribute::text("Steel"));

        let (_, _, set_attrs) = model
            .iter()
            .find(|(_, class, _)| *class == IfcClass::PropertySet)
            .unwrap();
        assert_eq!(set_attrs[2], Attribute::string(COMMON_PSET_NAME));

        let (_, _, rel_attrs) = model
            .iter()
            .find(|(_, class, _)| *class == IfcClass::RelDefinesByProperties)
            .unwrap();
        assert_eq!(rel_attrs[4], Attribute::refs([entry.id]));
    }

    #[test]
    fn degenerate_geometry_is_accepted() {
        let node = SceneNode::mesh("Plinto_1", vec![1.0, 1.0, 1.0]);
        let (model, entry) = assemble(&node);
        assert_eq!(model.class_of(entry.id), Some(IfcClass::Footing));
    }

    #[test]
    fn empty_position_buffer_is_malformed_input() {
        let mut model = StepModel::new("test");
        let mut ctx = ExportContext::prepare(&mut model).unwrap();
        let node = SceneNode::mesh("Pila_rotta", vec![]);
        let err = assemble_product(&mut ctx, &node).unwrap_err();
        assert!(matches!(err, ExportError::MalformedInput(_)));
    }
}
