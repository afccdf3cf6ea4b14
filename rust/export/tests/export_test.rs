// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests over a synthetic bridge scene.

use std::collections::HashMap;

use ponte_ifc_export::{build_model, export_scene, ElementClass, SceneNode};
use ponte_ifc_model::{Attribute, IfcClass, StepModel};

/// Two opposite corners span a unit cube centered at the origin.
fn cube() -> Vec<f32> {
    vec![-0.5, -0.5, -0.5, 0.5, 0.5, 0.5]
}

/// A small single-span bridge: two piers, a deck, a footing and one
/// invisible construction helper.
fn bridge_scene() -> SceneNode {
    SceneNode::group("scene").with_child(
        SceneNode::group("ponte")
            .with_child(
                SceneNode::mesh("Pila_1", cube())
                    .with_position(-5.0, 4.0, 0.0)
                    .with_scale(1.0, 8.0, 1.0)
                    .with_metadata("ID", "P-001")
                    .with_metadata("Material", "C40/50"),
            )
            .with_child(
                SceneNode::mesh("Pila_2", cube())
                    .with_position(5.0, 4.0, 0.0)
                    .with_scale(1.0, 8.0, 1.0)
                    .with_metadata("ID", "P-002"),
            )
            .with_child(
                SceneNode::mesh("Impalcato", cube())
                    .with_position(0.0, 8.5, 0.0)
                    .with_scale(12.0, 1.0, 4.0),
            )
            .with_child(
                SceneNode::mesh("Plinto_1", cube())
                    .with_position(-5.0, -0.5, 0.0)
                    .with_scale(2.0, 1.0, 2.0),
            )
            .with_child(
                SceneNode::mesh("Casseforme", cube())
                    .with_visible(false)
                    .with_position(0.0, 0.0, 0.0),
            ),
    )
}

fn class_counts(model: &StepModel) -> HashMap<IfcClass, usize> {
    let mut counts = HashMap::new();
    for (_, class, _) in model.iter() {
        *counts.entry(class).or_insert(0) += 1;
    }
    counts
}

#[test]
fn containment_covers_exactly_the_visible_meshes() {
    let mut model = StepModel::new("test");
    let summary = build_model(&mut model, &bridge_scene()).unwrap();

    // 5 mesh children, 1 invisible.
    assert_eq!(summary.products.len(), 4);

    let attrs = model.attributes(summary.containment).unwrap();
    let Attribute::List(elements) = &attrs[4] else {
        panic!("related elements must be a list");
    };
    assert_eq!(elements.len(), 4);

    // Every product appears in the one containment relation.
    assert_eq!(model.count_of(IfcClass::RelContainedInSpatialStructure), 1);
    assert_eq!(
        *attrs.get(4).unwrap(),
        Attribute::refs(summary.products.iter().map(|p| p.id))
    );
}

#[test]
fn products_classify_and_order_by_traversal() {
    let mut model = StepModel::new("test");
    let summary = build_model(&mut model, &bridge_scene()).unwrap();

    let classes: Vec<_> = summary.products.iter().map(|p| p.class).collect();
    assert_eq!(
        classes,
        vec![
            ElementClass::Column,
            ElementClass::Column,
            ElementClass::Beam,
            ElementClass::Footing,
        ]
    );
}

#[test]
fn metadata_attachment_is_per_mesh() {
    let mut model = StepModel::new("test");
    build_model(&mut model, &bridge_scene()).unwrap();

    // Only the two piers carry metadata, so exactly two property sets
    // exist: one with two values, one with one.
    assert_eq!(model.count_of(IfcClass::PropertySet), 2);
    assert_eq!(model.count_of(IfcClass::PropertySingleValue), 3);
    assert_eq!(model.count_of(IfcClass::RelDefinesByProperties), 2);
}

#[test]
fn empty_scene_still_builds_the_full_chain() {
    let mut model = StepModel::new("test");
    let summary = build_model(&mut model, &SceneNode::group("scene")).unwrap();

    assert!(summary.products.is_empty());
    assert_eq!(model.count_of(IfcClass::Project), 1);
    assert_eq!(model.count_of(IfcClass::Site), 1);
    assert_eq!(model.count_of(IfcClass::Building), 1);
    assert_eq!(model.count_of(IfcClass::BuildingStorey), 1);
    assert_eq!(model.count_of(IfcClass::RelAggregates), 3);

    // The containment relation exists with an empty element list.
    let attrs = model.attributes(summary.containment).unwrap();
    assert_eq!(attrs[4], Attribute::List(vec![]));
}

#[test]
fn repeated_exports_are_isomorphic_but_not_identical() {
    let scene = bridge_scene();

    let mut first = StepModel::new("test");
    build_model(&mut first, &scene).unwrap();
    let mut second = StepModel::new("test");
    build_model(&mut second, &scene).unwrap();

    // Same shape: entity-type counts match exactly.
    assert_eq!(class_counts(&first), class_counts(&second));
    assert_eq!(first.len(), second.len());

    // Different identity: fresh GlobalIds make the serialized files
    // differ.
    assert_ne!(first.save(), second.save());
}

#[test]
fn placement_base_sits_half_the_height_below_center() {
    let scene = SceneNode::group("scene").with_child(
        SceneNode::mesh("Pila_1", cube())
            .with_position(0.0, 10.0, 0.0)
            .with_scale(1.0, 4.0, 1.0),
    );
    let mut model = StepModel::new("test");
    build_model(&mut model, &scene).unwrap();

    let text = String::from_utf8(model.save()).unwrap();
    assert!(text.contains("IFCCARTESIANPOINT((0.,8.,0.))"));
}

#[test]
fn classification_priority_shows_in_the_output() {
    let scene = SceneNode::group("scene")
        .with_child(SceneNode::mesh("PilaTrave", cube()))
        .with_child(SceneNode::mesh("Parapetto", cube()));
    let mut model = StepModel::new("test");
    build_model(&mut model, &scene).unwrap();

    assert_eq!(model.count_of(IfcClass::Column), 1);
    assert_eq!(model.count_of(IfcClass::Beam), 0);
    assert_eq!(model.count_of(IfcClass::BuildingElementProxy), 1);
}

#[tokio::test]
async fn export_scene_produces_an_exchange_file() {
    let bytes = export_scene(&bridge_scene()).await.unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("ISO-10303-21;\n"));
    assert!(text.contains("FILE_NAME('ponte_generato.ifc'"));
    assert!(text.contains("FILE_SCHEMA(('IFC4'));"));
    assert!(text.contains("IFCPROJECT("));
    assert!(text.contains("IFCCOLUMN("));
    assert!(text.contains("IFCBEAM("));
    assert!(text.contains("IFCFOOTING("));
    assert!(text.contains("IFCRELCONTAINEDINSPATIALSTRUCTURE("));
    assert!(text.contains("'Pset_BridgeCommon'"));
    assert!(text.ends_with("END-ISO-10303-21;\n"));

    // The invisible helper never shows up anywhere.
    assert!(!text.contains("Casseforme"));
}

#[tokio::test]
async fn export_scene_uses_the_tagged_group_as_root() {
    // Decoration outside the tagged bridge group must not be exported.
    let scene = SceneNode::group("scene")
        .with_child(SceneNode::mesh("Cartello", cube()))
        .with_child(
            SceneNode::group("ponte")
                .with_child(SceneNode::mesh("Arco_1", cube()).with_metadata("ID", "A-001")),
        );

    let bytes = export_scene(&scene).await.unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("IFCMEMBER("));
    assert!(!text.contains("Cartello"));
}

#[tokio::test]
async fn malformed_mesh_aborts_the_pass() {
    let scene = SceneNode::group("scene")
        .with_child(SceneNode::mesh("Pila_1", cube()))
        .with_child(SceneNode::mesh("Pila_rotta", vec![1.0, 2.0]));

    let err = export_scene(&scene).await.unwrap_err();
    assert!(matches!(
        err,
        ponte_ifc_export::ExportError::MalformedInput(_)
    ));
}
