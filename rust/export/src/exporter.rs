// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export pipeline orchestration
//!
//! One pass: initialize the engine (the only awaited step), open a model,
//! build the shared context and spatial chain, convert every visible mesh
//! under the traversal root, tie all products to the storey with a single
//! containment relation, serialize, close. All state lives in an
//! [`ExportContext`] constructed per call, so repeated or concurrent
//! exports never share anything.

use ponte_ifc_model::{new_global_id, Attribute, EntityId, IfcClass, StepEngine, StepModel};
use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::hierarchy::{build_geometric_context, build_spatial_chain, SpatialChain};
use crate::product::{assemble_product, ProductEntry};
use crate::scene::{NodeKind, SceneNode};

/// Fixed name under which the host delivers the exported file.
pub const OUTPUT_FILE_NAME: &str = "ponte_generato.ifc";

/// Model name written into the exchange-file header.
const MODEL_NAME: &str = "ponte_generato";

/// Per-call state shared by every step of one export pass.
#[derive(Debug)]
pub struct ExportContext<'m> {
    pub model: &'m mut StepModel,
    /// The one geometric context every shape representation references.
    pub geometric_context: EntityId,
    pub chain: SpatialChain,
}

impl<'m> ExportContext<'m> {
    /// Builds the shared context and the 4-level container chain into a
    /// fresh model and wraps both for the per-mesh steps.
    pub fn prepare(model: &'m mut StepModel) -> Result<Self> {
        let geometric_context = build_geometric_context(model)?;
        let chain = build_spatial_chain(model, geometric_context)?;
        Ok(Self {
            model,
            geometric_context,
            chain,
        })
    }
}

/// Picks the subtree to convert: a direct child group whose first child
/// carries the external-ID metadata tag, if the scene has one, otherwise
/// the whole scene.
pub fn traversal_root(scene: &SceneNode) -> &SceneNode {
    scene
        .children
        .iter()
        .find(|child| {
            matches!(child.kind, NodeKind::Group)
                && child
                    .children
                    .first()
                    .is_some_and(|first| first.metadata.external_id().is_some())
        })
        .unwrap_or(scene)
}

/// Ties every product of the pass to the storey. Built exactly once, also
/// for an empty product list.
fn link_contained(
    model: &mut StepModel,
    storey: EntityId,
    products: &[ProductEntry],
) -> Result<EntityId> {
    Ok(model.insert(
        IfcClass::RelContainedInSpatialStructure,
        vec![
            Attribute::string(new_global_id()),
            Attribute::Null,
            Attribute::string("StoreyContainer"),
            Attribute::Null,
            Attribute::refs(products.iter().map(|product| product.id)),
            Attribute::Ref(storey),
        ],
    )?)
}

/// What one export pass produced, for callers that inspect the graph.
#[derive(Debug)]
pub struct ExportSummary {
    /// Converted products in mesh-traversal order.
    pub products: Vec<ProductEntry>,
    /// The single containment relation tying products to the storey.
    pub containment: EntityId,
}

/// Builds the complete entity graph for `scene` into `model`.
///
/// This is the synchronous core of the pass; [`export_scene`] wraps it
/// with engine initialization and serialization.
pub fn build_model(model: &mut StepModel, scene: &SceneNode) -> Result<ExportSummary> {
    let mut ctx = ExportContext::prepare(model)?;

    let root = traversal_root(scene);
    let mut products = Vec::new();
    for node in root.visible_meshes() {
        products.push(assemble_product(&mut ctx, node)?);
    }

    let containment = link_contained(ctx.model, ctx.chain.storey, &products)?;
    debug!(
        products = products.len(),
        entities = model.len(),
        "entity graph complete"
    );

    Ok(ExportSummary {
        products,
        containment,
    })
}

/// Runs one full export pass over `scene` and returns the serialized
/// exchange file, to be delivered as [`OUTPUT_FILE_NAME`].
pub async fn export_scene(scene: &SceneNode) -> Result<Vec<u8>> {
    info!("starting IFC export");
    let engine = StepEngine::init()
        .await
        .map_err(|source| ExportError::Init(source.to_string()))?;

    let mut model = engine.create_model(MODEL_NAME);
    build_model(&mut model, scene)?;

    let bytes = model.save();
    model.close();
    Ok(bytes)
}
