// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only facade over the host scene graph
//!
//! The exporter consumes a tree of positioned, oriented, scaled nodes.
//! Group nodes only structure the tree; mesh nodes carry local vertex
//! data whose bounding extent is computed lazily and cached. Every node
//! has an open-ended string-keyed metadata mapping, with `"ID"` as the
//! conventional external-identifier field.

use std::cell::OnceCell;

use ponte_ifc_geometry::{Extent, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Metadata key that carries the external identifier of an element.
pub const EXTERNAL_ID_KEY: &str = "ID";

/// Display name used when a node carries no name of its own.
pub const UNNAMED: &str = "Unknown";

/// Insertion-ordered string metadata of one scene node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a pair. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The optional external-ID field.
    pub fn external_id(&self) -> Option<&str> {
        self.get(EXTERNAL_ID_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Local vertex data of a mesh node: a flat `x y z` position buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub positions: Vec<f32>,
    #[serde(skip)]
    bounds: OnceCell<Extent>,
}

impl MeshGeometry {
    pub fn new(positions: Vec<f32>) -> Self {
        Self {
            positions,
            bounds: OnceCell::new(),
        }
    }

    /// Bounding extent of the position buffer, computed on first use and
    /// cached. `None` signals an empty or non-triplet buffer.
    pub fn bounding_extent(&self) -> Option<&Extent> {
        if self.bounds.get().is_none() {
            let extent = Extent::from_positions(&self.positions)?;
            let _ = self.bounds.set(extent);
        }
        self.bounds.get()
    }
}

/// Group-vs-mesh discriminator of a scene node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    Group,
    Mesh(MeshGeometry),
}

/// One node of the host scene graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub visible: bool,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    #[serde(default)]
    pub metadata: Metadata,
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            visible: true,
            position: Vec3::zero(),
            rotation: Quat::identity(),
            scale: Vec3::one(),
            metadata: Metadata::new(),
            kind,
            children: Vec::new(),
        }
    }

    /// A visible, identity-transformed group node.
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    /// A visible, identity-transformed mesh node over a position buffer.
    pub fn mesh(name: impl Into<String>, positions: Vec<f32>) -> Self {
        Self::new(name, NodeKind::Mesh(MeshGeometry::new(positions)))
    }

    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh(_))
    }

    pub fn geometry(&self) -> Option<&MeshGeometry> {
        match &self.kind {
            NodeKind::Mesh(geometry) => Some(geometry),
            NodeKind::Group => None,
        }
    }

    /// The node's name, or [`UNNAMED`] for a nameless node.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED
        } else {
            &self.name
        }
    }

    /// Depth-first preorder traversal, visiting this node first.
    pub fn traverse<'a>(&'a self, visit: &mut dyn FnMut(&'a SceneNode)) {
        visit(self);
        for child in &self.children {
            child.traverse(visit);
        }
    }

    /// All visible mesh nodes below (and including) this node, in
    /// traversal order. Visibility is evaluated per node; an invisible
    /// group does not hide its descendants.
    pub fn visible_meshes(&self) -> Vec<&SceneNode> {
        let mut meshes = Vec::new();
        self.traverse(&mut |node| {
            if node.visible && node.is_mesh() {
                meshes.push(node);
            }
        });
        meshes
    }
}
