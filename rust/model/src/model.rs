// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Append-only entity model with STEP (ISO 10303-21) serialization.
//!
//! [`StepModel`] is the central owner of all exported entities. Records are
//! write-once: [`StepModel::insert`] appends and finalizes one entity and
//! there is no mutation API. Because instance numbers are assigned in
//! insertion order, an attribute may only reference entities inserted
//! earlier; `insert` checks this recursively and refuses forward
//! references, which keeps the whole graph constructible strictly
//! bottom-up.

use std::fmt::Write;

use crate::class::IfcClass;
use crate::entity::{Attribute, EntityId};
use crate::error::{Error, Result};

/// The application name written into the STEP header.
const PREPROCESSOR: &str = concat!("ponte-ifc ", env!("CARGO_PKG_VERSION"));

/// One finalized entity record.
#[derive(Debug, Clone)]
struct Record {
    class: IfcClass,
    attributes: Vec<Attribute>,
}

/// An open model handle: an append-only arena of finalized entities.
///
/// # Example
///
/// ```
/// use ponte_ifc_model::{Attribute, IfcClass, StepModel};
///
/// let mut model = StepModel::new("ponte_generato");
/// let point = model
///     .insert(IfcClass::CartesianPoint, vec![Attribute::reals([0.0, 0.0, 0.0])])
///     .unwrap();
/// let placement = model
///     .insert(
///         IfcClass::Axis2Placement3D,
///         vec![Attribute::Ref(point), Attribute::Null, Attribute::Null],
///     )
///     .unwrap();
/// assert_eq!(model.len(), 2);
/// assert!(placement > point);
/// ```
#[derive(Debug)]
pub struct StepModel {
    name: String,
    records: Vec<Record>,
}

impl StepModel {
    /// Creates an empty model. `name` becomes the STEP header file name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Appends one entity and finalizes it, returning its instance id.
    ///
    /// Fails with [`Error::UnresolvedReference`] if any attribute (at any
    /// nesting depth) references an entity that is not finalized yet. The
    /// record is persisted immediately; there is no batching and no way to
    /// retract it afterwards.
    pub fn insert(&mut self, class: IfcClass, attributes: Vec<Attribute>) -> Result<EntityId> {
        let next = self.records.len() as u32 + 1;
        for attribute in &attributes {
            check_finalized(attribute, next)?;
        }
        self.records.push(Record { class, attributes });
        Ok(EntityId(next))
    }

    /// Number of finalized entities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no entity has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of finalized entities of the given class.
    pub fn count_of(&self, class: IfcClass) -> usize {
        self.records.iter().filter(|r| r.class == class).count()
    }

    /// Class of a finalized entity, or `None` for an unknown id.
    pub fn class_of(&self, id: EntityId) -> Option<IfcClass> {
        self.record(id).map(|r| r.class)
    }

    /// Attribute list of a finalized entity, or `None` for an unknown id.
    pub fn attributes(&self, id: EntityId) -> Option<&[Attribute]> {
        self.record(id).map(|r| r.attributes.as_slice())
    }

    fn record(&self, id: EntityId) -> Option<&Record> {
        if id.0 == 0 {
            return None;
        }
        self.records.get(id.0 as usize - 1)
    }

    /// Iterates all finalized entities in insertion (= instance number)
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, IfcClass, &[Attribute])> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                (
                    EntityId(index as u32 + 1),
                    record.class,
                    record.attributes.as_slice(),
                )
            })
    }

    /// Serializes the model as an ISO 10303-21 exchange file.
    pub fn save(&self) -> Vec<u8> {
        let mut out = String::new();

        let _ = writeln!(out, "ISO-10303-21;");
        let _ = writeln!(out, "HEADER;");
        let _ = writeln!(
            out,
            "FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');"
        );
        let _ = writeln!(
            out,
            "FILE_NAME('{}.ifc','',(''),(''),'{}','','');",
            self.name, PREPROCESSOR
        );
        let _ = writeln!(out, "FILE_SCHEMA(('IFC4'));");
        let _ = writeln!(out, "ENDSEC;");
        let _ = writeln!(out, "DATA;");

        let mut line = String::new();
        for (index, record) in self.records.iter().enumerate() {
            line.clear();
            line.push('#');
            line.push_str(&(index as u32 + 1).to_string());
            line.push('=');
            line.push_str(record.class.as_str());
            line.push('(');
            for (i, attribute) in record.attributes.iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                attribute.write_step(&mut line);
            }
            line.push_str(");");
            let _ = writeln!(out, "{}", line);
        }

        let _ = writeln!(out, "ENDSEC;");
        let _ = writeln!(out, "END-ISO-10303-21;");

        out.into_bytes()
    }

    /// Closes the model handle. The entity graph is discarded.
    pub fn close(self) {}
}

/// Recursive bottom-up check: every referenced id must be below `next`.
fn check_finalized(attribute: &Attribute, next: u32) -> Result<()> {
    match attribute {
        Attribute::Ref(id) => {
            if id.0 == 0 || id.0 >= next {
                return Err(Error::UnresolvedReference {
                    referenced: id.0,
                    next,
                });
            }
            Ok(())
        }
        Attribute::Typed(_, inner) => check_finalized(inner, next),
        Attribute::List(items) => {
            for item in items {
                check_finalized(item, next)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
