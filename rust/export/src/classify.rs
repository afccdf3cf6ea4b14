// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic classification of scene elements
//!
//! Bridge authoring tools name structural members in Italian; the display
//! name is the only classification signal available, so a fixed-priority
//! keyword table maps names onto building-element categories. The table is
//! data, the resolver is a pure first-match scan, and anything unmatched
//! becomes a generic proxy, which is a fallback rather than an error.

use ponte_ifc_model::IfcClass;

/// Building-element category of one converted scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    Column,
    Beam,
    Footing,
    MechanicalFastener,
    StructuralMember,
    Wall,
    GenericProxy,
}

impl ElementClass {
    /// The IFC entity class this category is exported as.
    pub fn ifc_class(&self) -> IfcClass {
        match self {
            Self::Column => IfcClass::Column,
            Self::Beam => IfcClass::Beam,
            Self::Footing => IfcClass::Footing,
            Self::MechanicalFastener => IfcClass::MechanicalFastener,
            Self::StructuralMember => IfcClass::Member,
            Self::Wall => IfcClass::Wall,
            Self::GenericProxy => IfcClass::BuildingElementProxy,
        }
    }
}

/// Ordered classification rules: the first keyword hit wins.
///
/// Pila/Montante = pier/upright, Trave/Traverso/Impalcato = girder/
/// crossbeam/deck, Fondazione/Plinto = foundation/plinth, Appoggio =
/// bearing, Arco = arch, Spalla = abutment.
const RULES: &[(&[&str], ElementClass)] = &[
    (&["Pila", "Montante"], ElementClass::Column),
    (&["Trave", "Traverso", "Impalcato"], ElementClass::Beam),
    (&["Fondazione", "Plinto"], ElementClass::Footing),
    (&["Appoggio"], ElementClass::MechanicalFastener),
    (&["Arco"], ElementClass::StructuralMember),
    (&["Spalla"], ElementClass::Wall),
];

/// Classifies a display name by case-sensitive substring containment
/// against [`RULES`], in priority order.
pub fn classify(name: &str) -> ElementClass {
    for (keywords, class) in RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *class;
        }
    }
    ElementClass::GenericProxy
}
