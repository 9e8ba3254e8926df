//! OSAM document schema definitions.
//!
//! Field names mirror the JSON exchange format (`bc`, `loadCases`,
//! `caseName`, ...). Numeric `id` fields on sections, objects, elements
//! and instances are resolution keys for cross-references; they are never
//! carried into the output graph as attributes.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OsamDocument {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub materials: Vec<MaterialDef>,
    #[serde(default)]
    pub sections: Vec<SectionDef>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    pub assembly: AssemblyDef,
    #[serde(default)]
    pub bc: Vec<BoundaryConditionDef>,
    #[serde(default, rename = "loadCases")]
    pub load_cases: Vec<LoadCaseDef>,
    #[serde(default)]
    pub loads: Vec<LoadDef>,
}

/// Material definition.
///
/// `elastic`/`plastic` hold arbitrary nested property blocks; only their
/// presence matters downstream (`null` or absent means "not defined").
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MaterialDef {
    pub name: String,
    #[serde(default)]
    pub elastic: Option<serde_json::Value>,
    #[serde(default)]
    pub plastic: Option<serde_json::Value>,
}

impl MaterialDef {
    pub fn is_elastic(&self) -> bool {
        self.elastic.is_some()
    }

    pub fn is_plastic(&self) -> bool {
        self.plastic.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SectionDef {
    pub id: i64,
    pub name: String,
    pub section_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ObjectDef {
    pub id: i64,
    pub name: String,
    pub mesh: MeshDef,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MeshDef {
    pub node_count: i64,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

/// Finite element definition.
///
/// `section` is a numeric foreign key into `sections`; `material` refers
/// to a material by name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ElementDef {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub node_count: i64,
    pub face_count: i64,
    #[serde(default)]
    pub dofs: Vec<serde_json::Value>,
    pub section: i64,
    pub material: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssemblyDef {
    pub name: String,
    #[serde(default)]
    pub instances: Vec<InstanceDef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InstanceDef {
    pub id: i64,
    pub name: String,
    /// Numeric foreign key into `objects`.
    pub referenced_object: i64,
}

/// Boundary conditions carry no name of their own; the graph layer assigns
/// sequential synthetic identities in document order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BoundaryConditionDef {
    /// Numeric foreign keys into `assembly.instances`.
    #[serde(default)]
    pub instances: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadCaseDef {
    pub name: String,
    #[serde(rename = "type")]
    pub case_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadDef {
    #[serde(rename = "type")]
    pub load_type: String,
    /// Owning load case, referenced by name.
    #[serde(rename = "caseName")]
    pub case_name: String,
    /// Numeric foreign keys into `assembly.instances`.
    #[serde(default)]
    pub instances: Vec<i64>,
}
