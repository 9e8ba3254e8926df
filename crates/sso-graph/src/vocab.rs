//! SSO vocabulary: namespaces, class names, and predicate names.
//!
//! The class and predicate spellings are an exchange contract; output
//! consumers match on them literally (including `as_OSAM-json` and the
//! camelCase `loadCase_*` predicates).

/// Base IRI under which both the ontology and instance namespaces live.
pub const BASE_IRI: &str = "http://www.upclabmodelsdigitals.org/Models/OSAM/";

/// Namespaces registered in the output.
///
/// `cc` is reserved for attribution metadata and currently unused by any
/// triple; it is still bound in the prefix block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ns {
    /// Structural analysis ontology vocabulary (`sso`).
    Sso,
    /// IFC-to-SSO mapping vocabulary (`ifcsso`).
    IfcSso,
    Rdf,
    Rdfs,
    Owl,
    Xsd,
    Cc,
    /// Instance namespace for the converted model (`osam_simulation`).
    Inst,
}

impl Ns {
    /// All namespaces, in the order they are bound in the prefix block.
    pub const ALL: [Ns; 8] = [
        Ns::Sso,
        Ns::IfcSso,
        Ns::Rdf,
        Ns::Rdfs,
        Ns::Owl,
        Ns::Xsd,
        Ns::Cc,
        Ns::Inst,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Ns::Sso => "sso",
            Ns::IfcSso => "ifcsso",
            Ns::Rdf => "rdf",
            Ns::Rdfs => "rdfs",
            Ns::Owl => "owl",
            Ns::Xsd => "xsd",
            Ns::Cc => "cc",
            Ns::Inst => "osam_simulation",
        }
    }

    pub fn iri(self) -> &'static str {
        match self {
            Ns::Sso => "http://www.upclabmodelsdigitals.org/Models/OSAM/SSO#",
            Ns::IfcSso => "http://www.upclabmodelsdigitals.org/Models/OSAM/IFCSSO#",
            Ns::Rdf => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Ns::Rdfs => "http://www.w3.org/2000/01/rdf-schema#",
            Ns::Owl => "http://www.w3.org/2002/07/owl#",
            Ns::Xsd => "http://www.w3.org/2001/XMLSchema#",
            Ns::Cc => "http://creativecommons.org/ns#",
            Ns::Inst => BASE_IRI,
        }
    }
}

/// SSO class names (node type tags).
pub mod class {
    pub const STRUCTURAL_ANALYSIS_MODEL: &str = "StructuralAnalysisModel";
    pub const MATERIAL: &str = "Material";
    pub const SECTION: &str = "Section";
    pub const OBJECT: &str = "Object";
    pub const MESH: &str = "Mesh";
    pub const ELEMENT: &str = "Element";
    pub const ASSEMBLY: &str = "Assembly";
    pub const INSTANCE: &str = "Instance";
    pub const BOUNDARY_CONDITION: &str = "BoundaryCondition";
    pub const LOAD_CASE: &str = "LoadCase";
    pub const LOAD: &str = "Load";
}

/// SSO predicate names.
pub mod pred {
    pub const NAME: &str = "name";
    pub const ID: &str = "id";
    pub const AS_OSAM_JSON: &str = "as_OSAM-json";
    pub const MATERIAL_NAME: &str = "material_name";
    pub const ELASTIC: &str = "elastic";
    pub const PLASTIC: &str = "plastic";
    pub const HAS_MATERIAL: &str = "has_material";
    pub const SECTION_NAME: &str = "section_name";
    pub const SECTION_TYPE: &str = "section_type";
    pub const HAS_SECTION: &str = "has_section";
    pub const OBJECT_NAME: &str = "object_name";
    pub const HAS_OBJECT: &str = "has_object";
    pub const NODES: &str = "nodes";
    pub const HAS_MESH: &str = "has_mesh";
    pub const NODE_COUNT: &str = "node_count";
    pub const FACE_COUNT: &str = "face_count";
    pub const DOFS: &str = "dofs";
    pub const HAS_ELEMENT: &str = "has_element";
    pub const ELEMENT_SECTION: &str = "element_section";
    pub const ELEMENT_MATERIAL: &str = "element_material";
    pub const ASSEMBLY_NAME: &str = "assembly_name";
    pub const HAS_ASSEMBLY: &str = "has_assembly";
    pub const INSTANCE_NAME: &str = "instance_name";
    pub const HAS_INSTANCE: &str = "has_instance";
    pub const REFERENCED_OBJECT: &str = "referenced_object";
    pub const HAS_BOUNDARY_CONDITION: &str = "has_boundary_condition";
    pub const APPLIED_TO: &str = "applied_to";
    pub const LOADCASE_NAME: &str = "loadCase_name";
    pub const LOADCASE_TYPE: &str = "loadCase_type";
    pub const HAS_LOADCASE: &str = "has_loadCase";
    pub const LOAD_TYPE: &str = "load_type";
    pub const HAS_LOAD: &str = "has_load";
}

/// Recognized element kinds.
///
/// An element whose declared kind is not in this set stays a plain
/// `Element`; unknown kinds are not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Shell,
    Beam,
    Solid,
    Membrane,
    Truss,
}

impl ElementKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "SHELL" => Some(ElementKind::Shell),
            "BEAM" => Some(ElementKind::Beam),
            "SOLID" => Some(ElementKind::Solid),
            "MEMBRANE" => Some(ElementKind::Membrane),
            "TRUSS" => Some(ElementKind::Truss),
            _ => None,
        }
    }

    /// The SSO subclass name for this kind.
    pub fn class_name(self) -> &'static str {
        match self {
            ElementKind::Shell => "ShellElement",
            ElementKind::Beam => "BeamElement",
            ElementKind::Solid => "SolidElement",
            ElementKind::Membrane => "MembraneElement",
            ElementKind::Truss => "TrussElement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_iris_share_base() {
        assert!(Ns::Sso.iri().starts_with(BASE_IRI));
        assert!(Ns::IfcSso.iri().starts_with(BASE_IRI));
        assert_eq!(Ns::Inst.iri(), BASE_IRI);
    }

    #[test]
    fn element_kind_closed_set() {
        assert_eq!(ElementKind::parse("SHELL"), Some(ElementKind::Shell));
        assert_eq!(ElementKind::parse("TRUSS"), Some(ElementKind::Truss));
        assert_eq!(ElementKind::parse("shell"), None);
        assert_eq!(ElementKind::parse("SPRING"), None);
    }

    #[test]
    fn subclass_names() {
        assert_eq!(ElementKind::Membrane.class_name(), "MembraneElement");
        assert_eq!(ElementKind::Beam.class_name(), "BeamElement");
    }
}
