//! Document-to-graph builder.
//!
//! Drives a single top-to-bottom traversal of the OSAM document in a
//! fixed stage order; each stage only references nodes created by prior
//! stages, so resolution is a pure forward lookup. The first failed
//! resolution aborts the build and no partial graph escapes.

use sso_model::{AssemblyDef, OsamDocument};
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::{Graph, Term};
use crate::ids::NodeId;
use crate::registry::EntityRegistry;
use crate::resolve::{resolve_id, resolve_name};
use crate::vocab::{ElementKind, Ns, class, pred};

/// Build the full SSO graph for a document.
pub fn build_graph(doc: &OsamDocument) -> GraphResult<Graph> {
    ModelGraphBuilder::new().build(doc)
}

/// Builder for the typed statement graph.
///
/// Owns the in-construction graph and registry exclusively for the
/// duration of the run; `build` consumes the builder and returns the
/// frozen graph.
#[derive(Debug, Default)]
pub struct ModelGraphBuilder {
    graph: Graph,
    registry: EntityRegistry,
}

impl ModelGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the traversal. Stage order matters: sections and materials
    /// before elements, objects before instances, instances before
    /// boundary conditions and loads, load cases before loads.
    pub fn build(mut self, doc: &OsamDocument) -> GraphResult<Graph> {
        let model = self.add_model(doc)?;
        self.add_materials(model, doc)?;
        self.add_sections(model, doc)?;
        self.add_objects(model, doc)?;
        let assembly = self.add_assembly(model, &doc.assembly)?;
        self.add_instances(assembly, doc)?;
        self.add_boundary_conditions(model, doc)?;
        self.add_load_cases(model, doc)?;
        self.add_loads(model, doc)?;

        debug!(
            nodes = self.graph.nodes().len(),
            statements = self.graph.statements().len(),
            "graph build complete"
        );
        Ok(self.graph)
    }

    fn add_model(&mut self, doc: &OsamDocument) -> GraphResult<NodeId> {
        // Ontology header: the vocabulary namespace is itself an owl:Ontology.
        let ontology_subject = self.registry.create_or_get(&mut self.graph, Ns::Sso, "");
        let rdf_type = self.rdf_type();
        let owl_ontology = self
            .registry
            .create_or_get(&mut self.graph, Ns::Owl, "Ontology");
        self.graph
            .add_statement(ontology_subject, rdf_type, Term::Node(owl_ontology));

        let model = self.mint(&doc.name, class::STRUCTURAL_ANALYSIS_MODEL)?;
        self.type_stmt(model, class::STRUCTURAL_ANALYSIS_MODEL);
        self.str_attr(model, pred::NAME, &doc.name);
        self.str_attr(model, pred::ID, &doc.id);
        self.str_attr(model, pred::AS_OSAM_JSON, "OSAM-model-uri");
        Ok(model)
    }

    fn add_materials(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.materials.len(), "adding materials");
        for mat in &doc.materials {
            let node = self.mint(&mat.name, class::MATERIAL)?;
            self.type_stmt(node, class::MATERIAL);
            self.str_attr(node, pred::MATERIAL_NAME, &mat.name);
            self.rel(model, pred::HAS_MATERIAL, node);
            // Flags come from the presence of the nested definitions,
            // not from their contents.
            self.bool_attr(node, pred::ELASTIC, mat.is_elastic());
            self.bool_attr(node, pred::PLASTIC, mat.is_plastic());
        }
        Ok(())
    }

    fn add_sections(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.sections.len(), "adding sections");
        for sec in &doc.sections {
            let node = self.mint(&sec.name, class::SECTION)?;
            self.type_stmt(node, class::SECTION);
            self.str_attr(node, pred::SECTION_NAME, &sec.name);
            self.str_attr(node, pred::SECTION_TYPE, &sec.section_type);
            self.rel(model, pred::HAS_SECTION, node);
        }
        Ok(())
    }

    fn add_objects(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.objects.len(), "adding objects");
        for obj in &doc.objects {
            let obj_node = self.mint(&obj.name, class::OBJECT)?;
            self.type_stmt(obj_node, class::OBJECT);
            self.str_attr(obj_node, pred::OBJECT_NAME, &obj.name);
            self.rel(model, pred::HAS_OBJECT, obj_node);

            let mesh_node = self.mint(&format!("{}_Mesh", obj.name), class::MESH)?;
            self.type_stmt(mesh_node, class::MESH);
            self.int_attr(mesh_node, pred::NODES, obj.mesh.node_count);
            self.rel(obj_node, pred::HAS_MESH, mesh_node);

            for (i, elem) in obj.mesh.elements.iter().enumerate() {
                let elem_node = self.mint(&format!("Element_{}", elem.id), class::ELEMENT)?;
                self.type_stmt(elem_node, class::ELEMENT);
                // Unrecognized kinds keep the generic Element type only.
                if let Some(kind) = ElementKind::parse(&elem.kind) {
                    self.type_stmt(elem_node, kind.class_name());
                }
                self.int_attr(elem_node, pred::NODE_COUNT, elem.node_count);
                self.int_attr(elem_node, pred::FACE_COUNT, elem.face_count);
                self.int_attr(elem_node, pred::DOFS, elem.dofs.len() as i64);
                self.rel(mesh_node, pred::HAS_ELEMENT, elem_node);

                let section = resolve_id(
                    &self.registry,
                    "elements",
                    i,
                    class::SECTION,
                    pred::SECTION_NAME,
                    elem.section,
                    &doc.sections,
                    |s| s.id,
                    |s| s.name.as_str(),
                )?;
                self.rel(elem_node, pred::ELEMENT_SECTION, section);

                let material = resolve_name(
                    &self.registry,
                    "elements",
                    i,
                    class::MATERIAL,
                    pred::MATERIAL_NAME,
                    &elem.material,
                )?;
                self.rel(elem_node, pred::ELEMENT_MATERIAL, material);
            }
        }
        Ok(())
    }

    fn add_assembly(&mut self, model: NodeId, assembly: &AssemblyDef) -> GraphResult<NodeId> {
        let node = self.mint(&assembly.name, class::ASSEMBLY)?;
        self.type_stmt(node, class::ASSEMBLY);
        self.str_attr(node, pred::ASSEMBLY_NAME, &assembly.name);
        self.rel(model, pred::HAS_ASSEMBLY, node);
        Ok(node)
    }

    fn add_instances(&mut self, assembly: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.assembly.instances.len(), "adding instances");
        for (i, inst) in doc.assembly.instances.iter().enumerate() {
            let node = self.mint(&inst.name, class::INSTANCE)?;
            self.type_stmt(node, class::INSTANCE);
            self.str_attr(node, pred::INSTANCE_NAME, &inst.name);
            self.rel(assembly, pred::HAS_INSTANCE, node);

            let object = resolve_id(
                &self.registry,
                "instances",
                i,
                class::OBJECT,
                pred::OBJECT_NAME,
                inst.referenced_object,
                &doc.objects,
                |o| o.id,
                |o| o.name.as_str(),
            )?;
            self.rel(node, pred::REFERENCED_OBJECT, object);
        }
        Ok(())
    }

    fn add_boundary_conditions(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.bc.len(), "adding boundary conditions");
        for (i, bc) in doc.bc.iter().enumerate() {
            // Synthetic identity, 1-based, in document order.
            let node = self.mint(&format!("bc_{}", i + 1), class::BOUNDARY_CONDITION)?;
            self.type_stmt(node, class::BOUNDARY_CONDITION);
            self.rel(model, pred::HAS_BOUNDARY_CONDITION, node);

            for &inst_id in &bc.instances {
                let instance = resolve_id(
                    &self.registry,
                    "bc",
                    i,
                    class::INSTANCE,
                    pred::INSTANCE_NAME,
                    inst_id,
                    &doc.assembly.instances,
                    |r| r.id,
                    |r| r.name.as_str(),
                )?;
                self.rel(node, pred::APPLIED_TO, instance);
            }
        }
        Ok(())
    }

    fn add_load_cases(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.load_cases.len(), "adding load cases");
        for case in &doc.load_cases {
            let node = self.mint(&case.name, class::LOAD_CASE)?;
            self.type_stmt(node, class::LOAD_CASE);
            self.str_attr(node, pred::LOADCASE_NAME, &case.name);
            self.str_attr(node, pred::LOADCASE_TYPE, &case.case_type);
            self.rel(model, pred::HAS_LOADCASE, node);
        }
        Ok(())
    }

    fn add_loads(&mut self, model: NodeId, doc: &OsamDocument) -> GraphResult<()> {
        debug!(count = doc.loads.len(), "adding loads");
        for (i, load) in doc.loads.iter().enumerate() {
            let node = self.mint(&format!("load_{}", i + 1), class::LOAD)?;
            self.type_stmt(node, class::LOAD);
            self.str_attr(node, pred::LOAD_TYPE, &load.load_type);
            self.rel(model, pred::HAS_LOAD, node);

            // Loads hang off both the model root and their owning case.
            let case = resolve_name(
                &self.registry,
                "loads",
                i,
                class::LOAD_CASE,
                pred::LOADCASE_NAME,
                &load.case_name,
            )?;
            self.rel(case, pred::HAS_LOAD, node);

            for &inst_id in &load.instances {
                let instance = resolve_id(
                    &self.registry,
                    "loads",
                    i,
                    class::INSTANCE,
                    pred::INSTANCE_NAME,
                    inst_id,
                    &doc.assembly.instances,
                    |r| r.id,
                    |r| r.name.as_str(),
                )?;
                self.rel(node, pred::APPLIED_TO, instance);
            }
        }
        Ok(())
    }

    // -- statement helpers ------------------------------------------------

    fn mint(&mut self, local: &str, class: &'static str) -> GraphResult<NodeId> {
        self.registry.mint(&mut self.graph, Ns::Inst, local, class)
    }

    fn rdf_type(&mut self) -> NodeId {
        self.registry.create_or_get(&mut self.graph, Ns::Rdf, "type")
    }

    fn type_stmt(&mut self, subject: NodeId, class_local: &'static str) {
        let predicate = self.rdf_type();
        let class_node = self
            .registry
            .create_or_get(&mut self.graph, Ns::Sso, class_local);
        self.graph
            .add_statement(subject, predicate, Term::Node(class_node));
    }

    fn str_attr(&mut self, subject: NodeId, pred_local: &'static str, value: &str) {
        let predicate = self
            .registry
            .create_or_get(&mut self.graph, Ns::Sso, pred_local);
        self.graph
            .add_statement(subject, predicate, Term::Str(value.to_string()));
        self.registry.record_attribute(subject, pred_local, value);
    }

    fn int_attr(&mut self, subject: NodeId, pred_local: &'static str, value: i64) {
        let predicate = self
            .registry
            .create_or_get(&mut self.graph, Ns::Sso, pred_local);
        self.graph.add_statement(subject, predicate, Term::Int(value));
    }

    fn bool_attr(&mut self, subject: NodeId, pred_local: &'static str, value: bool) {
        let predicate = self
            .registry
            .create_or_get(&mut self.graph, Ns::Sso, pred_local);
        self.graph
            .add_statement(subject, predicate, Term::Bool(value));
    }

    fn rel(&mut self, subject: NodeId, pred_local: &'static str, object: NodeId) {
        let predicate = self
            .registry
            .create_or_get(&mut self.graph, Ns::Sso, pred_local);
        self.graph
            .add_statement(subject, predicate, Term::Node(object));
    }
}
