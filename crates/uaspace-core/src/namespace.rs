//! Standard namespace builder
//!
//! Seeds the bootstrap taxonomy every server shares: the root folder and its
//! children, and the reference-type hierarchy below `References`. The insert
//! order here is part of the conformance surface; changing it changes the
//! snapshot other implementations compare against.

use crate::attribute::{AttributeId, AttributeStore};
use crate::node_class::NodeClass;
use crate::node_id::{NodeId, ObjectId};
use crate::reference::ReferenceDescription;
use crate::space::AddressSpace;
use crate::store::ReferenceStore;
use crate::value::{LocalizedText, QualifiedName};

/// Builds the standard namespace
#[derive(Debug, Clone, Default)]
pub struct NamespaceBuilder {
    root_attributes: bool,
    references: ReferenceStore,
    attributes: AttributeStore,
}

impl NamespaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also seed the attribute records of the root folder
    pub fn with_root_attributes(mut self, enabled: bool) -> Self {
        self.root_attributes = enabled;
        self
    }

    pub fn build(mut self) -> AddressSpace {
        self.root();
        self.types();
        self.reference_types();
        self.references();
        self.hierarchical_references();
        self.has_child();

        if self.root_attributes {
            self.root_folder_attributes();
        }

        tracing::info!(
            "Built standard namespace: {} references, {} attributes",
            self.references.len(),
            self.attributes.len()
        );

        AddressSpace::new(self.references, self.attributes)
    }

    fn add_reference(
        &mut self,
        source: ObjectId,
        reference_type: ObjectId,
        target: ObjectId,
        name: &str,
        target_class: NodeClass,
        type_definition: NodeId,
    ) {
        let reference = ReferenceDescription::new(reference_type, target, name, target_class)
            .with_type_definition(type_definition);
        self.references.insert(source.into(), reference);
    }

    fn add_subtype(&mut self, source: ObjectId, target: ObjectId) {
        self.add_reference(
            source,
            ObjectId::HasSubtype,
            target,
            target.browse_name(),
            NodeClass::ReferenceType,
            NodeId::null(),
        );
    }

    fn add_folder(&mut self, source: ObjectId, target: ObjectId) {
        self.add_reference(
            source,
            ObjectId::Organizes,
            target,
            target.browse_name(),
            NodeClass::Object,
            ObjectId::FolderType.into(),
        );
    }

    fn add_folder_type_definition(&mut self, source: ObjectId, name: &str) {
        self.add_reference(
            source,
            ObjectId::HasTypeDefinition,
            ObjectId::FolderType,
            name,
            NodeClass::ObjectType,
            NodeId::null(),
        );
    }

    fn root(&mut self) {
        self.add_folder_type_definition(ObjectId::RootFolder, ObjectId::FolderType.browse_name());
        self.add_folder(ObjectId::RootFolder, ObjectId::ObjectsFolder);
        self.add_folder(ObjectId::RootFolder, ObjectId::TypesFolder);
        self.add_folder(ObjectId::RootFolder, ObjectId::ViewsFolder);
    }

    fn types(&mut self) {
        self.add_folder_type_definition(ObjectId::TypesFolder, ObjectId::FolderType.browse_name());
        self.add_folder(ObjectId::TypesFolder, ObjectId::ReferenceTypesFolder);
    }

    fn reference_types(&mut self) {
        // Browse name is the folder's own, not FolderType.
        self.add_folder_type_definition(
            ObjectId::ReferenceTypesFolder,
            ObjectId::ReferenceTypesFolder.browse_name(),
        );
        self.add_reference(
            ObjectId::ReferenceTypesFolder,
            ObjectId::Organizes,
            ObjectId::References,
            ObjectId::References.browse_name(),
            NodeClass::ReferenceType,
            NodeId::null(),
        );
    }

    fn references(&mut self) {
        self.add_subtype(ObjectId::References, ObjectId::HierarchicalReferences);
        self.add_subtype(ObjectId::References, ObjectId::NonHierarchicalReferences);
    }

    fn hierarchical_references(&mut self) {
        self.add_subtype(ObjectId::HierarchicalReferences, ObjectId::HasChild);
        self.add_subtype(ObjectId::HierarchicalReferences, ObjectId::HasEventSource);
        self.add_subtype(ObjectId::HierarchicalReferences, ObjectId::Organizes);
    }

    fn has_child(&mut self) {
        self.add_subtype(ObjectId::HasChild, ObjectId::Aggregates);
        self.add_subtype(ObjectId::HasChild, ObjectId::HasSubtype);
    }

    fn root_folder_attributes(&mut self) {
        let root = NodeId::from(ObjectId::RootFolder);
        self.attributes.add_value(root.clone(), AttributeId::NodeId, root.clone());
        self.attributes
            .add_value(root.clone(), AttributeId::NodeClass, NodeClass::Object.bits());
        self.attributes
            .add_value(root.clone(), AttributeId::BrowseName, QualifiedName::new(0, "root"));
        self.attributes
            .add_value(root.clone(), AttributeId::DisplayName, LocalizedText::new("root"));
        self.attributes
            .add_value(root.clone(), AttributeId::Description, LocalizedText::new("root"));
        self.attributes.add_value(root.clone(), AttributeId::WriteMask, 0u32);
        self.attributes.add_value(root, AttributeId::UserWriteMask, 0u32);
    }
}

/// Standard namespace with the root folder attributes
pub fn standard_namespace() -> AddressSpace {
    NamespaceBuilder::new().with_root_attributes(true).build()
}
