//! Reference (edge) types

use crate::node_class::NodeClass;
use crate::node_id::NodeId;
use crate::value::{LocalizedText, QualifiedName};
use serde::{Deserialize, Serialize};

/// A typed, directed reference from a source node to a target node
///
/// The source is not part of the description; the store keys references by
/// source. Inverse edges are never materialized, so a reference seen from
/// its source is either forward or inverse, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDescription {
    /// Reference type node (e.g. `Organizes`, `HasSubtype`)
    pub reference_type_id: NodeId,

    pub is_forward: bool,

    /// Target node
    pub node_id: NodeId,

    pub browse_name: QualifiedName,

    pub display_name: LocalizedText,

    /// Class of the target node, used by node class masks
    pub node_class: NodeClass,

    /// Type definition of the target, or null
    pub type_definition: NodeId,
}

impl ReferenceDescription {
    /// Create a forward reference; both names default to `name` in namespace 0
    pub fn new(
        reference_type_id: impl Into<NodeId>,
        node_id: impl Into<NodeId>,
        name: &str,
        node_class: NodeClass,
    ) -> Self {
        Self {
            reference_type_id: reference_type_id.into(),
            is_forward: true,
            node_id: node_id.into(),
            browse_name: QualifiedName::new(0, name),
            display_name: LocalizedText::new(name),
            node_class,
            type_definition: NodeId::null(),
        }
    }

    /// Mark this reference as inverse
    pub fn inverse(mut self) -> Self {
        self.is_forward = false;
        self
    }

    pub fn with_type_definition(mut self, type_definition: impl Into<NodeId>) -> Self {
        self.type_definition = type_definition.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_id::ObjectId;

    #[test]
    fn test_reference_creation() {
        let reference = ReferenceDescription::new(
            ObjectId::Organizes,
            ObjectId::ObjectsFolder,
            "Objects",
            NodeClass::Object,
        )
        .with_type_definition(ObjectId::FolderType);

        assert!(reference.is_forward);
        assert_eq!(reference.reference_type_id, ObjectId::Organizes);
        assert_eq!(reference.browse_name.name, "Objects");
        assert_eq!(reference.display_name.text, "Objects");
        assert_eq!(reference.type_definition, ObjectId::FolderType);
    }

    #[test]
    fn test_inverse_reference() {
        let reference = ReferenceDescription::new(
            ObjectId::Organizes,
            ObjectId::RootFolder,
            "Root",
            NodeClass::Object,
        )
        .inverse();

        assert!(!reference.is_forward);
        assert!(reference.type_definition.is_null());
    }
}
