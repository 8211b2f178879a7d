//! Node identity and the well-known standard node ids

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier part of a node id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Uuid),
}

/// Unique identifier for a node in the address space
///
/// Serialized in the standard text form (`i=84`, `ns=2;s=Pump`, `g=<uuid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    pub fn new(namespace: u16, identifier: Identifier) -> Self {
        Self {
            namespace,
            identifier,
        }
    }

    pub fn numeric(namespace: u16, value: u32) -> Self {
        Self::new(namespace, Identifier::Numeric(value))
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self::new(namespace, Identifier::String(value.into()))
    }

    pub fn guid(namespace: u16, value: Uuid) -> Self {
        Self::new(namespace, Identifier::Guid(value))
    }

    /// The null node id (`i=0`), meaning "no node"
    pub fn null() -> Self {
        Self::numeric(0, 0)
    }

    pub fn is_null(&self) -> bool {
        self.namespace == 0 && self.identifier == Identifier::Numeric(0)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(v) => write!(f, "s={}", v),
            Identifier::Guid(v) => write!(f, "g={}", v),
        }
    }
}

impl FromStr for NodeId {
    type Err = Error;

    /// Parse the standard text form, or the symbolic name of a well-known
    /// standard node (`RootFolder`, `HasSubtype`, ...).
    fn from_str(s: &str) -> Result<Self> {
        if let Some(id) = ObjectId::from_name(s) {
            return Ok(id.into());
        }

        let invalid = || Error::InvalidNodeId(s.to_string());

        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, rest) = tail.split_once(';').ok_or_else(invalid)?;
                let ns = ns.parse::<u16>().map_err(|_| invalid())?;
                (ns, rest)
            }
            None => (0, s),
        };

        let identifier = if let Some(v) = rest.strip_prefix("i=") {
            Identifier::Numeric(v.parse().map_err(|_| invalid())?)
        } else if let Some(v) = rest.strip_prefix("s=") {
            Identifier::String(v.to_string())
        } else if let Some(v) = rest.strip_prefix("g=") {
            Identifier::Guid(Uuid::parse_str(v).map_err(|_| invalid())?)
        } else {
            return Err(invalid());
        };

        Ok(Self::new(namespace, identifier))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Well-known nodes of the standard namespace used by the bootstrap taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ObjectId {
    References = 31,
    NonHierarchicalReferences = 32,
    HierarchicalReferences = 33,
    HasChild = 34,
    Organizes = 35,
    HasEventSource = 36,
    HasTypeDefinition = 40,
    Aggregates = 44,
    HasSubtype = 45,
    FolderType = 61,
    RootFolder = 84,
    ObjectsFolder = 85,
    TypesFolder = 86,
    ViewsFolder = 87,
    ReferenceTypesFolder = 91,
}

impl ObjectId {
    pub const ALL: [ObjectId; 15] = [
        ObjectId::References,
        ObjectId::NonHierarchicalReferences,
        ObjectId::HierarchicalReferences,
        ObjectId::HasChild,
        ObjectId::Organizes,
        ObjectId::HasEventSource,
        ObjectId::HasTypeDefinition,
        ObjectId::Aggregates,
        ObjectId::HasSubtype,
        ObjectId::FolderType,
        ObjectId::RootFolder,
        ObjectId::ObjectsFolder,
        ObjectId::TypesFolder,
        ObjectId::ViewsFolder,
        ObjectId::ReferenceTypesFolder,
    ];

    /// Symbolic name, as used in the standard node set
    pub fn name(self) -> &'static str {
        match self {
            Self::References => "References",
            Self::NonHierarchicalReferences => "NonHierarchicalReferences",
            Self::HierarchicalReferences => "HierarchicalReferences",
            Self::HasChild => "HasChild",
            Self::Organizes => "Organizes",
            Self::HasEventSource => "HasEventSource",
            Self::HasTypeDefinition => "HasTypeDefinition",
            Self::Aggregates => "Aggregates",
            Self::HasSubtype => "HasSubtype",
            Self::FolderType => "FolderType",
            Self::RootFolder => "RootFolder",
            Self::ObjectsFolder => "ObjectsFolder",
            Self::TypesFolder => "TypesFolder",
            Self::ViewsFolder => "ViewsFolder",
            Self::ReferenceTypesFolder => "ReferenceTypesFolder",
        }
    }

    /// Browse name of the node; folders drop the `Folder` suffix
    pub fn browse_name(self) -> &'static str {
        match self {
            Self::RootFolder => "Root",
            Self::ObjectsFolder => "Objects",
            Self::TypesFolder => "Types",
            Self::ViewsFolder => "Views",
            Self::ReferenceTypesFolder => "ReferenceTypes",
            other => other.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub fn from_node_id(node_id: &NodeId) -> Option<Self> {
        match node_id.identifier {
            Identifier::Numeric(v) if node_id.namespace == 0 => {
                Self::ALL.into_iter().find(|id| *id as u32 == v)
            }
            _ => None,
        }
    }
}

impl From<ObjectId> for NodeId {
    fn from(id: ObjectId) -> Self {
        NodeId::numeric(0, id as u32)
    }
}

impl PartialEq<ObjectId> for NodeId {
    fn eq(&self, other: &ObjectId) -> bool {
        *self == NodeId::from(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodeId::numeric(0, 84).to_string(), "i=84");
        assert_eq!(NodeId::string(2, "Pump").to_string(), "ns=2;s=Pump");
        assert_eq!(NodeId::null().to_string(), "i=0");
    }

    #[test]
    fn test_parse_standard_forms() {
        assert_eq!("i=84".parse::<NodeId>().unwrap(), NodeId::numeric(0, 84));
        assert_eq!(
            "ns=3;s=Line1.Pump".parse::<NodeId>().unwrap(),
            NodeId::string(3, "Line1.Pump")
        );

        let guid = "72962b91-fa75-4ae6-8d28-b404dc7daf63";
        let parsed: NodeId = format!("ns=1;g={}", guid).parse().unwrap();
        assert_eq!(parsed, NodeId::guid(1, Uuid::parse_str(guid).unwrap()));
        assert_eq!(parsed.to_string(), format!("ns=1;g={}", guid));
    }

    #[test]
    fn test_parse_symbolic_name() {
        let parsed: NodeId = "RootFolder".parse().unwrap();
        assert_eq!(parsed, ObjectId::RootFolder);
        assert_eq!(ObjectId::from_node_id(&parsed), Some(ObjectId::RootFolder));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<NodeId>().is_err());
        assert!("x=1".parse::<NodeId>().is_err());
        assert!("i=abc".parse::<NodeId>().is_err());
        assert!("ns=70000;i=1".parse::<NodeId>().is_err());
        assert!("ns=1i=1".parse::<NodeId>().is_err());
        assert!("g=not-a-guid".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&NodeId::numeric(0, 45)).unwrap();
        assert_eq!(json, "\"i=45\"");
        let back: NodeId = serde_json::from_str("\"ns=2;s=Pump\"").unwrap();
        assert_eq!(back, NodeId::string(2, "Pump"));
    }

    #[test]
    fn test_text_form_keeps_whitespace() {
        let id = NodeId::string(2, "Pump ");
        let json = serde_json::to_string(&id).unwrap();
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert_eq!(" i=84".parse::<NodeId>(), Err(Error::InvalidNodeId(" i=84".to_string())));
    }

    #[test]
    fn test_browse_names() {
        assert_eq!(ObjectId::ObjectsFolder.browse_name(), "Objects");
        assert_eq!(ObjectId::HasSubtype.browse_name(), "HasSubtype");
        assert!(NodeId::null().is_null());
        assert!(!NodeId::from(ObjectId::References).is_null());
    }
}
