//! Node classes and the class mask used to filter browse results

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What kind of entity a node represents
///
/// Discriminants are the standard bit values, so a class can be tested
/// directly against a [`NodeClassMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum NodeClass {
    #[default]
    Unspecified = 0,
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

impl NodeClass {
    pub const ALL: [NodeClass; 8] = [
        NodeClass::Object,
        NodeClass::Variable,
        NodeClass::Method,
        NodeClass::ObjectType,
        NodeClass::VariableType,
        NodeClass::ReferenceType,
        NodeClass::DataType,
        NodeClass::View,
    ];

    pub fn bits(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Object => "Object",
            Self::Variable => "Variable",
            Self::Method => "Method",
            Self::ObjectType => "ObjectType",
            Self::VariableType => "VariableType",
            Self::ReferenceType => "ReferenceType",
            Self::DataType => "DataType",
            Self::View => "View",
        }
    }
}

impl std::fmt::Display for NodeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownNodeClass(s.to_string()))
    }
}

/// Bitmask of node classes; zero means "no filter"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeClassMask(pub u32);

impl NodeClassMask {
    /// Mask that accepts every class
    pub const ALL: NodeClassMask = NodeClassMask(0);

    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn from_classes(classes: &[NodeClass]) -> Self {
        Self(classes.iter().fold(0, |bits, class| bits | class.bits()))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_unfiltered(self) -> bool {
        self.0 == 0
    }

    /// Whether a target of `class` survives this mask
    pub fn accepts(self, class: NodeClass) -> bool {
        self.is_unfiltered() || self.0 & class.bits() != 0
    }
}

impl From<NodeClass> for NodeClassMask {
    fn from(class: NodeClass) -> Self {
        Self(class.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mask_accepts_everything() {
        let mask = NodeClassMask::ALL;
        assert!(mask.accepts(NodeClass::Object));
        assert!(mask.accepts(NodeClass::Unspecified));
    }

    #[test]
    fn test_mask_filters_by_bit() {
        let mask = NodeClassMask::from_classes(&[NodeClass::ObjectType, NodeClass::Variable]);
        assert_eq!(mask.bits(), 10);
        assert!(mask.accepts(NodeClass::ObjectType));
        assert!(mask.accepts(NodeClass::Variable));
        assert!(!mask.accepts(NodeClass::Object));
        assert!(!mask.accepts(NodeClass::Unspecified));
    }

    #[test]
    fn test_parse_node_class() {
        assert_eq!("objecttype".parse::<NodeClass>().unwrap(), NodeClass::ObjectType);
        assert_eq!("View".parse::<NodeClass>().unwrap(), NodeClass::View);
        assert!("Folder".parse::<NodeClass>().is_err());
    }
}
