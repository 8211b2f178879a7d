//! Browse queries and the filter engine that answers them

use crate::error::{Error, Result};
use crate::node_class::{NodeClass, NodeClassMask};
use crate::node_id::NodeId;
use crate::reference::ReferenceDescription;
use crate::store::ReferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Which reference directions a browse returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseDirection {
    #[default]
    Forward,
    Inverse,
    Both,
}

impl BrowseDirection {
    pub fn accepts(self, is_forward: bool) -> bool {
        match self {
            Self::Forward => is_forward,
            Self::Inverse => !is_forward,
            Self::Both => true,
        }
    }
}

impl FromStr for BrowseDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "inverse" => Ok(Self::Inverse),
            "both" => Ok(Self::Both),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

/// Browse query (follows the builder pattern of the other query types)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseDescription {
    /// Node whose references are listed
    pub node_id: NodeId,

    #[serde(default)]
    pub browse_direction: BrowseDirection,

    /// Reference type filter; null means any type
    #[serde(default)]
    pub reference_type_id: NodeId,

    /// Also accept subtypes of `reference_type_id`
    #[serde(default)]
    pub include_subtypes: bool,

    /// Target node class filter; zero means any class
    #[serde(default)]
    pub node_class_mask: NodeClassMask,
}

impl BrowseDescription {
    /// Browse every forward reference of `node_id`
    pub fn new(node_id: impl Into<NodeId>) -> Self {
        Self {
            node_id: node_id.into(),
            browse_direction: BrowseDirection::Forward,
            reference_type_id: NodeId::null(),
            include_subtypes: false,
            node_class_mask: NodeClassMask::ALL,
        }
    }

    pub fn with_direction(mut self, direction: BrowseDirection) -> Self {
        self.browse_direction = direction;
        self
    }

    /// Only references of exactly this type
    pub fn with_reference_type(mut self, reference_type_id: impl Into<NodeId>) -> Self {
        self.reference_type_id = reference_type_id.into();
        self.include_subtypes = false;
        self
    }

    /// References of this type or any of its subtypes
    pub fn with_reference_type_and_subtypes(mut self, reference_type_id: impl Into<NodeId>) -> Self {
        self.reference_type_id = reference_type_id.into();
        self.include_subtypes = true;
        self
    }

    pub fn with_node_class_mask(mut self, mask: impl Into<NodeClassMask>) -> Self {
        self.node_class_mask = mask.into();
        self
    }

    pub fn with_node_classes(mut self, classes: &[NodeClass]) -> Self {
        self.node_class_mask = NodeClassMask::from_classes(classes);
        self
    }
}

/// Reference types a browse accepts
enum TypeFilter {
    Any,
    Exact(NodeId),
    Closure(BTreeSet<NodeId>),
}

impl TypeFilter {
    fn accepts(&self, reference_type_id: &NodeId) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(id) => id == reference_type_id,
            Self::Closure(ids) => ids.contains(reference_type_id),
        }
    }
}

/// Browse engine
pub struct BrowseEngine;

impl BrowseEngine {
    /// Execute a browse query
    ///
    /// Returns the references of `query.node_id` that pass the direction,
    /// reference type and node class filters, in insertion order. An unknown
    /// node yields an empty result.
    pub fn browse(store: &ReferenceStore, query: &BrowseDescription) -> Vec<ReferenceDescription> {
        let type_filter = Self::type_filter(store, query);

        let result: Vec<ReferenceDescription> = store
            .references_from(&query.node_id)
            .filter(|r| query.browse_direction.accepts(r.is_forward))
            .filter(|r| type_filter.accepts(&r.reference_type_id))
            .filter(|r| query.node_class_mask.accepts(r.node_class))
            .cloned()
            .collect();

        tracing::debug!(
            "Browsed {}: direction={:?}, reference_type={}, subtypes={}, mask={}, {} references",
            query.node_id,
            query.browse_direction,
            query.reference_type_id,
            query.include_subtypes,
            query.node_class_mask.bits(),
            result.len()
        );

        result
    }

    /// Continuation of a paged browse; paging is not implemented, so there is
    /// never anything left to return
    pub fn browse_next() -> Vec<ReferenceDescription> {
        Vec::new()
    }

    /// Resolve the accepted reference types once per query
    fn type_filter(store: &ReferenceStore, query: &BrowseDescription) -> TypeFilter {
        if query.reference_type_id.is_null() {
            TypeFilter::Any
        } else if query.include_subtypes {
            TypeFilter::Closure(store.select_nodes_hierarchy([query.reference_type_id.clone()]))
        } else {
            TypeFilter::Exact(query.reference_type_id.clone())
        }
    }
}
