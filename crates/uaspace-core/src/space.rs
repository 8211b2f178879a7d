//! Address space and the service trait it implements

use crate::attribute::{AttributeRecord, AttributeStore, ReadValueId, WriteValue};
use crate::browse::{BrowseDescription, BrowseEngine};
use crate::node_id::NodeId;
use crate::reference::ReferenceDescription;
use crate::store::ReferenceStore;
use crate::value::{DataValue, StatusCode};
use serde::{Deserialize, Serialize};

/// Services the surrounding server calls on an address space
///
/// All calls are synchronous and read-only, so implementations can be shared
/// across threads without coordination.
pub trait AddressSpaceServices: Send + Sync {
    /// List the references of a node that pass the query's filters
    fn browse(&self, query: &BrowseDescription) -> Vec<ReferenceDescription>;

    /// Continue a paged browse
    fn browse_next(&self) -> Vec<ReferenceDescription>;

    /// Read attributes; one result per request, in request order
    fn read(&self, requests: &[ReadValueId]) -> Vec<DataValue>;

    /// Write attributes; one status per request, in request order
    fn write(&self, requests: &[WriteValue]) -> Vec<StatusCode>;
}

/// Populated, immutable address space
#[derive(Debug, Clone, Default)]
pub struct AddressSpace {
    references: ReferenceStore,
    attributes: AttributeStore,
}

impl AddressSpace {
    pub fn new(references: ReferenceStore, attributes: AttributeStore) -> Self {
        Self {
            references,
            attributes,
        }
    }

    pub fn references(&self) -> &ReferenceStore {
        &self.references
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Ordered dump of every reference and attribute record
    pub fn snapshot(&self) -> NamespaceSnapshot {
        NamespaceSnapshot {
            references: self
                .references
                .iter()
                .map(|(source, reference)| SnapshotReference {
                    source: source.clone(),
                    reference: reference.clone(),
                })
                .collect(),
            attributes: self.attributes.records().to_vec(),
        }
    }
}

impl AddressSpaceServices for AddressSpace {
    fn browse(&self, query: &BrowseDescription) -> Vec<ReferenceDescription> {
        BrowseEngine::browse(&self.references, query)
    }

    fn browse_next(&self) -> Vec<ReferenceDescription> {
        BrowseEngine::browse_next()
    }

    fn read(&self, requests: &[ReadValueId]) -> Vec<DataValue> {
        self.attributes.read(requests)
    }

    fn write(&self, requests: &[WriteValue]) -> Vec<StatusCode> {
        self.attributes.write(requests)
    }
}

/// A reference together with its source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotReference {
    pub source: NodeId,
    #[serde(flatten)]
    pub reference: ReferenceDescription,
}

/// Serializable image of an address space in insertion order
///
/// Two builds from the same builder produce identical JSON; interoperating
/// implementations compare these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSnapshot {
    pub references: Vec<SnapshotReference>,
    pub attributes: Vec<AttributeRecord>,
}

impl NamespaceSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
