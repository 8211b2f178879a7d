//! Uaspace Core - In-memory OPC UA address space
//!
//! This crate provides the node, reference and attribute types of an
//! address space, the reference store with subtype resolution, the browse
//! engine, the attribute read/write services, and the builder that seeds the
//! standard reference-type taxonomy.

pub mod attribute;
pub mod browse;
pub mod error;
pub mod limits;
pub mod namespace;
pub mod node_class;
pub mod node_id;
pub mod reference;
pub mod space;
pub mod store;
pub mod value;

pub use attribute::{AttributeId, AttributeRecord, AttributeStore, ReadValueId, WriteValue};
pub use browse::{BrowseDescription, BrowseDirection, BrowseEngine};
pub use error::{Error, Result};
pub use namespace::{standard_namespace, NamespaceBuilder};
pub use node_class::{NodeClass, NodeClassMask};
pub use node_id::{Identifier, NodeId, ObjectId};
pub use reference::ReferenceDescription;
pub use space::{AddressSpace, AddressSpaceServices, NamespaceSnapshot, SnapshotReference};
pub use store::ReferenceStore;
pub use value::{DataValue, LocalizedText, QualifiedName, StatusCode, Variant};
