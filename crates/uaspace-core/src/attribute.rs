//! Attribute records and the read/write services over them

use crate::error::{Error, Result};
use crate::node_id::NodeId;
use crate::value::{DataValue, StatusCode, Variant};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named property of a node, numbered as in the standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum AttributeId {
    NodeId = 1,
    NodeClass = 2,
    BrowseName = 3,
    DisplayName = 4,
    Description = 5,
    WriteMask = 6,
    UserWriteMask = 7,
    IsAbstract = 8,
    Symmetric = 9,
    InverseName = 10,
    ContainsNoLoops = 11,
    EventNotifier = 12,
    Value = 13,
    DataType = 14,
    ValueRank = 15,
    ArrayDimensions = 16,
    AccessLevel = 17,
    UserAccessLevel = 18,
    MinimumSamplingInterval = 19,
    Historizing = 20,
    Executable = 21,
    UserExecutable = 22,
}

impl AttributeId {
    pub const ALL: [AttributeId; 22] = [
        AttributeId::NodeId,
        AttributeId::NodeClass,
        AttributeId::BrowseName,
        AttributeId::DisplayName,
        AttributeId::Description,
        AttributeId::WriteMask,
        AttributeId::UserWriteMask,
        AttributeId::IsAbstract,
        AttributeId::Symmetric,
        AttributeId::InverseName,
        AttributeId::ContainsNoLoops,
        AttributeId::EventNotifier,
        AttributeId::Value,
        AttributeId::DataType,
        AttributeId::ValueRank,
        AttributeId::ArrayDimensions,
        AttributeId::AccessLevel,
        AttributeId::UserAccessLevel,
        AttributeId::MinimumSamplingInterval,
        AttributeId::Historizing,
        AttributeId::Executable,
        AttributeId::UserExecutable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NodeId => "NodeId",
            Self::NodeClass => "NodeClass",
            Self::BrowseName => "BrowseName",
            Self::DisplayName => "DisplayName",
            Self::Description => "Description",
            Self::WriteMask => "WriteMask",
            Self::UserWriteMask => "UserWriteMask",
            Self::IsAbstract => "IsAbstract",
            Self::Symmetric => "Symmetric",
            Self::InverseName => "InverseName",
            Self::ContainsNoLoops => "ContainsNoLoops",
            Self::EventNotifier => "EventNotifier",
            Self::Value => "Value",
            Self::DataType => "DataType",
            Self::ValueRank => "ValueRank",
            Self::ArrayDimensions => "ArrayDimensions",
            Self::AccessLevel => "AccessLevel",
            Self::UserAccessLevel => "UserAccessLevel",
            Self::MinimumSamplingInterval => "MinimumSamplingInterval",
            Self::Historizing => "Historizing",
            Self::Executable => "Executable",
            Self::UserExecutable => "UserExecutable",
        }
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for AttributeId {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| *id as u32 == v)
            .ok_or_else(|| Error::UnknownAttribute(v.to_string()))
    }
}

impl FromStr for AttributeId {
    type Err = Error;

    /// Accepts the symbolic name (case-insensitive) or the numeric id
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(v) = s.parse::<u32>() {
            return Self::try_from(v);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAttribute(s.to_string()))
    }
}

/// One stored `(node, attribute) -> value` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub node_id: NodeId,
    pub attribute_id: AttributeId,
    pub value: DataValue,
}

/// Request to read one attribute of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadValueId {
    pub node_id: NodeId,
    pub attribute_id: AttributeId,
}

impl ReadValueId {
    pub fn new(node_id: impl Into<NodeId>, attribute_id: AttributeId) -> Self {
        Self {
            node_id: node_id.into(),
            attribute_id,
        }
    }
}

/// Request to write one attribute of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteValue {
    pub node_id: NodeId,
    pub attribute_id: AttributeId,
    pub value: DataValue,
}

impl WriteValue {
    pub fn new(node_id: impl Into<NodeId>, attribute_id: AttributeId, value: impl Into<Variant>) -> Self {
        Self {
            node_id: node_id.into(),
            attribute_id,
            value: DataValue::Value(value.into()),
        }
    }
}

/// Flat list of attribute records with exact-match lookup
///
/// Lookup is a linear scan; the bootstrap attribute set is a handful of
/// records.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    records: Vec<AttributeRecord>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a good value for `(node, attribute)`
    pub fn add_value(&mut self, node_id: NodeId, attribute_id: AttributeId, value: impl Into<Variant>) {
        self.records.push(AttributeRecord {
            node_id,
            attribute_id,
            value: DataValue::Value(value.into()),
        });
    }

    /// First record matching `(node, attribute)`, or `BadNotReadable`
    pub fn get_value(&self, node_id: &NodeId, attribute_id: AttributeId) -> DataValue {
        self.records
            .iter()
            .find(|r| r.node_id == *node_id && r.attribute_id == attribute_id)
            .map(|r| r.value.clone())
            .unwrap_or_else(DataValue::not_readable)
    }

    /// One result per request, in request order
    pub fn read(&self, requests: &[ReadValueId]) -> Vec<DataValue> {
        let values: Vec<DataValue> = requests
            .iter()
            .map(|req| self.get_value(&req.node_id, req.attribute_id))
            .collect();

        tracing::debug!(
            "Read {} attributes, {} not readable",
            values.len(),
            values.iter().filter(|v| v.status().is_bad()).count()
        );
        values
    }

    /// Every write is rejected with `BadWriteNotSupported`; nothing is mutated
    pub fn write(&self, requests: &[WriteValue]) -> Vec<StatusCode> {
        tracing::debug!("Rejecting {} write requests", requests.len());
        vec![StatusCode::BAD_WRITE_NOT_SUPPORTED; requests.len()]
    }

    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
