//! Typed values, status codes and the name/text types shared by references
//! and attributes

use crate::node_id::NodeId;
use serde::{Deserialize, Serialize};

/// Name qualified by the namespace that defines it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "{}:", self.namespace_index)?;
        }
        f.write_str(&self.name)
    }
}

/// Human readable text with an optional locale
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub text: String,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            locale: None,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Outcome code attached to service results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0x0000_0000);
    pub const BAD_NOT_READABLE: StatusCode = StatusCode(0x803A_0000);
    pub const BAD_WRITE_NOT_SUPPORTED: StatusCode = StatusCode(0x8073_0000);

    /// Severity lives in the top two bits
    pub fn is_good(self) -> bool {
        self.0 & 0xC000_0000 == 0
    }

    pub fn is_bad(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::GOOD => Some("Good"),
            Self::BAD_NOT_READABLE => Some("BadNotReadable"),
            Self::BAD_WRITE_NOT_SUPPORTED => Some("BadWriteNotSupported"),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

/// Value shapes an attribute can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Boolean(bool),
    Int32(i32),
    UInt32(u32),
    String(String),
    NodeId(NodeId),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::NodeId(v) => write!(f, "{}", v),
            Self::QualifiedName(v) => write!(f, "{}", v),
            Self::LocalizedText(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Self::UInt32(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<NodeId> for Variant {
    fn from(v: NodeId) -> Self {
        Self::NodeId(v)
    }
}

impl From<QualifiedName> for Variant {
    fn from(v: QualifiedName) -> Self {
        Self::QualifiedName(v)
    }
}

impl From<LocalizedText> for Variant {
    fn from(v: LocalizedText) -> Self {
        Self::LocalizedText(v)
    }
}

/// Result of reading one attribute: either a value or only a status
///
/// A missing attribute is `Status(BAD_NOT_READABLE)`, never an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataValue {
    Value(Variant),
    Status(StatusCode),
}

impl DataValue {
    pub fn not_readable() -> Self {
        Self::Status(StatusCode::BAD_NOT_READABLE)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Value(_) => StatusCode::GOOD,
            Self::Status(code) => *code,
        }
    }

    pub fn value(&self) -> Option<&Variant> {
        match self {
            Self::Value(v) => Some(v),
            Self::Status(_) => None,
        }
    }
}

impl From<Variant> for DataValue {
    fn from(v: Variant) -> Self {
        Self::Value(v)
    }
}

impl std::fmt::Display for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Status(code) => write!(f, "<{}>", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_severity() {
        assert!(StatusCode::GOOD.is_good());
        assert!(!StatusCode::GOOD.is_bad());
        assert!(StatusCode::BAD_NOT_READABLE.is_bad());
        assert!(StatusCode::BAD_WRITE_NOT_SUPPORTED.is_bad());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StatusCode::BAD_NOT_READABLE.to_string(), "BadNotReadable");
        assert_eq!(StatusCode(0x8001_0000).to_string(), "0x80010000");
    }

    #[test]
    fn test_empty_value_is_not_a_miss() {
        let empty = DataValue::Value(Variant::String(String::new()));
        assert_eq!(empty.status(), StatusCode::GOOD);
        assert_ne!(empty, DataValue::not_readable());
        assert!(DataValue::not_readable().value().is_none());
    }

    #[test]
    fn test_qualified_name_display() {
        assert_eq!(QualifiedName::new(0, "Objects").to_string(), "Objects");
        assert_eq!(QualifiedName::new(2, "Pump").to_string(), "2:Pump");
    }
}
