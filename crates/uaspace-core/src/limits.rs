//! Input validation for requests arriving from outside the core
//!
//! The services accept any input; callers that parse user input check it
//! here first so nonsensical requests never reach the address space.

use crate::node_class::{NodeClass, NodeClassMask};

/// Every defined node class bit set; View is the highest class
pub const VALID_NODE_CLASS_BITS: u32 = (NodeClass::View as u32) * 2 - 1;

/// Maximum attributes in a single read (1000)
pub const MAX_READ_BATCH: usize = 1000;

/// Maximum values in a single write (1000)
pub const MAX_WRITE_BATCH: usize = 1000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    UndefinedNodeClassBits { mask: u32, undefined: u32 },
    TooManyReads { count: usize, max: usize },
    TooManyWrites { count: usize, max: usize },
    EmptyRequest,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedNodeClassBits { mask, undefined } => write!(
                f,
                "Node class mask 0x{:X} sets undefined bits 0x{:X} (valid bits 0x{:X})",
                mask, undefined, VALID_NODE_CLASS_BITS
            ),
            Self::TooManyReads { count, max } => {
                write!(f, "Too many attributes in read: {} (max {})", count, max)
            }
            Self::TooManyWrites { count, max } => {
                write!(f, "Too many values in write: {} (max {})", count, max)
            }
            Self::EmptyRequest => write!(f, "Request cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::Error {
    fn from(e: ValidationError) -> Self {
        crate::error::Error::Validation(e.to_string())
    }
}

/// Validate node class mask
pub fn validate_node_class_mask(mask: NodeClassMask) -> Result<(), ValidationError> {
    let undefined = mask.bits() & !VALID_NODE_CLASS_BITS;
    if undefined != 0 {
        return Err(ValidationError::UndefinedNodeClassBits {
            mask: mask.bits(),
            undefined,
        });
    }
    Ok(())
}

/// Validate read batch size
pub fn validate_read_batch(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::EmptyRequest);
    }
    if count > MAX_READ_BATCH {
        return Err(ValidationError::TooManyReads {
            count,
            max: MAX_READ_BATCH,
        });
    }
    Ok(())
}

/// Validate write batch size
pub fn validate_write_batch(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::EmptyRequest);
    }
    if count > MAX_WRITE_BATCH {
        return Err(ValidationError::TooManyWrites {
            count,
            max: MAX_WRITE_BATCH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_node_class_mask() {
        assert!(validate_node_class_mask(NodeClassMask::new(0)).is_ok());
        assert!(validate_node_class_mask(NodeClassMask::new(0xFF)).is_ok());
        assert_eq!(
            validate_node_class_mask(NodeClassMask::new(0x1FF)),
            Err(ValidationError::UndefinedNodeClassBits {
                mask: 0x1FF,
                undefined: 0x100
            })
        );
    }

    #[test]
    fn test_valid_bits_cover_every_class() {
        assert_eq!(VALID_NODE_CLASS_BITS, 0xFF);
        let all = NodeClassMask::from_classes(&NodeClass::ALL);
        assert_eq!(all.bits(), VALID_NODE_CLASS_BITS);
        assert!(validate_node_class_mask(all).is_ok());
    }

    #[test]
    fn test_validate_batches() {
        assert!(validate_read_batch(1).is_ok());
        assert!(validate_read_batch(0).is_err());
        assert!(validate_read_batch(MAX_READ_BATCH + 1).is_err());
        assert!(validate_write_batch(3).is_ok());
        assert!(validate_write_batch(MAX_WRITE_BATCH + 1).is_err());
    }
}
