//! Error type shared by every container in the crate.

use crate::kind::ElementKind;

/// Coarse classification of a [`ContainerError`].
///
/// Mirrors the three failure families a caller has to handle: a bad element-kind tag,
/// a value (or element type) that does not fit the container's kind, and an index
/// outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidKind,
    Type,
    Index,
}

/// Errors produced by container construction and mutation.
///
/// Every fallible operation validates before touching storage, so receiving one of
/// these means the container is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// The typecode is not one of [`ElementKind::TYPECODES`].
    #[error("invalid typecode {typecode:?}, value must be one of {expected:?}", expected = ElementKind::TYPECODES)]
    InvalidKind { typecode: String },
    /// The element type of the container cannot represent the requested kind.
    #[error("{element} elements cannot be stored in a container of kind '{kind}'")]
    UnsupportedKind {
        kind: ElementKind,
        element: &'static str,
    },
    /// A value is not representable as the container's kind.
    #[error("value {value} is not representable as kind '{kind}'")]
    TypeMismatch { kind: ElementKind, value: String },
    /// Index outside `[0, len)`.
    #[error("index {index} out of range, bounds (0, {len})")]
    IndexOutOfRange { index: i128, len: usize },
}

impl ContainerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContainerError::InvalidKind { .. } => ErrorCategory::InvalidKind,
            ContainerError::UnsupportedKind { .. } | ContainerError::TypeMismatch { .. } => {
                ErrorCategory::Type
            }
            ContainerError::IndexOutOfRange { .. } => ErrorCategory::Index,
        }
    }

    #[inline]
    pub fn is_index_error(&self) -> bool {
        self.category() == ErrorCategory::Index
    }

    #[inline]
    pub fn is_type_error(&self) -> bool {
        self.category() == ErrorCategory::Type
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let e = ContainerError::InvalidKind {
            typecode: "z".into(),
        };
        assert_eq!(e.category(), ErrorCategory::InvalidKind);
        assert!(!e.is_type_error());

        let e = ContainerError::TypeMismatch {
            kind: ElementKind::I8,
            value: "300".into(),
        };
        assert!(e.is_type_error());

        let e = ContainerError::UnsupportedKind {
            kind: ElementKind::F64,
            element: "i32",
        };
        assert!(e.is_type_error());

        let e = ContainerError::IndexOutOfRange { index: -1, len: 0 };
        assert!(e.is_index_error());
    }

    #[test]
    fn test_error_messages() {
        let e = ContainerError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(e.to_string(), "index 3 out of range, bounds (0, 3)");

        let e = ContainerError::TypeMismatch {
            kind: ElementKind::U8,
            value: "-1".into(),
        };
        assert_eq!(e.to_string(), "value -1 is not representable as kind 'B'");

        let e = ContainerError::InvalidKind {
            typecode: "q".into(),
        };
        assert!(e.to_string().starts_with("invalid typecode \"q\""));
    }
}
