//! Error handling for shapekit
//!
//! The geometry itself never fails: degenerate inputs yield empty
//! intersections or `None`. Errors only arise at the edges of the model,
//! when shapes are created from type tags or rehydrated from records.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape model error type
///
/// Represents failures while registering shape kinds, constructing shapes
/// from type tags, or rehydrating shapes from serialized records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// No kind is registered under the requested type tag
    #[error("Unknown shape kind: {kind}")]
    UnknownKind {
        /// The unrecognised type tag.
        kind: String,
    },

    /// A kind with the same type tag is already registered
    #[error("Shape kind already registered: {kind}")]
    DuplicateKind {
        /// The type tag registered twice.
        kind: String,
    },

    /// A record's type tag does not match the shape it is applied to
    #[error("Shape kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The type tag of the receiving shape.
        expected: String,
        /// The type tag found in the record.
        actual: String,
    },
}

/// Main error type for shapekit
///
/// A unified error type that can represent any error from the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape model error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a shape model error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_))
    }

    /// Check if this error was caused by an unknown type tag
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Error::Shape(ShapeError::UnknownKind { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
