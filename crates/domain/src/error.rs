//! Domain error types

use thiserror::Error;

use crate::position::Position;

/// Errors that abort a render.
///
/// The `Display` output of each variant is part of the public contract and
/// must not change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The template is not a valid YAML document stream.
    #[error("{message}")]
    MalformedDocument {
        /// Message reported by the YAML decoder, unmodified.
        message: String,
    },

    /// A referenced variable has no value and unset variables are not ignored.
    #[error("{position}: \"{name}\" isn't set")]
    UnsetVariable {
        /// Position of the `$` that starts the reference.
        position: Position,
        /// The referenced name.
        name: String,
    },

    /// A referenced variable resolves to something other than a primitive.
    #[error("{position}: \"{name}\" must be either a string, number or a boolean")]
    UnsupportedValueType {
        /// Position of the `$` that starts the reference.
        position: Position,
        /// The referenced name.
        name: String,
    },
}

impl RenderError {
    /// Creates a `MalformedDocument` error from any displayable cause.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    /// Creates an `UnsetVariable` error.
    pub fn unset(name: impl Into<String>, position: Position) -> Self {
        Self::UnsetVariable {
            position,
            name: name.into(),
        }
    }

    /// Creates an `UnsupportedValueType` error.
    pub fn unsupported(name: impl Into<String>, position: Position) -> Self {
        Self::UnsupportedValueType {
            position,
            name: name.into(),
        }
    }

    /// Returns the source position, if the error is tied to a reference.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::MalformedDocument { .. } => None,
            Self::UnsetVariable { position, .. } | Self::UnsupportedValueType { position, .. } => {
                Some(*position)
            }
        }
    }
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
