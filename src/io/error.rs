//! Error types and path context for crate operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all crate operations
///
/// Infeasible or unlucky generation requests are not errors; they are reported
/// through [`crate::model::outcome::GenerationOutcome`].
#[derive(Debug)]
pub enum AlgorithmError {
    /// Input data is malformed (negative counts, fractional sizes, missing fields)
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Failed to parse an inventory document
    InventoryLoad {
        /// Path to the document
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Colour identifier cannot be interpreted as an RGB(A) colour
    InvalidColour {
        /// The offending colour identifier
        colour_id: String,
    },

    /// Colour index exceeds the inventory
    InvalidColourIndex {
        /// The invalid colour index
        index: usize,
        /// Number of colours in the inventory
        colour_count: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InventoryLoad { path, source } => {
                write!(
                    f,
                    "Failed to load inventory '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidColour { colour_id } => {
                write!(f, "Colour '{colour_id}' is not a hex RGB(A) value")
            }
            Self::InvalidColourIndex {
                index,
                colour_count,
            } => {
                write!(
                    f,
                    "Colour index {index} is out of bounds ({colour_count} colours)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InventoryLoad { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`AlgorithmError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidInput {
        reason: reason.to_string(),
    }
}
