//! JSON inventory documents describing colours and grid size
//!
//! ```json
//! { "rows": 8, "columns": 12,
//!   "colours": [ { "colour": "#F5D0A9", "quantity": 100 } ] }
//! ```

use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::io::error::{AlgorithmError, Result, WithPath, invalid_input};
use crate::model::{ColourEntry, GridSpec, Inventory};
use serde::Deserialize;
use std::path::Path;

/// One colour as written in a document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourRecord {
    /// Colour identifier
    pub colour: String,
    /// Panels available
    pub quantity: usize,
    /// Accepted for compatibility with exported reports; recomputed on generation
    #[serde(default)]
    pub quantity_used: usize,
}

/// Parsed inventory document
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryDocument {
    /// Number of rows (major axis)
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Number of columns (minor axis)
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Colours in identity order
    pub colours: Vec<ColourRecord>,
}

const fn default_rows() -> usize {
    DEFAULT_ROWS
}

const fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl InventoryDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidInput`] if the text is not a valid
    /// document, including negative or fractional counts
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| invalid_input(&e))
    }

    /// Read and parse a document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid document
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read inventory")?;
        serde_json::from_str(&text).map_err(|source| AlgorithmError::InventoryLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Inventory with usage cleared
    pub fn inventory(&self) -> Inventory {
        self.colours
            .iter()
            .map(|record| ColourEntry::new(record.colour.clone(), record.quantity))
            .collect()
    }

    /// Requested grid size
    pub const fn grid(&self) -> GridSpec {
        GridSpec::new(self.rows, self.columns)
    }
}
