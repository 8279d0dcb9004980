//! JSON reports describing one generation outcome

use crate::algorithm::executor::Generation;
use crate::io::error::{Result, WithPath};
use crate::model::{GridSpec, Inventory, OutcomeFlags};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Colour supply alongside what the matrix consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourUsage {
    /// Colour identifier
    pub colour: String,
    /// Panels available
    pub quantity: usize,
    /// Panels placed in the matrix
    pub quantity_used: usize,
}

/// Serializable summary of a generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Outcome label, see [`crate::model::OutcomeKind::label`]
    pub outcome: &'static str,
    /// Failure flags
    pub flags: OutcomeFlags,
    /// Attempts consumed
    pub attempts: usize,
    /// Requested rows
    pub rows: usize,
    /// Requested columns
    pub columns: usize,
    /// Colour indices per row; empty unless generation succeeded
    pub matrix: Vec<Vec<usize>>,
    /// Per-colour supply and usage
    pub colours: Vec<ColourUsage>,
}

impl GenerationReport {
    /// Summarize a generation; `inventory` should already carry recorded usage
    pub fn new(generation: &Generation, inventory: &Inventory, grid: GridSpec) -> Self {
        let outcome = &generation.outcome;
        Self {
            outcome: outcome.kind().label(),
            flags: outcome.flags(),
            attempts: generation.attempts,
            rows: grid.major_count,
            columns: grid.minor_count,
            matrix: outcome
                .matrix()
                .map(crate::model::ColourMatrix::to_nested)
                .unwrap_or_default(),
            colours: inventory
                .entries()
                .iter()
                .map(|entry| ColourUsage {
                    colour: entry.colour_id.clone(),
                    quantity: entry.quantity,
                    quantity_used: entry.quantity_used,
                })
                .collect(),
        }
    }

    /// Write the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let file = File::create(path).with_path(path, "create report")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(std::io::Error::from)
            .with_path(path, "write report")?;
        writer.flush().with_path(path, "write report")
    }
}
