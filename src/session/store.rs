//! Owning session that keeps the matrix in step with its inputs
//!
//! Every mutation of the inventory or grid re-runs generation, so the stored
//! matrix always belongs to the current inputs or is empty.

use crate::algorithm::executor::MatrixGenerator;
use crate::algorithm::usage::{clear_usage, record_usage};
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::io::error::{AlgorithmError, Result};
use crate::model::{ColourEntry, ColourMatrix, GenerationOutcome, GridSpec, Inventory};
use crate::model::{OutcomeFlags, OutcomeKind};

/// Inventory, grid and the last generated matrix, owned together
pub struct PanelStore {
    inventory: Inventory,
    grid: GridSpec,
    matrix: ColourMatrix,
    flags: OutcomeFlags,
    generator: MatrixGenerator,
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new(
            Inventory::default_palette(),
            GridSpec::new(DEFAULT_ROWS, DEFAULT_COLUMNS),
            MatrixGenerator::from_entropy(),
        )
    }
}

impl PanelStore {
    /// Create a session; no matrix exists until the first generation
    pub fn new(inventory: Inventory, grid: GridSpec, generator: MatrixGenerator) -> Self {
        Self {
            inventory,
            grid,
            matrix: ColourMatrix::empty(),
            flags: OutcomeFlags::default(),
            generator,
        }
    }

    /// Current inventory, including usage of the current matrix
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Current grid size
    pub const fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Current matrix; empty after any failure
    ///
    /// A skipped request leaves the last matrix in place, so its shape can
    /// differ from [`Self::grid`].
    pub const fn matrix(&self) -> &ColourMatrix {
        &self.matrix
    }

    /// Failure flags of the last evaluated generation
    pub const fn flags(&self) -> OutcomeFlags {
        self.flags
    }

    /// Append a colour and regenerate
    pub fn add_colour(&mut self, entry: ColourEntry) -> OutcomeKind {
        self.inventory.push(entry);
        self.attempt_generate()
    }

    /// Remove a colour and regenerate
    ///
    /// The matrix is cleared before regenerating since its indices refer to
    /// the old numbering, even when the new inventory is too small to evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidColourIndex`] if `index` is out of range
    pub fn remove_colour(&mut self, index: usize) -> Result<OutcomeKind> {
        let colour_count = self.inventory.len();
        if index >= colour_count {
            return Err(AlgorithmError::InvalidColourIndex {
                index,
                colour_count,
            });
        }

        self.clear_matrix();
        self.inventory.remove(index);
        Ok(self.attempt_generate())
    }

    /// Change the panel supply of one colour and regenerate
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidColourIndex`] if `index` is out of range
    pub fn set_quantity(&mut self, index: usize, quantity: usize) -> Result<OutcomeKind> {
        let colour_count = self.inventory.len();
        let entry = self
            .inventory
            .entries_mut()
            .get_mut(index)
            .ok_or(AlgorithmError::InvalidColourIndex {
                index,
                colour_count,
            })?;
        entry.quantity = quantity;
        Ok(self.attempt_generate())
    }

    /// Replace the grid size and regenerate
    ///
    /// An out-of-range grid is skipped, so the previous matrix stays and
    /// `matrix().grid()` no longer matches [`Self::grid`].
    pub fn set_grid(&mut self, grid: GridSpec) -> OutcomeKind {
        self.grid = grid;
        self.attempt_generate()
    }

    /// Run generation for the current inputs and apply its outcome
    pub fn attempt_generate(&mut self) -> OutcomeKind {
        let outcome = self.generator.generate(&self.inventory, self.grid).outcome;
        let kind = outcome.kind();

        match outcome {
            GenerationOutcome::Skipped => {}
            GenerationOutcome::Success(matrix) => {
                record_usage(&mut self.inventory, &matrix);
                self.matrix = matrix;
                self.flags = OutcomeFlags::default();
            }
            failure => {
                self.clear_matrix();
                self.flags = failure.flags();
            }
        }

        kind
    }

    fn clear_matrix(&mut self) {
        self.matrix = ColourMatrix::empty();
        clear_usage(&mut self.inventory);
    }
}
