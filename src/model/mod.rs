//! Data model shared by the generator and its callers
//!
//! This module contains:
//! - Colour inventory and supply aggregates
//! - Grid dimensions and the generated matrix
//! - Generation outcomes

/// Grid dimensions and colour matrices
pub mod grid;
/// Colour entries and inventory aggregates
pub mod inventory;
/// Tagged generation results and failure flags
pub mod outcome;

pub use grid::{ColourMatrix, GridSpec};
pub use inventory::{ColourEntry, Inventory};
pub use outcome::{GenerationOutcome, OutcomeFlags, OutcomeKind};
