//! Result of a single generation request

use serde::Serialize;

use crate::model::grid::ColourMatrix;

/// Terminal state of one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Every cell was filled without adjacent repeats
    Success(ColourMatrix),
    /// Total supply is smaller than the number of cells
    NotEnoughPanels,
    /// Non-dominant colours cannot cover half of the grid
    NotEnoughVariety,
    /// Every attempt hit a dead end
    GenerationFailed,
    /// Grid size out of range or too few colours; nothing was evaluated
    Skipped,
}

/// Data-less mirror of [`GenerationOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// See [`GenerationOutcome::Success`]
    Success,
    /// See [`GenerationOutcome::NotEnoughPanels`]
    NotEnoughPanels,
    /// See [`GenerationOutcome::NotEnoughVariety`]
    NotEnoughVariety,
    /// See [`GenerationOutcome::GenerationFailed`]
    GenerationFailed,
    /// See [`GenerationOutcome::Skipped`]
    Skipped,
}

impl OutcomeKind {
    /// Stable lowercase label used in reports and logs
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotEnoughPanels => "not_enough_panels",
            Self::NotEnoughVariety => "not_enough_variety",
            Self::GenerationFailed => "generation_failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Mutually exclusive failure flags for presentation layers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeFlags {
    /// Supply check failed
    pub not_enough_panels: bool,
    /// Variety check failed
    pub not_enough_variety: bool,
    /// Attempts were exhausted
    pub generate_failed: bool,
}

impl OutcomeFlags {
    /// Whether any failure flag is raised
    pub const fn any(&self) -> bool {
        self.not_enough_panels || self.not_enough_variety || self.generate_failed
    }
}

impl GenerationOutcome {
    /// Discriminant without the matrix
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::NotEnoughPanels => OutcomeKind::NotEnoughPanels,
            Self::NotEnoughVariety => OutcomeKind::NotEnoughVariety,
            Self::GenerationFailed => OutcomeKind::GenerationFailed,
            Self::Skipped => OutcomeKind::Skipped,
        }
    }

    /// Whether a matrix was produced
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The generated matrix, if any
    pub const fn matrix(&self) -> Option<&ColourMatrix> {
        match self {
            Self::Success(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// Take the generated matrix, if any
    pub fn into_matrix(self) -> Option<ColourMatrix> {
        match self {
            Self::Success(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// Failure flags; all false for success and skipped calls
    pub const fn flags(&self) -> OutcomeFlags {
        OutcomeFlags {
            not_enough_panels: matches!(self, Self::NotEnoughPanels),
            not_enough_variety: matches!(self, Self::NotEnoughVariety),
            generate_failed: matches!(self, Self::GenerationFailed),
        }
    }
}
