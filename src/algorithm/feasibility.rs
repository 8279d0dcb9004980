use crate::model::{GridSpec, Inventory};
use std::fmt;

/// Structural reason a request cannot be satisfied, found before any placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasibility {
    /// Fewer panels in total than cells in the grid
    NotEnoughPanels {
        /// Cells to fill
        required: usize,
        /// Panels across all colours
        available: usize,
    },
    /// Non-dominant colours cannot cover half of the grid
    NotEnoughVariety {
        /// Minimum non-dominant supply for this grid
        required: usize,
        /// Panels across all non-dominant colours
        available: usize,
    },
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughPanels {
                required,
                available,
            } => write!(f, "{available} panels cannot fill {required} cells"),
            Self::NotEnoughVariety {
                required,
                available,
            } => write!(
                f,
                "{available} non-dominant panels, at least {required} needed"
            ),
        }
    }
}

/// Check total supply covers every cell
///
/// # Errors
///
/// Returns [`Infeasibility::NotEnoughPanels`] when the sum of quantities is
/// below the number of cells
pub fn check_supply(inventory: &Inventory, grid: GridSpec) -> Result<(), Infeasibility> {
    let required = grid.required_cells();
    let available = inventory.total_supply();
    if available < required {
        return Err(Infeasibility::NotEnoughPanels {
            required,
            available,
        });
    }
    Ok(())
}

/// Minimum supply the non-dominant colours must provide
///
/// Half the board rounded down; any less and the dominant colour is forced
/// next to itself.
pub const fn min_secondary_supply(grid: GridSpec) -> usize {
    grid.required_cells() / 2
}

/// Check the non-dominant colours can separate the dominant one
///
/// # Errors
///
/// Returns [`Infeasibility::NotEnoughVariety`] when the secondary supply is
/// below half the board
pub fn check_variety(inventory: &Inventory, grid: GridSpec) -> Result<(), Infeasibility> {
    let required = min_secondary_supply(grid);
    let available = inventory.secondary_supply();
    if available < required {
        return Err(Infeasibility::NotEnoughVariety {
            required,
            available,
        });
    }
    Ok(())
}

/// Run the supply check, then the variety check
///
/// # Errors
///
/// Returns the first failing check; the variety check never runs when supply fails
pub fn check_feasibility(inventory: &Inventory, grid: GridSpec) -> Result<(), Infeasibility> {
    check_supply(inventory, grid)?;
    check_variety(inventory, grid)
}
