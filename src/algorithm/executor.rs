use crate::{
    algorithm::feasibility::{Infeasibility, check_feasibility},
    algorithm::pool::PossibilityPool,
    algorithm::selection::{CellSelector, Predecessors, RandomSelector},
    io::configuration::MAX_GENERATION_ATTEMPTS,
    model::{ColourMatrix, GenerationOutcome, GridSpec, Inventory},
};

/// Outcome of one generation call and the attempts it consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Terminal state of the call
    pub outcome: GenerationOutcome,
    /// Full-grid attempts made; zero when a pre-check ended the call
    pub attempts: usize,
}

impl Generation {
    const fn without_attempts(outcome: GenerationOutcome) -> Self {
        Self {
            outcome,
            attempts: 0,
        }
    }
}

/// Fills a grid with inventory colours so that no two axis neighbours match
///
/// Each call gates on the feasibility pre-checks, then runs randomized
/// attempts against a fresh [`PossibilityPool`] until one fills every cell or
/// the attempt bound is reached.
pub struct MatrixGenerator {
    selector: CellSelector,
    max_attempts: usize,
}

impl MatrixGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self::from_selector(RandomSelector::new(seed))
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::from_selector(RandomSelector::from_entropy())
    }

    /// Create a generator drawing from an existing random source
    pub const fn from_selector(random: RandomSelector) -> Self {
        Self {
            selector: CellSelector::new(random),
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Override the attempt bound
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Attempt bound used by [`Self::generate`]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate a matrix for the inventory and grid
    pub fn generate(&mut self, inventory: &Inventory, grid: GridSpec) -> Generation {
        self.generate_with_observer(inventory, grid, |_| {})
    }

    /// Generate a matrix, calling `on_attempt` with the attempt number after each attempt
    pub fn generate_with_observer(
        &mut self,
        inventory: &Inventory,
        grid: GridSpec,
        mut on_attempt: impl FnMut(usize),
    ) -> Generation {
        if !grid.is_within_bounds() || !inventory.has_enough_colours() {
            log::trace!(
                "skipping generation: {}x{} grid, {} colours",
                grid.major_count,
                grid.minor_count,
                inventory.len()
            );
            return Generation::without_attempts(GenerationOutcome::Skipped);
        }

        if let Err(reason) = check_feasibility(inventory, grid) {
            log::debug!("infeasible request: {reason}");
            let outcome = match reason {
                Infeasibility::NotEnoughPanels { .. } => GenerationOutcome::NotEnoughPanels,
                Infeasibility::NotEnoughVariety { .. } => GenerationOutcome::NotEnoughVariety,
            };
            return Generation::without_attempts(outcome);
        }

        let Some(dominant) = inventory.dominant_index() else {
            return Generation::without_attempts(GenerationOutcome::Skipped);
        };

        for attempt in 1..=self.max_attempts {
            let matrix = self.attempt(inventory, grid, dominant);
            on_attempt(attempt);
            if let Some(matrix) = matrix {
                log::trace!("matrix generated after {attempt} attempts");
                return Generation {
                    outcome: GenerationOutcome::Success(matrix),
                    attempts: attempt,
                };
            }
        }

        log::debug!("no matrix found within {} attempts", self.max_attempts);
        Generation {
            outcome: GenerationOutcome::GenerationFailed,
            attempts: self.max_attempts,
        }
    }

    /// One full pass over the grid against a fresh pool
    fn attempt(
        &mut self,
        inventory: &Inventory,
        grid: GridSpec,
        dominant: usize,
    ) -> Option<ColourMatrix> {
        let mut pool = PossibilityPool::from_inventory(inventory);
        let mut slices: Vec<Vec<usize>> = Vec::with_capacity(grid.major_count);

        for _ in 0..grid.major_count {
            let slice = self.fill_slice(
                &mut pool,
                slices.last().map(Vec::as_slice),
                grid.minor_count,
                dominant,
            );
            // A short slice means a dead end; the partial grid is discarded
            if slice.len() < grid.minor_count {
                return None;
            }
            slices.push(slice);
        }

        ColourMatrix::from_slices(&slices)
    }

    /// Fill one slice, stopping at the first cell with no admissible colour
    fn fill_slice(
        &mut self,
        pool: &mut PossibilityPool,
        previous: Option<&[usize]>,
        minor_count: usize,
        dominant: usize,
    ) -> Vec<usize> {
        let mut slice = Vec::with_capacity(minor_count);

        for minor in 0..minor_count {
            let predecessors = Predecessors::new(
                previous.and_then(|cells| cells.get(minor)).copied(),
                slice.last().copied(),
            );

            let colour = if predecessors.is_origin() {
                pool.take_colour(dominant)
            } else {
                self.selector.select(pool, predecessors)
            };

            match colour {
                Some(colour) => slice.push(colour),
                None => break,
            }
        }

        slice
    }
}
