use crate::algorithm::pool::PossibilityPool;
use crate::io::configuration::SELECTION_DRAW_ATTEMPTS;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random source for stochastic draws, seedable for reproducible runs
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Colours already placed before the current cell on each axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Predecessors {
    /// Same cell position in the previous slice
    pub above: Option<usize>,
    /// Previous cell in the current slice
    pub before: Option<usize>,
}

impl Predecessors {
    /// Create from both axis neighbours
    pub const fn new(above: Option<usize>, before: Option<usize>) -> Self {
        Self { above, before }
    }

    /// Whether this is the grid origin, with no neighbours at all
    pub const fn is_origin(&self) -> bool {
        self.above.is_none() && self.before.is_none()
    }

    /// Whether `colour` differs from both neighbours
    pub fn admits(&self, colour: usize) -> bool {
        self.above != Some(colour) && self.before != Some(colour)
    }
}

/// Draws a colour for one cell from the pool
///
/// Tries a bounded number of uniform draws, keeping a unit in the pool until it
/// is accepted, then falls back to the first admissible unit in pool order.
pub struct CellSelector {
    random: RandomSelector,
    draw_attempts: usize,
}

impl CellSelector {
    /// Create a selector with the default draw cap
    pub const fn new(random: RandomSelector) -> Self {
        Self {
            random,
            draw_attempts: SELECTION_DRAW_ATTEMPTS,
        }
    }

    /// Override the number of random draws before the scan fallback
    #[must_use]
    pub const fn with_draw_attempts(mut self, draw_attempts: usize) -> Self {
        self.draw_attempts = draw_attempts;
        self
    }

    /// Remove and return a colour that differs from both predecessors
    ///
    /// Returns `None` when the pool holds no admissible unit.
    pub fn select(
        &mut self,
        pool: &mut PossibilityPool,
        predecessors: Predecessors,
    ) -> Option<usize> {
        if pool.is_empty() {
            return None;
        }

        for _ in 0..self.draw_attempts {
            let Some(position) = self.random.index(pool.len()) else {
                break;
            };
            if pool.peek(position).is_some_and(|colour| predecessors.admits(colour)) {
                return pool.take_at(position);
            }
        }

        let position = pool.position_where(|colour| predecessors.admits(colour))?;
        pool.take_at(position)
    }
}
