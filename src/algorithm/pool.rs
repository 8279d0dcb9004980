use crate::model::Inventory;

/// Drawable panel units for one generation attempt
///
/// Holds one entry per panel, tagged with its colour index. Taking a unit
/// swap-removes it, so unit order is not stable across takes.
#[derive(Debug, Clone, Default)]
pub struct PossibilityPool {
    units: Vec<usize>,
}

impl PossibilityPool {
    /// Build a pool holding `quantity` units of every colour
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut units = Vec::with_capacity(inventory.total_supply());
        for (colour, entry) in inventory.entries().iter().enumerate() {
            units.extend(std::iter::repeat_n(colour, entry.quantity));
        }
        Self { units }
    }

    /// Units left to draw
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether nothing is left to draw
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units left of one colour
    pub fn count_of(&self, colour: usize) -> usize {
        self.units.iter().filter(|&&unit| unit == colour).count()
    }

    /// Colour of the unit at `position` without removing it
    pub fn peek(&self, position: usize) -> Option<usize> {
        self.units.get(position).copied()
    }

    /// Remove and return the unit at `position`
    pub fn take_at(&mut self, position: usize) -> Option<usize> {
        (position < self.units.len()).then(|| self.units.swap_remove(position))
    }

    /// Position of the first unit whose colour satisfies `predicate`
    pub fn position_where(&self, predicate: impl Fn(usize) -> bool) -> Option<usize> {
        self.units.iter().position(|&unit| predicate(unit))
    }

    /// Remove one unit of a specific colour
    ///
    /// Used for the first cell, which has no neighbours to avoid and always
    /// receives the dominant colour.
    pub fn take_colour(&mut self, colour: usize) -> Option<usize> {
        let position = self.position_where(|unit| unit == colour)?;
        self.take_at(position)
    }
}
