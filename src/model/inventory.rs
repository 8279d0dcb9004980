//! Colour inventory with read-only supply aggregates
//!
//! An entry's position in the inventory is its identity inside generated
//! matrices, so removing an entry renumbers every colour after it.

use crate::io::configuration::{DEFAULT_PALETTE, MIN_COLOURS};

/// One colour and its panel supply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourEntry {
    /// Opaque colour identifier, usually a hex string such as `#F5D0A9`
    pub colour_id: String,
    /// Number of panels available in this colour
    pub quantity: usize,
    /// Panels of this colour placed in the current matrix
    pub quantity_used: usize,
}

impl ColourEntry {
    /// Create an entry with nothing used yet
    pub fn new(colour_id: impl Into<String>, quantity: usize) -> Self {
        Self {
            colour_id: colour_id.into(),
            quantity,
            quantity_used: 0,
        }
    }

    /// Panels still unused after the current matrix
    pub const fn remaining(&self) -> usize {
        self.quantity.saturating_sub(self.quantity_used)
    }
}

/// Ordered sequence of colour entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<ColourEntry>,
}

impl Inventory {
    /// Create an inventory from entries in identity order
    pub const fn new(entries: Vec<ColourEntry>) -> Self {
        Self { entries }
    }

    /// Build an inventory from bare quantities, naming colours by position
    pub fn from_quantities(quantities: &[usize]) -> Self {
        Self::new(
            quantities
                .iter()
                .enumerate()
                .map(|(index, &quantity)| ColourEntry::new(format!("colour-{index}"), quantity))
                .collect(),
        )
    }

    /// The starting palette of a fresh session
    pub fn default_palette() -> Self {
        Self::new(
            DEFAULT_PALETTE
                .iter()
                .map(|&(colour_id, quantity)| ColourEntry::new(colour_id, quantity))
                .collect(),
        )
    }

    /// Entries in identity order
    pub fn entries(&self) -> &[ColourEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ColourEntry] {
        &mut self.entries
    }

    /// Entry at a colour index
    pub fn get(&self, index: usize) -> Option<&ColourEntry> {
        self.entries.get(index)
    }

    /// Number of colours
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the inventory has no colours
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether there are enough colours for generation to be meaningful
    pub fn has_enough_colours(&self) -> bool {
        self.entries.len() >= MIN_COLOURS
    }

    /// Append a colour; it takes the next free index
    pub fn push(&mut self, entry: ColourEntry) {
        self.entries.push(entry);
    }

    /// Remove the colour at `index`, shifting later colours down by one
    pub fn remove(&mut self, index: usize) -> Option<ColourEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Sum of declared quantities
    pub fn total_supply(&self) -> usize {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Index of the colour with the strictly highest quantity
    ///
    /// Ties resolve to the earliest entry. Returns `None` for an empty inventory.
    pub fn dominant_index(&self) -> Option<usize> {
        let mut dominant: Option<(usize, usize)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            match dominant {
                Some((_, quantity)) if entry.quantity <= quantity => {}
                _ => dominant = Some((index, entry.quantity)),
            }
        }
        dominant.map(|(index, _)| index)
    }

    /// Sum of quantities over every colour except the dominant one
    pub fn secondary_supply(&self) -> usize {
        let dominant = self.dominant_index();
        self.entries
            .iter()
            .enumerate()
            .filter(|&(index, _)| Some(index) != dominant)
            .map(|(_, entry)| entry.quantity)
            .sum()
    }

    /// Total panels used by the current matrix
    pub fn total_used(&self) -> usize {
        self.entries.iter().map(|entry| entry.quantity_used).sum()
    }
}

impl FromIterator<ColourEntry> for Inventory {
    fn from_iter<I: IntoIterator<Item = ColourEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
