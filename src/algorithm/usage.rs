use crate::model::{ColourMatrix, Inventory};

/// Count occurrences of each colour index in a matrix
///
/// Indices at or beyond `colour_count` are ignored.
pub fn usage_counts(colour_count: usize, matrix: &ColourMatrix) -> Vec<usize> {
    let mut counts = vec![0; colour_count];
    for colour in matrix.iter() {
        if let Some(count) = counts.get_mut(colour) {
            *count += 1;
        }
    }
    counts
}

/// Replace every entry's `quantity_used` with its count in `matrix`
pub fn record_usage(inventory: &mut Inventory, matrix: &ColourMatrix) {
    let counts = usage_counts(inventory.len(), matrix);
    for (entry, count) in inventory.entries_mut().iter_mut().zip(counts) {
        entry.quantity_used = count;
    }
}

/// Reset every entry's `quantity_used` to zero
pub fn clear_usage(inventory: &mut Inventory) {
    for entry in inventory.entries_mut() {
        entry.quantity_used = 0;
    }
}
