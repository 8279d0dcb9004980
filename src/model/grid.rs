//! Grid dimensions and the generated colour matrix
//!
//! Adjacency is defined on two axes: the major axis enumerates slices and the
//! minor axis enumerates cells within a slice. Rows map to the major axis.

use ndarray::{Array2, ArrayView1};

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};

/// Requested grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Number of slices (rows)
    pub major_count: usize,
    /// Cells per slice (columns)
    pub minor_count: usize,
}

impl GridSpec {
    /// Create a grid specification
    pub const fn new(major_count: usize, minor_count: usize) -> Self {
        Self {
            major_count,
            minor_count,
        }
    }

    /// Number of cells to fill
    pub const fn required_cells(&self) -> usize {
        self.major_count * self.minor_count
    }

    /// Whether both dimensions lie in the accepted range
    pub const fn is_within_bounds(&self) -> bool {
        self.major_count >= MIN_GRID_DIMENSION
            && self.major_count <= MAX_GRID_DIMENSION
            && self.minor_count >= MIN_GRID_DIMENSION
            && self.minor_count <= MAX_GRID_DIMENSION
    }
}

/// Colour indices for every cell of a completed grid
///
/// Values index the [`crate::model::inventory::Inventory`] the matrix was
/// generated from. A matrix is either complete or empty, never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourMatrix {
    cells: Array2<usize>,
}

impl Default for ColourMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl ColourMatrix {
    /// A matrix with no cells
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((0, 0)),
        }
    }

    /// Assemble a matrix from equally long slices
    ///
    /// Returns `None` if any slice length differs from the first.
    pub fn from_slices(slices: &[Vec<usize>]) -> Option<Self> {
        let major = slices.len();
        let minor = slices.first().map_or(0, Vec::len);
        if slices.iter().any(|slice| slice.len() != minor) {
            return None;
        }

        let flat: Vec<usize> = slices.iter().flatten().copied().collect();
        Array2::from_shape_vec((major, minor), flat)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Number of slices
    pub fn major_count(&self) -> usize {
        self.cells.nrows()
    }

    /// Cells per slice
    pub fn minor_count(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as a grid specification
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.major_count(), self.minor_count())
    }

    /// Whether the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Colour index at (major, minor)
    pub fn get(&self, major: usize, minor: usize) -> Option<usize> {
        self.cells.get([major, minor]).copied()
    }

    /// Slices in major order
    pub fn slices(&self) -> impl Iterator<Item = ArrayView1<'_, usize>> {
        self.cells.rows().into_iter()
    }

    /// Every colour index in slice-major order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    /// Underlying array, shape (major, minor)
    pub const fn as_array(&self) -> &Array2<usize> {
        &self.cells
    }

    /// Copy out as nested vectors, one per slice
    pub fn to_nested(&self) -> Vec<Vec<usize>> {
        self.slices().map(|slice| slice.to_vec()).collect()
    }

    /// First cell sharing a colour with its predecessor on either axis
    pub fn find_adjacent_duplicate(&self) -> Option<(usize, usize)> {
        self.cells.indexed_iter().find_map(|((major, minor), &colour)| {
            let above = major
                .checked_sub(1)
                .and_then(|previous| self.get(previous, minor));
            let before = minor
                .checked_sub(1)
                .and_then(|previous| self.get(major, previous));
            (above == Some(colour) || before == Some(colour)).then_some((major, minor))
        })
    }
}
