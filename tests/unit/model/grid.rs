//! Tests for grid specifications and colour matrices

#[cfg(test)]
mod tests {
    use panelmatrix::io::configuration::MAX_GRID_DIMENSION;
    use panelmatrix::model::{ColourMatrix, GridSpec};

    // Tests bounds are inclusive on both ends
    // Verified by making the upper bound exclusive
    #[test]
    fn test_grid_bounds() {
        assert!(GridSpec::new(1, 1).is_within_bounds());
        assert!(GridSpec::new(MAX_GRID_DIMENSION, MAX_GRID_DIMENSION).is_within_bounds());
        assert!(!GridSpec::new(0, 10).is_within_bounds());
        assert!(!GridSpec::new(10, 0).is_within_bounds());
        assert!(!GridSpec::new(52, 10).is_within_bounds());
        assert!(!GridSpec::new(10, 52).is_within_bounds());
    }

    // Tests required cells is the grid area
    // Verified by summing the dimensions
    #[test]
    fn test_required_cells() {
        assert_eq!(GridSpec::new(8, 12).required_cells(), 96);
        assert_eq!(GridSpec::new(20, 25).required_cells(), 500);
    }

    // Tests slices are assembled in major order
    // Verified by transposing during assembly
    #[test]
    fn test_from_slices() {
        let matrix = ColourMatrix::from_slices(&[vec![0, 1, 2], vec![1, 2, 0]])
            .expect("Rectangular slices");

        assert_eq!(matrix.major_count(), 2);
        assert_eq!(matrix.minor_count(), 3);
        assert_eq!(matrix.get(0, 2), Some(2));
        assert_eq!(matrix.get(1, 0), Some(1));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.grid(), GridSpec::new(2, 3));
        assert_eq!(matrix.to_nested(), vec![vec![0, 1, 2], vec![1, 2, 0]]);
        assert_eq!(matrix.slices().count(), 2);
    }

    // Tests ragged slices are rejected
    // Verified by padding short slices
    #[test]
    fn test_from_slices_rejects_ragged() {
        assert!(ColourMatrix::from_slices(&[vec![0, 1], vec![1]]).is_none());
    }

    // Tests the empty matrix has no cells
    // Verified by defaulting to a 1x1 matrix
    #[test]
    fn test_empty_matrix() {
        let matrix = ColourMatrix::default();

        assert!(matrix.is_empty());
        assert_eq!(matrix.major_count(), 0);
        assert!(matrix.to_nested().is_empty());
        assert_eq!(ColourMatrix::from_slices(&[]), Some(ColourMatrix::empty()));
    }

    // Tests duplicates are detected along both axes
    // Verified by only checking within slices
    #[test]
    fn test_find_adjacent_duplicate() {
        let clean = ColourMatrix::from_slices(&[vec![0, 1], vec![1, 0]]).expect("Rectangular");
        assert_eq!(clean.find_adjacent_duplicate(), None);

        let across = ColourMatrix::from_slices(&[vec![0, 0], vec![1, 2]]).expect("Rectangular");
        assert_eq!(across.find_adjacent_duplicate(), Some((0, 1)));

        let down = ColourMatrix::from_slices(&[vec![0, 1], vec![0, 2]]).expect("Rectangular");
        assert_eq!(down.find_adjacent_duplicate(), Some((1, 0)));
    }
}
