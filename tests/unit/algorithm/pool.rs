//! Tests for the per-attempt possibility pool

#[cfg(test)]
mod tests {
    use panelmatrix::algorithm::pool::PossibilityPool;
    use panelmatrix::model::Inventory;

    // Tests the pool holds one unit per declared panel
    // Verified by building the pool from remaining instead of declared quantity
    #[test]
    fn test_pool_from_inventory() {
        let inventory = Inventory::from_quantities(&[3, 0, 2]);
        let pool = PossibilityPool::from_inventory(&inventory);

        assert_eq!(pool.len(), 5);
        assert_eq!(pool.count_of(0), 3);
        assert_eq!(pool.count_of(1), 0);
        assert_eq!(pool.count_of(2), 2);
    }

    // Tests taking a colour removes exactly one unit of it
    // Verified by removing every unit of the colour
    #[test]
    fn test_take_colour() {
        let inventory = Inventory::from_quantities(&[2, 1]);
        let mut pool = PossibilityPool::from_inventory(&inventory);

        assert_eq!(pool.take_colour(0), Some(0));
        assert_eq!(pool.count_of(0), 1);
        assert_eq!(pool.len(), 2);

        assert_eq!(pool.take_colour(1), Some(1));
        assert_eq!(pool.take_colour(1), None);
    }

    // Tests positional access stays within the pool
    // Verified by indexing without a bounds check
    #[test]
    fn test_take_at_bounds() {
        let inventory = Inventory::from_quantities(&[1, 1]);
        let mut pool = PossibilityPool::from_inventory(&inventory);

        assert_eq!(pool.peek(2), None);
        assert_eq!(pool.take_at(2), None);

        let first = pool.peek(0);
        assert_eq!(pool.take_at(0), first);
        assert_eq!(pool.len(), 1);
    }

    // Tests the scan finds the first matching unit
    // Verified by returning the last match
    #[test]
    fn test_position_where() {
        let inventory = Inventory::from_quantities(&[2, 1]);
        let pool = PossibilityPool::from_inventory(&inventory);

        assert_eq!(pool.position_where(|colour| colour == 1), Some(2));
        assert_eq!(pool.position_where(|colour| colour == 5), None);
    }

    // Tests an empty pool yields nothing
    // Verified by returning a default colour from an empty pool
    #[test]
    fn test_empty_pool() {
        let mut pool = PossibilityPool::from_inventory(&Inventory::default());

        assert!(pool.is_empty());
        assert_eq!(pool.take_colour(0), None);
        assert_eq!(pool.take_at(0), None);
    }
}
