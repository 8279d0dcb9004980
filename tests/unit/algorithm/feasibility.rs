//! Tests for the supply and variety pre-checks

#[cfg(test)]
mod tests {
    use panelmatrix::algorithm::feasibility::{
        Infeasibility, check_feasibility, check_supply, check_variety, min_secondary_supply,
    };
    use panelmatrix::model::{GridSpec, Inventory};

    // Tests supply passes when it exactly covers the grid
    // Verified by using a strict comparison
    #[test]
    fn test_supply_exactly_sufficient() {
        let inventory = Inventory::from_quantities(&[5, 4]);
        assert_eq!(check_supply(&inventory, GridSpec::new(3, 3)), Ok(()));
    }

    // Tests supply failure carries required and available counts
    // Verified by swapping the reported fields
    #[test]
    fn test_supply_shortfall_reported() {
        let inventory = Inventory::from_quantities(&[200, 199]);
        assert_eq!(
            check_supply(&inventory, GridSpec::new(20, 20)),
            Err(Infeasibility::NotEnoughPanels {
                required: 400,
                available: 399,
            })
        );
    }

    // Tests half-board threshold rounds down on odd grids
    // Verified by rounding up
    #[test]
    fn test_min_secondary_supply() {
        assert_eq!(min_secondary_supply(GridSpec::new(3, 3)), 4);
        assert_eq!(min_secondary_supply(GridSpec::new(2, 2)), 2);
        assert_eq!(min_secondary_supply(GridSpec::new(1, 1)), 0);
        assert_eq!(min_secondary_supply(GridSpec::new(8, 12)), 48);
    }

    // Tests variety fails when non-dominant colours cannot cover half the board
    // Verified by including the dominant colour in the secondary sum
    #[test]
    fn test_variety_shortfall() {
        let inventory = Inventory::from_quantities(&[9, 3]);
        assert_eq!(
            check_variety(&inventory, GridSpec::new(3, 3)),
            Err(Infeasibility::NotEnoughVariety {
                required: 4,
                available: 3,
            })
        );
    }

    // Tests variety passes at the threshold
    // Verified by using a non-strict comparison for failure
    #[test]
    fn test_variety_at_threshold() {
        let inventory = Inventory::from_quantities(&[9, 4]);
        assert_eq!(check_variety(&inventory, GridSpec::new(3, 3)), Ok(()));

        let even = Inventory::from_quantities(&[1, 1, 1, 1]);
        assert_eq!(check_feasibility(&even, GridSpec::new(2, 2)), Ok(()));
    }

    // Tests the dominant colour is excluded only once on ties
    // Verified by excluding every colour with the maximum quantity
    #[test]
    fn test_variety_with_tied_dominant() {
        let inventory = Inventory::from_quantities(&[200, 200]);
        assert_eq!(check_feasibility(&inventory, GridSpec::new(20, 20)), Ok(()));
    }

    // Tests supply failure short-circuits the variety check
    // Verified by running both checks and returning the last failure
    #[test]
    fn test_supply_checked_before_variety() {
        let inventory = Inventory::from_quantities(&[10, 1]);
        assert!(matches!(
            check_feasibility(&inventory, GridSpec::new(4, 4)),
            Err(Infeasibility::NotEnoughPanels { .. })
        ));

        let lopsided = Inventory::from_quantities(&[300, 100, 99]);
        assert!(matches!(
            check_feasibility(&lopsided, GridSpec::new(20, 20)),
            Err(Infeasibility::NotEnoughVariety { .. })
        ));
    }

    // Tests failure messages include both counts
    // Verified by omitting the available count from the message
    #[test]
    fn test_infeasibility_display() {
        let message = Infeasibility::NotEnoughPanels {
            required: 400,
            available: 399,
        }
        .to_string();
        assert!(message.contains("400"));
        assert!(message.contains("399"));

        let message = Infeasibility::NotEnoughVariety {
            required: 4,
            available: 3,
        }
        .to_string();
        assert!(message.contains('4'));
        assert!(message.contains('3'));
    }
}
