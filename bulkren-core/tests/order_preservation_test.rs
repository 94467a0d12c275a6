use bulkren_core::compute_plan;
use proptest::prelude::*;
use std::path::PathBuf;

proptest! {
    #[test]
    fn plan_order_matches_input_order(
        names in proptest::collection::vec("[a-z]{1,8}\\.(txt|md|rs)", 1..20)
    ) {
        let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        let plan = compute_plan("[aeiou]", "_", &files).unwrap();

        prop_assert_eq!(plan.len(), files.len());
        for (item, name) in plan.iter().zip(&names) {
            prop_assert_eq!(&item.base_name, name);
        }
    }

    #[test]
    fn reversed_input_gives_reversed_plan(
        names in proptest::collection::vec("[a-z]{1,8}[0-9]{0,3}\\.txt", 1..20)
    ) {
        let forward = compute_plan("[0-9]+", "#", &names).unwrap();
        let reversed_names: Vec<String> = names.iter().rev().cloned().collect();
        let backward = compute_plan("[0-9]+", "#", &reversed_names).unwrap();

        let mut backward_items = backward.items.clone();
        backward_items.reverse();
        prop_assert_eq!(forward.items, backward_items);
    }

    #[test]
    fn non_matching_names_are_unchanged(name in "[a-z]{1,12}\\.txt") {
        let plan = compute_plan("[0-9]", "x", &[&name]).unwrap();
        prop_assert!(plan.items[0].is_noop());
        prop_assert_eq!(plan.items[0].old_path(), plan.items[0].new_path());
    }
}
