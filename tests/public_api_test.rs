//! The crate root re-exports used together, the way a caller imports them.

use sample_calc::*;

#[test]
fn test_variant_methods_resolve_with_glob_import() {
    let mut sci = ScientificCalculator::new(100);
    sci.add(50);
    sci.store_memory();
    sci.reset();
    assert_eq!(sci.value(), 0);
    assert_eq!(sci.recall_memory(), 0);

    let mut adv = AdvancedCalculator::new(0);
    adv.add(1);
    adv.subtract(3);
    adv.multiply(5);
    assert_eq!(adv.value(), -10);
    assert_eq!(adv.divide(4), Ok(-2.5));
    adv.reset();
    assert_eq!(adv.value(), 0);
    assert_eq!(adv.history(), vec!["add 1", "subtract 3"]);
}

#[test]
fn test_trait_paths_reach_the_same_behavior() {
    let mut sci = ScientificCalculator::new(9);
    sci.store_memory();
    assert_eq!(Computable::compute(&sci), Ok(3.0));
    Computable::reset(&mut sci);
    assert_eq!(sci.recall_memory(), 0);

    sci.add(4);
    sci.store_memory();
    Arithmetic::reset(&mut sci);
    assert_eq!(sci.recall_memory(), 0);

    let mut adv = AdvancedCalculator::new(0);
    Arithmetic::add(&mut adv, 2);
    assert_eq!(adv.history(), vec!["add 2"]);
}
