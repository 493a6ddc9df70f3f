//! Arithmetic laws of the calculator model checked over random inputs.

use proptest::prelude::*;
use sample_calc::{
    AdvancedCalculator, Arithmetic, CalcError, Calculator, ErrorKind, ScientificCalculator,
    calculate_product, calculate_sum,
};

#[derive(Debug, Clone, Copy)]
enum Logged {
    Add(i64),
    Subtract(i64),
}

fn logged_op() -> impl Strategy<Value = Logged> {
    prop_oneof![
        any::<i64>().prop_map(Logged::Add),
        any::<i64>().prop_map(Logged::Subtract),
    ]
}

proptest! {
    #[test]
    fn add_matches_integer_addition(a in any::<i64>(), b in any::<i64>()) {
        let mut calc = Calculator::new(a);
        calc.add(b);
        prop_assert_eq!(calc.value(), a.wrapping_add(b));
    }

    #[test]
    fn divide_is_pure_and_matches_float_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let calc = Calculator::new(a);
        let quotient = calc.divide(b).unwrap();
        prop_assert_eq!(quotient, a as f64 / b as f64);
        prop_assert_eq!(calc.value(), a);
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<i64>()) {
        let err = Calculator::new(a).divide(0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn scientific_reset_clears_memory(a in any::<i64>()) {
        let mut calc = ScientificCalculator::new(a);
        calc.store_memory();
        prop_assert_eq!(calc.recall_memory(), a);
        calc.reset();
        prop_assert_eq!(calc.recall_memory(), 0);
        prop_assert_eq!(calc.value(), 0);
    }

    #[test]
    fn sum_folds_onto_initial(ns in prop::collection::vec(any::<i64>(), 0..32), i in any::<i64>()) {
        let expected = ns.iter().fold(i, |acc, n| acc.wrapping_add(*n));
        prop_assert_eq!(calculate_sum(&ns, Some(i)), expected);
    }

    #[test]
    fn product_folds_onto_initial(ns in prop::collection::vec(-1000i64..1000, 0..8), i in -1000i64..1000) {
        let expected = ns.iter().fold(i, |acc, n| acc.wrapping_mul(*n));
        prop_assert_eq!(calculate_product(&ns, Some(i)), expected);
    }

    #[test]
    fn history_records_calls_in_order(ops in prop::collection::vec(logged_op(), 0..20)) {
        let mut calc = AdvancedCalculator::default();
        let mut expected = Vec::new();
        for op in &ops {
            match *op {
                Logged::Add(n) => {
                    calc.add(n);
                    expected.push(format!("add {n}"));
                }
                Logged::Subtract(n) => {
                    calc.subtract(n);
                    expected.push(format!("subtract {n}"));
                }
            }
            calc.multiply(1);
        }

        let snapshot = calc.history();
        prop_assert_eq!(snapshot.len(), ops.len());
        prop_assert_eq!(&snapshot, &expected);

        calc.add(1);
        prop_assert_eq!(snapshot.len(), ops.len());
        prop_assert_eq!(calc.history().len(), ops.len() + 1);
    }

    #[test]
    fn square_root_of_non_negative(a in 0i64..=i64::MAX) {
        let root = ScientificCalculator::new(a).compute_square_root().unwrap();
        prop_assert_eq!(root, (a as f64).sqrt());
    }

    #[test]
    fn square_root_of_negative_is_domain_error(a in i64::MIN..0) {
        let err = ScientificCalculator::new(a).compute_square_root().unwrap_err();
        prop_assert_eq!(err, CalcError::NegativeSquareRoot { value: a });
    }
}

#[test]
fn test_documented_examples() {
    let mut calc = Calculator::new(10);
    calc.add(5);
    calc.multiply(2);
    assert_eq!(calc.value(), 30);

    let mut adv = AdvancedCalculator::new(200);
    adv.add(100);
    assert_eq!(adv.history(), vec!["add 100"]);
}

#[test]
fn test_variants_share_the_arithmetic_seam() {
    let mut units: Vec<Box<dyn Arithmetic>> = vec![
        Box::new(Calculator::new(4)),
        Box::new(ScientificCalculator::new(4)),
        Box::new(AdvancedCalculator::new(4)),
    ];

    for unit in units.iter_mut() {
        unit.add(6);
        unit.subtract(2);
        unit.multiply(3);
        assert_eq!(unit.value(), 24);
        assert_eq!(unit.divide(8).unwrap(), 3.0);
        unit.reset();
        assert_eq!(unit.value(), 0);
    }
}
