//! Fold helpers built on a fresh [`Calculator`].

use crate::calculator::Calculator;

/// Default seed for [`calculate_sum`].
pub const SUM_SEED: i64 = 0;

/// Default seed for [`calculate_product`].
pub const PRODUCT_SEED: i64 = 1;

/// Sum `numbers` onto `initial` (default 0), in order.
pub fn calculate_sum(numbers: &[i64], initial: Option<i64>) -> i64 {
    let mut calc = Calculator::new(initial.unwrap_or(SUM_SEED));
    for &num in numbers {
        calc.add(num);
    }
    calc.value()
}

/// Multiply `initial` (default 1) by each of `numbers`, in order.
pub fn calculate_product(numbers: &[i64], initial: Option<i64>) -> i64 {
    let mut calc = Calculator::new(initial.unwrap_or(PRODUCT_SEED));
    for &num in numbers {
        calc.multiply(num);
    }
    calc.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(calculate_sum(&[1, 2, 3, 4], None), 10);
        assert_eq!(calculate_sum(&[1, 2, 3], Some(10)), 16);
        assert_eq!(calculate_sum(&[], None), 0);
        assert_eq!(calculate_sum(&[], Some(-3)), -3);
    }

    #[test]
    fn test_product() {
        assert_eq!(calculate_product(&[2, 3, 4], None), 24);
        assert_eq!(calculate_product(&[2, 3], Some(5)), 30);
        assert_eq!(calculate_product(&[], None), 1);
        assert_eq!(calculate_product(&[7, 0, 9], None), 0);
    }
}
