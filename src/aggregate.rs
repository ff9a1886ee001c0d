//! Stateless aggregation over capability-typed values.

/// Folds `combine` over `values` in input order, starting from `seed`.
///
/// The fold sees each value only through the capability type `C`, so a new
/// implementor participates without any change here or in the callers.
/// Combination follows the input order; callers that need totals stable
/// under reordering must supply an associative `combine`.
pub fn aggregate<C, T>(values: &[&C], seed: T, mut combine: impl FnMut(T, &C) -> T) -> T
where
    C: ?Sized,
{
    values.iter().copied().fold(seed, |acc, value| combine(acc, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use proptest::prelude::*;

    #[test]
    fn empty_input_returns_seed() {
        let none: [&dyn Area; 0] = [];
        let total = aggregate(&none, 42.5, |sum, shape| sum + shape.area());
        assert_eq!(total, 42.5);
    }

    #[test]
    fn combines_in_input_order() {
        let words = ["a", "b", "c"];
        let refs: Vec<&str> = words.to_vec();
        let joined = aggregate(&refs, String::new(), |mut acc, word| {
            acc.push_str(word);
            acc
        });
        assert_eq!(joined, "abc");
    }

    proptest! {
        #[test]
        fn seed_survives_empty_input(seed in any::<i64>()) {
            let none: [&str; 0] = [];
            let result = aggregate(&none, seed, |acc, _| acc + 1);
            prop_assert_eq!(result, seed);
        }

        #[test]
        fn matches_manual_fold(values in proptest::collection::vec(any::<i32>(), 0..32)) {
            let refs: Vec<&i32> = values.iter().collect();
            let total = aggregate(&refs, 0i64, |acc, v| acc + i64::from(*v));
            let expected: i64 = values.iter().map(|v| i64::from(*v)).sum();
            prop_assert_eq!(total, expected);
        }
    }
}
