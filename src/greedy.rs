use crate::{Breakdown, DENOMINATIONS};

// Largest-first heuristic: each denomination contributes as many coins as fit
// in the remaining amount. Terminates because the smallest denomination is 1.
//
// The result always sums to `amount`, but minimality is not guaranteed by the
// algorithm itself - it holds here only because {1, 2, 5, 10, 25, 50} is a
// canonical coin system.
pub fn make_change(mut amount: u64) -> Breakdown {
    let mut result = Breakdown::new();
    for &coin in DENOMINATIONS.iter().rev() {
        if amount == 0 {
            break;
        }
        result.add(coin, amount / coin);
        amount %= coin;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount() {
        assert!(make_change(0).is_empty());
        assert_eq!(make_change(0).coin_count(), 0);
    }

    #[test]
    fn test_known_breakdowns() {
        // 100 = 50 + 50
        assert_eq!(make_change(100), Breakdown::from_iter([(50, 2)]));
        // 37 = 25 + 10 + 2
        assert_eq!(make_change(37), Breakdown::from_iter([(25, 1), (10, 1), (2, 1)]));
        // 3 = 2 + 1
        assert_eq!(make_change(3), Breakdown::from_iter([(2, 1), (1, 1)]));
    }

    #[test]
    fn test_round_trip() {
        // The breakdown must sum back to the input for every amount.
        for amount in 0..=5_000 {
            assert_eq!(make_change(amount).total(), amount, "amount {}", amount);
        }
        for amount in [99_999, 123_456, 1_000_000] {
            assert_eq!(make_change(amount).total(), amount);
        }
    }
}
