use crate::{Breakdown, ChangeError, DENOMINATIONS, MAX_AMOUNT};

// Sentinel value representing a sum no coin combination has reached yet.
const IMPOSSIBLE: u32 = u32::MAX;

// Bottom-up dynamic programming: builds the optimal coin count for every sum
// up to `amount`, then walks the recorded choices backward to recover the
// actual coins.
//
// For each sum x and each coin c <= x, using c as the last coin gives a
// candidate of min_count[x - c] + 1; the tables keep whichever candidate is
// smallest. Both tables are flat vectors allocated once per call, which is
// where the O(amount) time and space of this solver comes from.
pub fn make_change(amount: u64) -> Result<Breakdown, ChangeError> {
    if amount > MAX_AMOUNT {
        return Err(ChangeError::AmountTooLarge { amount, max: MAX_AMOUNT });
    }
    let target = amount as usize;

    // All sums start as IMPOSSIBLE until a coin combination reaches them.
    let mut min_count = vec![IMPOSSIBLE; target + 1];
    // last_coin[x] is the denomination picked to achieve min_count[x]; 0 = unset.
    let mut last_coin = vec![0u64; target + 1];

    // Base case: sum 0 needs no coins (the empty multiset).
    min_count[0] = 0;

    for &coin in &DENOMINATIONS {
        for x in coin as usize..=target {
            let below = min_count[x - coin as usize];
            if below != IMPOSSIBLE && below + 1 < min_count[x] {
                min_count[x] = below + 1;
                last_coin[x] = coin;
            }
        }
    }

    // Reconstruction: take the recorded last coin at each step until the
    // remainder hits 0. An unset entry means some intermediate sum was never
    // reached, which the presence of denomination 1 rules out.
    let mut result = Breakdown::new();
    let mut remaining = target;
    while remaining > 0 {
        let coin = last_coin[remaining];
        if coin == 0 {
            return Err(ChangeError::Unreachable { amount: remaining as u64 });
        }
        result.add(coin, 1);
        remaining -= coin as usize;
    }
    Ok(result)
}
