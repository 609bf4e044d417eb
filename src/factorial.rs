//! Exact factorials and binomial coefficients.

/// The largest `n` for which `n!` fits in a `u128`.
pub const MAX_FACTORIAL: u8 = 34;

const ENTRIES: usize = MAX_FACTORIAL as usize + 1;

pub trait Factorial {
    fn get(&self, n: u8) -> u128;
}

/// Computes each factorial as a running product.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_FACTORIAL, "{n}! overflows");
        (2..=n as u128).product()
    }
}

/// Serves factorials from a pretabulated array.
pub struct Lookup {
    entries: [u128; ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_FACTORIAL, "{n}! overflows");
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u128; ENTRIES];
        for n in 2..ENTRIES {
            entries[n] = n as u128 * entries[n - 1];
        }
        Self { entries }
    }
}

/// The largest `n` whose factorial does not exceed `limit`.
pub fn largest_within(limit: u128, factorial: &impl Factorial) -> u8 {
    (1..=MAX_FACTORIAL)
        .take_while(|&n| factorial.get(n) <= limit)
        .last()
        .unwrap_or(0)
}

/// Binomial coefficient: the number of ways of choosing `r` items from a set of `n`.
pub fn combinations(n: u8, r: u8, factorial: &impl Factorial) -> u128 {
    assert!(n >= r, "n ({n}) < r ({r})");
    factorial.get(n) / factorial.get(r) / factorial.get(n - r)
}
