//! Eulerian numbers: the closed-form count of permutations by descents.

use crate::descents::{check_size, MAX_SIZE};
use crate::error::InvalidArgument;
use crate::factorial::{combinations, Factorial, Lookup};

/// The number of permutations of size `n` with exactly `k` descents, `A(n, k)`, from the
/// alternating sum `Σ (-1)^j C(n + 1, j) (k + 1 - j)^n` over `j = 0..=k`.
///
/// `A(0, 0) = 1`; `A(n, k) = 0` for `k >= n` otherwise.
///
/// # Panics
/// If `n` exceeds [`MAX_SIZE`], beyond which the intermediate terms are not representable.
pub fn eulerian_number(n: u8, k: u8, factorial: &impl Factorial) -> u128 {
    assert!(n as usize <= MAX_SIZE, "size {n} exceeds the maximum of {MAX_SIZE}");
    if n == 0 {
        return if k == 0 { 1 } else { 0 };
    }
    if k >= n {
        return 0;
    }
    let mut sum = 0i128;
    for j in 0..=k {
        let term = combinations(n + 1, j, factorial) as i128 * ((k + 1 - j) as i128).pow(n as u32);
        if j % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
    }
    debug_assert!(sum >= 0, "A({n}, {k}) = {sum}");
    sum as u128
}

/// The row `A(n, 0), ..., A(n, n - 1)` of Eulerian numbers, laid out exactly as the histogram
/// produced by [`count_permutations_by_descents`](crate::descents::count_permutations_by_descents).
pub fn eulerian_numbers(n: usize) -> Result<Vec<u128>, InvalidArgument> {
    check_size(n)?;
    let factorial = Lookup::default();
    let n = n as u8;
    Ok((0..u8::max(n, 1))
        .map(|k| eulerian_number(n, k, &factorial))
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::factorial::Calculator;

    use super::*;

    #[test]
    fn small_rows() {
        assert_eq!(vec![1], eulerian_numbers(0).unwrap());
        assert_eq!(vec![1], eulerian_numbers(1).unwrap());
        assert_eq!(vec![1, 1], eulerian_numbers(2).unwrap());
        assert_eq!(vec![1, 4, 1], eulerian_numbers(3).unwrap());
        assert_eq!(vec![1, 11, 11, 1], eulerian_numbers(4).unwrap());
        assert_eq!(vec![1, 26, 66, 26, 1], eulerian_numbers(5).unwrap());
        assert_eq!(
            vec![1, 120, 1191, 2416, 1191, 120, 1],
            eulerian_numbers(7).unwrap()
        );
    }

    #[test]
    fn out_of_range_descents() {
        let factorial = Calculator::default();
        assert_eq!(0, eulerian_number(0, 1, &factorial));
        assert_eq!(0, eulerian_number(3, 3, &factorial));
        assert_eq!(0, eulerian_number(3, 7, &factorial));
    }

    #[test]
    fn rows_sum_to_factorial() {
        let factorial = Lookup::default();
        for n in 0..=MAX_SIZE {
            let row = eulerian_numbers(n).unwrap();
            assert_eq!(factorial.get(n as u8), row.iter().sum::<u128>(), "n = {n}");
        }
    }

    #[test]
    fn rows_are_symmetric() {
        for n in 1..=MAX_SIZE {
            let row = eulerian_numbers(n).unwrap();
            let reversed = row.iter().rev().copied().collect::<Vec<_>>();
            assert_eq!(row, reversed, "n = {n}");
        }
    }

    #[test]
    fn largest_supported_size() {
        let factorial = Lookup::default();
        assert_eq!(1, eulerian_number(MAX_SIZE as u8, 0, &factorial));
        assert_eq!(1, eulerian_number(MAX_SIZE as u8, MAX_SIZE as u8 - 1, &factorial));
    }

    #[test]
    #[should_panic(expected = "size 34 exceeds the maximum of 20")]
    fn eulerian_number_too_large() {
        eulerian_number(34, 1, &Lookup::default());
    }

    #[test]
    fn too_large() {
        assert_eq!(
            Err(InvalidArgument::TooLarge {
                size: MAX_SIZE + 1,
                max: MAX_SIZE
            }),
            eulerian_numbers(MAX_SIZE + 1)
        );
    }
}
