//! Enumeration of all permutations of a given size, tallied by descent count.

use tracing::debug;

use crate::error::{CountError, InvalidArgument};
use crate::histogram::Histogram;
use crate::perm::{count_descents, identity, next_permutation};

/// The largest size whose permutation count, `MAX_SIZE!`, fits in a `u64` counter.
pub const MAX_SIZE: usize = 20;

/// Counts the permutations of `{0, ..., n - 1}` by their number of descents, visiting each one in
/// lexicographic order from the identity. Entry `d` of the result is the number of permutations
/// with exactly `d` descents; the entries sum to `n!`.
///
/// The histogram has `n` entries, except for `n = 0`, where it holds the single empty permutation
/// as `[1]`.
///
/// # Example
///
/// ```
/// use descents::descents::count_permutations_by_descents;
///
/// let histogram = count_permutations_by_descents(3).unwrap();
/// assert_eq!(&[1, 4, 1], histogram.counts());
/// ```
pub fn count_permutations_by_descents(n: usize) -> Result<Histogram, CountError> {
    check_size(n)?;
    let mut permutation = identity(n);
    let mut histogram = Histogram::zeroed(usize::max(n, 1));
    let mut permutations = 1u64;
    histogram.tally(count_descents(&permutation))?;
    while next_permutation(&mut permutation) {
        histogram.tally(count_descents(&permutation))?;
        permutations += 1;
    }
    debug!("enumerated {permutations} permutations of size {n}: {histogram}");
    Ok(histogram)
}

/// Converts a signed size into one that [`count_permutations_by_descents`] accepts.
pub fn validate_size(n: i64) -> Result<usize, InvalidArgument> {
    let size = usize::try_from(n).map_err(|_| InvalidArgument::Negative(n))?;
    check_size(size)?;
    Ok(size)
}

/// Parses a size from its decimal representation, as typically supplied on a command line.
pub fn parse_size(s: &str) -> Result<usize, InvalidArgument> {
    let n = s
        .trim()
        .parse::<i64>()
        .map_err(|_| InvalidArgument::NotAnInteger(s.to_string()))?;
    validate_size(n)
}

pub(crate) fn check_size(size: usize) -> Result<(), InvalidArgument> {
    if size > MAX_SIZE {
        return Err(InvalidArgument::TooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}
