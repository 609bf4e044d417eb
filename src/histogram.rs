//! Tallies of permutations by their number of descents.

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::Serialize;

use crate::display::DisplaySlice;
use crate::error::Overflow;

/// Entry `d` holds the number of permutations seen with exactly `d` descents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: Vec<u64>,
}
impl Histogram {
    /// A histogram of `len` zeroed counters.
    pub fn zeroed(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Records one permutation with `descents` descents.
    ///
    /// # Panics
    /// If `descents` is not below [`len`](Self::len).
    #[inline]
    pub fn tally(&mut self, descents: usize) -> Result<(), Overflow> {
        let count = &mut self.counts[descents];
        *count = count.checked_add(1).ok_or(Overflow { descents })?;
        Ok(())
    }

    /// Sum of all counters, widened so that it cannot itself overflow.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|&count| count as u128).sum()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

impl Deref for Histogram {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl From<Vec<u64>> for Histogram {
    fn from(counts: Vec<u64>) -> Self {
        Self { counts }
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DisplaySlice::from(&*self.counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_and_total() {
        let mut histogram = Histogram::zeroed(3);
        histogram.tally(0).unwrap();
        histogram.tally(1).unwrap();
        histogram.tally(1).unwrap();
        assert_eq!(&[1, 2, 0], histogram.counts());
        assert_eq!(3, histogram.total());
        assert_eq!(3, histogram.len());
    }

    #[test]
    fn tally_overflow() {
        let mut histogram = Histogram::from(vec![0, u64::MAX]);
        assert_eq!(Err(Overflow { descents: 1 }), histogram.tally(1));
        assert_eq!(&[0, u64::MAX], histogram.counts());
        histogram.tally(0).unwrap();
        assert_eq!(u64::MAX as u128 + 1, histogram.total());
    }

    #[test]
    #[should_panic]
    fn tally_out_of_range() {
        let mut histogram = Histogram::zeroed(2);
        let _ = histogram.tally(2);
    }

    #[test]
    fn display() {
        assert_eq!("[1, 4, 1]", Histogram::from(vec![1, 4, 1]).to_string());
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&Histogram::from(vec![1, 4, 1])).unwrap();
        assert_eq!("[1,4,1]", json);
    }
}
