//! Distribution of the descent statistic over all permutations of a given size.
//! Permutations are enumerated in lexicographic order by an in-place successor operation; each one
//! is tallied into a histogram indexed by its number of descents. The resulting counts are the
//! Eulerian numbers, which are also available in closed form for cross-checking.

pub mod descents;
pub mod display;
pub mod error;
pub mod eulerian;
pub mod factorial;
pub mod histogram;
pub mod perm;
pub mod print;
pub mod timed;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
