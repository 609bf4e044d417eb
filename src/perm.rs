//! Lexicographic permutations and the descent statistic.

/// Rewrites `elements` into the lexicographically next permutation of the same elements, returning
/// `true`. If `elements` is already the last permutation (non-increasing throughout), it is left
/// untouched and `false` is returned.
///
/// Repeated elements are supported: starting from a sorted sequence, each distinct arrangement is
/// visited exactly once.
///
/// # Example
///
/// ```
/// use descents::perm::next_permutation;
///
/// let mut elements = [0, 1, 2];
/// assert!(next_permutation(&mut elements));
/// assert_eq!([0, 2, 1], elements);
///
/// let mut elements = [2, 1, 0];
/// assert!(!next_permutation(&mut elements));
/// assert_eq!([2, 1, 0], elements);
/// ```
pub fn next_permutation<T: Ord>(elements: &mut [T]) -> bool {
    let len = elements.len();
    if len <= 1 {
        return false;
    }

    // the pivot sits just before the longest non-increasing suffix
    let mut pivot = len - 1;
    loop {
        if pivot == 0 {
            return false;
        }
        pivot -= 1;
        if elements[pivot] < elements[pivot + 1] {
            break;
        }
    }

    // elements[pivot + 1] qualifies at the very least
    let mut succ = len - 1;
    while elements[succ] <= elements[pivot] {
        succ -= 1;
    }
    elements.swap(pivot, succ);

    let (mut left, mut right) = (pivot + 1, len - 1);
    while left < right {
        elements.swap(left, right);
        left += 1;
        right -= 1;
    }
    true
}

/// The number of positions `i` where `elements[i + 1] < elements[i]`.
pub fn count_descents<T: Ord>(elements: &[T]) -> usize {
    elements
        .windows(2)
        .filter(|pair| pair[1] < pair[0])
        .count()
}

/// The identity permutation `[0, 1, ..., len - 1]`.
pub fn identity(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Checks in linear time that `elements` is a permutation of `0..elements.len()`. The `bitmap` is
/// scratch space of at least `elements.len()` entries; its prior contents are ignored.
pub fn is_permutation(elements: &[usize], bitmap: &mut [bool]) -> bool {
    let bitmap = &mut bitmap[..elements.len()];
    bitmap.fill(false);
    for &element in elements {
        if element >= bitmap.len() || bitmap[element] {
            return false;
        }
        bitmap[element] = true;
    }
    true
}

/// Every permutation of a sequence, from a starting arrangement onwards, in lexicographic order.
pub struct Lexicographic<T> {
    start: Vec<T>,
}
impl<T: Ord> Lexicographic<T> {
    /// Sorts `elements` first, so that iteration covers every distinct arrangement.
    pub fn new(mut elements: Vec<T>) -> Self {
        elements.sort();
        Self { start: elements }
    }

    /// Iteration begins at `elements` as given.
    pub fn from_current(elements: Vec<T>) -> Self {
        Self { start: elements }
    }
}

impl<T: Ord + Clone> IntoIterator for Lexicographic<T> {
    type Item = Vec<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.start,
            exhausted: false,
            started: false,
        }
    }
}

pub struct Iter<T> {
    current: Vec<T>,
    started: bool,
    exhausted: bool,
}
impl<T: Ord + Clone> Iterator for Iter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !next_permutation(&mut self.current) {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(self.current.clone())
    }
}
