//! Lexicographic permutation iterator.
//!
//! # Algorithm
//!
//! Permutes positions rather than values: starting from the identity
//! `[0, 1, .., k-1]`, each step finds the rightmost position `i` with
//! `p[i] < p[i+1]`, swaps `p[i]` with the rightmost larger element to its
//! right, and reverses the suffix after `i`. Items are emitted in input
//! order first, so the sequence is reproducible for a given input.
//!
//! # Complexity
//!
//! O(k) amortized per permutation, k! permutations in total.

/// Lazy iterator over every ordering of a slice.
///
/// Cloning the iterator, or creating a new one over the same items,
/// restarts the sequence from the beginning.
///
/// # Examples
///
/// ```
/// use exact_tsp::enumeration::Permutations;
///
/// let all: Vec<Vec<char>> = Permutations::new(&['a', 'b', 'c']).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec!['a', 'b', 'c']);
/// assert_eq!(all[1], vec!['a', 'c', 'b']);
/// assert_eq!(all[5], vec!['c', 'b', 'a']);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    positions: Vec<usize>,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    /// Creates an iterator over all orderings of `items`.
    ///
    /// An empty slice has exactly one ordering, the empty one.
    pub fn new(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
            positions: (0..items.len()).collect(),
            done: false,
        }
    }

    /// Total number of orderings, `k!`.
    pub fn count_total(&self) -> usize {
        (1..=self.items.len()).product()
    }

    fn advance(&mut self) {
        let p = &mut self.positions;
        let Some(i) = (1..p.len()).rev().find(|&i| p[i - 1] < p[i]).map(|i| i - 1) else {
            self.done = true;
            return;
        };
        let j = (i + 1..p.len())
            .rev()
            .find(|&j| p[j] > p[i])
            .unwrap_or(i + 1);
        p.swap(i, j);
        p[i + 1..].reverse();
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self
            .positions
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();
        self.advance();
        Some(current)
    }
}
