//! Lazy k-combinations of a slice.
//!
//! Yields every size-`k` subset once, as a `Vec` in pool order, with the
//! subsets themselves in lexicographic order of their pool indices:
//!
//! ```text
//! pool = [a, b, c, d], k = 2
//! → [a,b] [a,c] [a,d] [b,c] [b,d] [c,d]
//! ```
//!
//! The pool for an 11×11 puzzle has ~112 coordinates, so the iterator stays
//! lazy and the sampler filters as it goes.

/// Iterator over all `k`-combinations of `pool`.
pub struct Combinations<'a, T> {
    pool:    &'a [T],
    indices: Vec<usize>,
    started: bool,
    done:    bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done:    k > pool.len(),
        }
    }

    /// Move `indices` to the next combination.  `false` once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();

        // Rightmost index that has not reached its final value.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        Some(self.indices.iter().map(|&i| self.pool[i]).collect())
    }
}
