//! Single-pass cursors over a container's elements.
//!
//! [`ForwardIter`] walks index `0 → len`, [`BackwardIter`] walks `len → 0`. Both expose the
//! explicit `has_next` / `advance` pair and also implement [`Iterator`], so they work with
//! `for` loops and adapters. A cursor is consumed as it advances and cannot be restarted;
//! ask the container for a new one instead.
//!
//! A cursor borrows the container it came from, so the container cannot be mutated while
//! the cursor is alive. Code that needs to mutate during a walk must collect positions
//! first; interleaving mutation with a live walk is not supported.

use core::iter::FusedIterator;

/// Front-to-back cursor. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct ForwardIter<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T> ForwardIter<'a, T> {
    #[inline]
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    /// Yields the current element and moves past it.
    #[inline]
    pub fn advance(&mut self) -> Option<&'a T> {
        let item = self.data.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for ForwardIter<'_, T> {}
impl<T> FusedIterator for ForwardIter<'_, T> {}

/// Back-to-front cursor. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct BackwardIter<'a, T> {
    data: &'a [T],
    remaining: usize,
}

impl<'a, T> BackwardIter<'a, T> {
    #[inline]
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self {
            data,
            remaining: data.len(),
        }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    #[inline]
    pub fn advance(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.data.get(self.remaining)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Iterator for BackwardIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for BackwardIter<'_, T> {}
impl<T> FusedIterator for BackwardIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_cursor_explicit_protocol() {
        let data = [1, 2, 3];
        let mut it = ForwardIter::new(&data);
        assert_eq!(it.remaining(), 3);
        let mut seen = Vec::new();
        while it.has_next() {
            seen.push(*it.advance().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(!it.has_next());
        assert_eq!(it.advance(), None);
    }

    #[test]
    fn test_backward_cursor_explicit_protocol() {
        let data = [1, 2, 3];
        let mut it = BackwardIter::new(&data);
        assert_eq!(it.advance(), Some(&3));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![&2, &1]);
    }

    #[test]
    fn test_cursor_is_single_pass() {
        let data = ["a", "b"];
        let mut it = ForwardIter::new(&data);
        assert_eq!(it.by_ref().count(), 2);
        // Exhausted: a second pass yields nothing.
        assert_eq!(it.count(), 0);

        let empty: [u8; 0] = [];
        assert!(!BackwardIter::new(&empty).has_next());
        assert!(!ForwardIter::new(&empty).has_next());
    }
}
