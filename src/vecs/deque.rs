//! Double-ended queue layered on [`Vector`].
//!
//! [`Deque`] wraps a `Vector` and dereferences to it, so the whole vector API (validated
//! insertion, `at`, `resize`, cursors, …) is available unchanged. On top of it the deque
//! adds the [`DoubleEnded`] operations, which are defined in terms of the vector's
//! positional operations:
//!
//! * `push_front(v)` is `insert(0, v)`;
//! * `pop_front()` is `erase(0)`.
//!
//! Both therefore inherit the vector's bounds rule. In particular `push_front` on an
//! empty deque and `pop_front` on an empty deque fail with
//! [`IndexOutOfRange`](crate::ContainerError::IndexOutOfRange).

use core::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::kind::{Element, ElementKind};
use crate::options::Options;
use crate::utils::offset::Offset;
use crate::vecs::vector::{Sequence, SequenceMut, Vector};

// ─── DoubleEnded ──────────────────────────────────────────────────────────────

/// Front insertion and removal on top of [`SequenceMut`].
///
/// The provided methods route through `insert(0, _)` / `erase(0)`; implementors only
/// override them if they keep the same bounds and kind rules.
pub trait DoubleEnded<T: Element>: SequenceMut<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0usize, value)
    }

    fn pop_front(&mut self) -> Result<T> {
        self.erase(0usize)
    }
}

/// A [`Vector`] with front operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Deque<T> {
    inner: Vector<T>,
}

impl<T: Element> Deque<T> {
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    pub fn with_kind(kind: ElementKind) -> Result<Self> {
        Vector::with_kind(kind).map(Self::from)
    }

    pub fn with_options(options: Options<T>) -> Result<Self> {
        Vector::with_options(options).map(Self::from)
    }

    pub fn from_typecode<I>(code: &str, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Vector::from_typecode(code, elements).map(Self::from)
    }

    /// Inserts `value` at the front. Fails on an empty deque, see the
    /// [module docs](self).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        DoubleEnded::push_front(self, value)
    }

    /// Removes and returns the front element.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        DoubleEnded::pop_front(self)
    }

    /// Exchanges kind and contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }

    pub fn as_vector(&self) -> &Vector<T> {
        &self.inner
    }

    pub fn into_vector(self) -> Vector<T> {
        self.inner
    }
}

impl<T: Element> From<Vector<T>> for Deque<T> {
    fn from(inner: Vector<T>) -> Self {
        Self { inner }
    }
}

impl<T: Element> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Deque<T> {
    type Target = Vector<T>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Deque<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Element> Sequence<T> for Deque<T> {
    fn as_slice(&self) -> &[T] {
        self.inner.data()
    }
}

impl<T: Element> SequenceMut<T> for Deque<T> {
    fn with_options(options: Options<T>) -> Result<Self> {
        Deque::with_options(options)
    }

    fn kind(&self) -> ElementKind {
        self.inner.kind()
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        self.inner.push_back(value)
    }

    fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    fn insert<I: Offset>(&mut self, index: I, value: T) -> Result<()> {
        self.inner.insert(index, value)
    }

    fn erase<I: Offset>(&mut self, index: I) -> Result<T> {
        self.inner.erase(index)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn swap(&mut self, other: &mut Self) {
        Deque::swap(self, other)
    }
}

impl<T: Element> DoubleEnded<T> for Deque<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerError;
    use crate::kind::Value;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_deque_front_ops_basic() {
        let mut d = Deque::from_typecode("i", [2, 3]).unwrap();
        d.push_front(1).unwrap();
        assert_eq!(d.data(), &[1, 2, 3]);
        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.front(), Some(&2));
        assert_eq!(d.back(), Some(&3));
        assert_eq!(d.size(), 2);
    }

    #[test]
    fn test_deque_front_ops_on_empty_fail() {
        let mut d: Deque<i32> = Deque::new();
        assert_eq!(
            d.push_front(1),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            d.pop_front(),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(d.is_empty());

        // Seeding through push_back makes the front usable.
        d.push_back(2).unwrap();
        d.push_front(1).unwrap();
        assert_eq!(d.data(), &[1, 2]);
    }

    #[test]
    fn test_deque_inherits_vector_api() {
        let mut d = Deque::from_typecode("h", [1i16, 2, 3, 4]).unwrap();
        d.reverse();
        d.resize(3);
        assert_eq!(d.data(), &[4, 3, 2]);
        assert_eq!(d.at_or(9, -1), -1);
        assert_eq!(d.erase(1), Ok(3));
        assert_eq!(d.backward_iter().copied().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(d.kind(), ElementKind::I16);

        d[0] = 7;
        assert_eq!(d.front(), Some(&7));
    }

    #[test]
    fn test_deque_front_kind_validation() {
        let mut d = Deque::<Value>::from_typecode("B", [Value::Int(1)]).unwrap();
        let err = d.push_front(Value::Int(-1)).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(d.data(), &[Value::Int(1)]);
    }

    #[test]
    fn test_deque_swap() {
        let mut x = Deque::from_typecode("d", [1.0, 2.0, 3.0]).unwrap();
        let mut y = Deque::from_typecode("d", [9.0]).unwrap();
        x.swap(&mut y);
        assert_eq!(x.data(), &[9.0]);
        assert_eq!(y.data(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_deque_conversions() {
        let v = Vector::from_typecode("I", [1u32, 2]).unwrap();
        let d = Deque::from(v.clone());
        assert_eq!(d.as_vector(), &v);
        assert_eq!(d.clone().into_vector(), v);
        assert_eq!((&d).into_iter().count(), 2);
        assert_eq!(d.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[quickcheck]
    fn prop_push_front_pop_front_roundtrip(head: u16, tail: Vec<u16>, x: u16) -> bool {
        let mut d = Deque::from_typecode("H", std::iter::once(head).chain(tail)).unwrap();
        let before = d.clone();
        d.push_front(x).unwrap();
        d.pop_front() == Ok(x) && d == before
    }
}
