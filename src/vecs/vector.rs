//! Resizable, kind-constrained sequence.
//!
//! Provides [`Vector`], an exclusively owned `std::vec::Vec` tagged with an
//! [`ElementKind`]. Every mutation that introduces a value validates it against the kind
//! first, so a failed call never leaves the vector half-modified. It `Deref`s to `[T]`
//! for read-only slice methods; writes go through the validating API.
//!
//! [`Sequence`] is a read-only view trait implemented by `Vector`, `Deque`, `Vec`, slices
//! and arrays. [`SequenceMut`] is the mutation/construction capability the adapters are
//! generic over.
//!
//! Positional operations keep a deliberately narrow range: `insert` and `erase` accept
//! only `0 <= index < size`. Appending is `push_back`'s job, and inserting at `size`
//! (or anywhere in an empty vector) is rejected with
//! [`ContainerError::IndexOutOfRange`].

use core::borrow::Borrow;
use core::ops::{Bound, Deref, Index, IndexMut, Range, RangeBounds};
use core::slice;

use crate::error::{ContainerError, Result};
use crate::kind::{Element, ElementKind, Native, check_supported, check_value};
use crate::options::Options;
use crate::utils::offset::{Offset, position_in};
use crate::vecs::cursor::{BackwardIter, ForwardIter};

/// A trait generalizing any read-only, contiguous sequence.
pub trait Sequence<T> {
    fn as_slice(&self) -> &[T];

    fn size(&self) -> usize {
        self.as_slice().len()
    }

    fn empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Element at `index`, `None` when out of range (negative included).
    fn at<I: Offset>(&self, index: I) -> Option<&T> {
        index.to_offset().and_then(|i| self.as_slice().get(i))
    }

    fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    fn forward_iter(&self) -> ForwardIter<'_, T> {
        ForwardIter::new(self.as_slice())
    }

    fn backward_iter(&self) -> BackwardIter<'_, T> {
        BackwardIter::new(self.as_slice())
    }
}

impl<T> Sequence<T> for std::vec::Vec<T> {
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Sequence<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

/// Mutation and construction capability shared by [`Vector`] and
/// [`Deque`](crate::Deque); the adapters are generic over it.
pub trait SequenceMut<T: Element>: Sequence<T> + Sized {
    fn with_options(options: Options<T>) -> Result<Self>;

    fn kind(&self) -> ElementKind;

    fn push_back(&mut self, value: T) -> Result<()>;

    fn pop_back(&mut self) -> Option<T>;

    fn insert<I: Offset>(&mut self, index: I, value: T) -> Result<()>;

    fn erase<I: Offset>(&mut self, index: I) -> Result<T>;

    fn clear(&mut self);

    fn swap(&mut self, other: &mut Self);
}

/// A growable sequence whose elements are constrained by an [`ElementKind`].
///
/// # Element types
/// | `T` | kinds |
/// |-----|-------|
/// | `i8` … `f64` | only the matching kind (`i32` ↔ `'i'`, `f64` ↔ `'d'`, …) |
/// | [`Value`](crate::Value) | any kind, checked per element |
///
/// # Capacity
/// Growth is delegated to `Vec`; [`capacity`](Self::capacity) reports the element count.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    kind: ElementKind,
    storage: Vec<T>,
}

impl<T: Element> Vector<T> {
    /// Empty vector of the element type's default kind.
    pub fn new() -> Self {
        Self {
            kind: T::DEFAULT_KIND,
            storage: Vec::new(),
        }
    }

    /// Empty vector of `kind`.
    pub fn with_kind(kind: ElementKind) -> Result<Self> {
        Self::with_options(Options::new(kind))
    }

    /// Builds a vector from full construction [`Options`].
    ///
    /// Fails with [`ContainerError::UnsupportedKind`] if `T` cannot hold the kind and with
    /// [`ContainerError::TypeMismatch`] if an initial element (or the fill value) does not
    /// fit it.
    pub fn with_options(options: Options<T>) -> Result<Self> {
        let kind = options.kind();
        check_supported::<T>(kind)?;
        let storage = options.into_storage();
        for value in &storage {
            check_value(value, kind)?;
        }
        log::trace!("vector of kind '{kind}' created with {} elements", storage.len());
        Ok(Self { kind, storage })
    }

    /// Parses `code` and fills the vector with `elements`.
    pub fn from_typecode<I>(code: &str, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_options(Options::typecode(code)?.elements(elements))
    }

    /// `length` copies of `value`.
    pub fn filled(kind: ElementKind, length: usize, value: T) -> Result<Self> {
        Self::with_options(Options::new(kind).length(length).default_value(value))
    }

    #[inline(always)]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[inline(always)]
    pub fn typecode(&self) -> char {
        self.kind.typecode()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Equal to [`Sequence::size`]; reserved storage is not modelled.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.len()
    }

    pub fn max_size(&self) -> usize {
        isize::MAX as usize / core::mem::size_of::<T>().max(1)
    }

    #[inline(always)]
    pub fn data(&self) -> &[T] {
        &self.storage
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Bounds-checked access returning `fallback` when `index` is out of range.
    pub fn at_or<I: Offset>(&self, index: I, fallback: T) -> T {
        self.at(index).cloned().unwrap_or(fallback)
    }

    pub fn front_or(&self, fallback: T) -> T {
        self.front().cloned().unwrap_or(fallback)
    }

    pub fn back_or(&self, fallback: T) -> T {
        self.back().cloned().unwrap_or(fallback)
    }

    /// Inserts `value` before `index`.
    ///
    /// `index` must satisfy `0 <= index < size`; inserting at `size` is rejected even
    /// though it would be an append.
    pub fn insert<I: Offset>(&mut self, index: I, value: T) -> Result<()> {
        let pos = position_in(index, self.len())?;
        check_value(&value, self.kind)?;
        self.storage.insert(pos, value);
        Ok(())
    }

    /// Removes and returns the element at `index` (`0 <= index < size`).
    pub fn erase<I: Offset>(&mut self, index: I) -> Result<T> {
        let pos = position_in(index, self.len())?;
        Ok(self.storage.remove(pos))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set<I: Offset>(&mut self, index: I, value: T) -> Result<T> {
        let pos = position_in(index, self.len())?;
        check_value(&value, self.kind)?;
        Ok(core::mem::replace(&mut self.storage[pos], value))
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        check_value(&value, self.kind)?;
        self.storage.push(value);
        Ok(())
    }

    /// Appends every element of `iter`, or none of them if any is rejected.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        let incoming: Vec<T> = iter.into_iter().collect();
        for value in &incoming {
            check_value(value, self.kind)?;
        }
        log::trace!("extending vector by {} elements", incoming.len());
        self.storage.extend(incoming);
        Ok(())
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Removes and returns the last element, or `fallback` if the vector is empty.
    pub fn pop_back_or(&mut self, fallback: T) -> T {
        self.pop_back().unwrap_or(fallback)
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn reverse(&mut self) {
        self.storage.reverse();
    }

    /// Shrinks to the first `count` elements.
    ///
    /// Only ever truncates: a `count` at or above the current size leaves the vector
    /// unchanged, and so does `count == 0`.
    pub fn resize(&mut self, count: usize) {
        if count > 0 {
            self.storage.truncate(count);
        }
    }

    /// Exchanges kind and contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        log::trace!(
            "swapping vectors ('{}', {}) <-> ('{}', {})",
            self.kind,
            self.len(),
            other.kind,
            other.len()
        );
        core::mem::swap(self, other);
    }

    /// Replaces the contents with `elements`, keeping the kind.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, elements: I) -> Result<()> {
        let incoming: Vec<T> = elements.into_iter().collect();
        for value in &incoming {
            check_value(value, self.kind)?;
        }
        self.storage = incoming;
        Ok(())
    }

    /// Replaces the contents with `length` copies of `value`.
    pub fn assign_fill(&mut self, length: usize, value: T) -> Result<()> {
        check_value(&value, self.kind)?;
        self.storage = vec![value; length];
        Ok(())
    }

    /// Sub-slice clamped to the current bounds; never fails, possibly empty.
    ///
    /// Bounds are `usize` positions counted from the front. There is no
    /// counting from the back: `v.slice(v.len() - 2..)` is the last two elements.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[T] {
        &self.storage[clamp_range(range, self.len())]
    }

    /// Removes the clamped `range` and returns the removed elements.
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) -> Vec<T> {
        let range = clamp_range(range, self.len());
        self.storage.drain(range).collect()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

fn clamp_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    }
    .min(len);
    start..end.max(start)
}

impl<T: Element> Sequence<T> for Vector<T> {
    fn as_slice(&self) -> &[T] {
        &self.storage
    }
}

impl<T: Element> SequenceMut<T> for Vector<T> {
    fn with_options(options: Options<T>) -> Result<Self> {
        Vector::with_options(options)
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        Vector::push_back(self, value)
    }

    fn pop_back(&mut self) -> Option<T> {
        Vector::pop_back(self)
    }

    fn insert<I: Offset>(&mut self, index: I, value: T) -> Result<()> {
        Vector::insert(self, index, value)
    }

    fn erase<I: Offset>(&mut self, index: I) -> Result<T> {
        Vector::erase(self, index)
    }

    fn clear(&mut self) {
        Vector::clear(self)
    }

    fn swap(&mut self, other: &mut Self) {
        Vector::swap(self, other)
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        &self.storage
    }
}

/// Panics when `index` is out of range, like slice indexing. Positions are `usize`
/// counted from the front; negative positions do not wrap to the back (and through
/// [`Sequence::at`] they are simply out of range). Use `at` for the checked form.
impl<T> Index<usize> for Vector<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

/// Unchecked assignment `v[i] = x`, only for [`Native`] element types.
/// [`Value`](crate::Value) vectors go through [`Vector::set`]. Panics when `index` is
/// out of range.
impl<T: Native> IndexMut<usize> for Vector<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.storage[index]
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T: Element> TryFrom<Vec<T>> for Vector<T> {
    type Error = ContainerError;

    /// Wraps `storage` under `T`'s default kind.
    fn try_from(storage: Vec<T>) -> Result<Self> {
        Self::with_options(Options::default().elements(storage))
    }
}
