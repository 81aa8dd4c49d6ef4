//! FIFO adapter.

use core::any::Any;
use core::marker::PhantomData;

use crate::error::Result;
use crate::kind::{Element, ElementKind};
use crate::options::Options;
use crate::vecs::deque::{Deque, DoubleEnded};

/// First-in, first-out queue over an owned container (a [`Deque`] by default).
///
/// Only the queue operations are exposed: elements enter at the back with
/// [`push`](Self::push) and leave from the front with [`pop`](Self::pop). Kind
/// validation and bounds rules are the container's; in particular `pop` on an empty
/// queue fails with [`IndexOutOfRange`](crate::ContainerError::IndexOutOfRange).
#[derive(Debug, Clone, PartialEq)]
pub struct Queue<T, C = Deque<T>> {
    container: C,
    _marker: PhantomData<T>,
}

impl<T: Element> Queue<T> {
    /// Empty queue of `T`'s default kind.
    pub fn new() -> Self {
        Self::from_container(Deque::new())
    }
}

impl<T: Element> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, C: DoubleEnded<T>> Queue<T, C> {
    pub fn with_options(options: Options<T>) -> Result<Self> {
        C::with_options(options).map(Self::from_container)
    }

    pub fn with_kind(kind: ElementKind) -> Result<Self> {
        Self::with_options(Options::new(kind))
    }

    pub fn from_typecode<I>(code: &str, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_options(Options::typecode(code)?.elements(elements))
    }

    pub fn from_container(container: C) -> Self {
        Self {
            container,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.container.kind()
    }

    #[inline]
    pub fn typecode(&self) -> char {
        self.kind().typecode()
    }

    /// Oldest element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.container.front()
    }

    /// Newest element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.container.back()
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.container.empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.container.size()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.container.push_back(value)
    }

    /// Removes and returns the oldest element.
    pub fn pop(&mut self) -> Result<T> {
        self.container.pop_front()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.container.swap(&mut other.container);
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C> Queue<T, C>
where
    T: Element + 'static,
    C: DoubleEnded<T> + Clone + 'static,
{
    /// Swaps with `other` if it is a queue of the same type; otherwise does nothing.
    ///
    /// Returns whether the contents were exchanged.
    pub fn swap_dyn(&mut self, other: &mut dyn Any) -> bool {
        match other.downcast_mut::<Self>() {
            Some(other) => {
                self.swap(other);
                true
            }
            None => {
                log::trace!("queue swap skipped, other side is not the same adapter type");
                false
            }
        }
    }

    /// Independent queue with a duplicate of the container.
    pub fn copy(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T: Element, C: DoubleEnded<T>> From<C> for Queue<T, C> {
    fn from(container: C) -> Self {
        Self::from_container(container)
    }
}
