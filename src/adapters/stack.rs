//! LIFO adapter.

use core::any::Any;
use core::marker::PhantomData;

use crate::error::Result;
use crate::kind::{Element, ElementKind};
use crate::options::Options;
use crate::vecs::deque::Deque;
use crate::vecs::vector::SequenceMut;

/// Last-in, first-out stack over an owned container (a [`Deque`] by default, any
/// [`SequenceMut`] works).
///
/// `push`, `pop` and `top` all act on the back of the container. Unlike
/// [`Queue::pop`](crate::Queue::pop), popping an empty stack is not an error and
/// returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T, C = Deque<T>> {
    container: C,
    _marker: PhantomData<T>,
}

impl<T: Element> Stack<T> {
    pub fn new() -> Self {
        Self::from_container(Deque::new())
    }
}

impl<T: Element> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, C: SequenceMut<T>> Stack<T, C> {
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

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.container.back()
    }

    pub fn top_or(&self, fallback: T) -> T {
        self.top().cloned().unwrap_or(fallback)
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

    /// Removes and returns the top element, `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
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

impl<T, C> Stack<T, C>
where
    T: Element + 'static,
    C: SequenceMut<T> + Clone + 'static,
{
    /// Swaps with `other` if it is a stack of the same type; otherwise does nothing.
    pub fn swap_dyn(&mut self, other: &mut dyn Any) -> bool {
        match other.downcast_mut::<Self>() {
            Some(other) => {
                self.swap(other);
                true
            }
            None => {
                log::trace!("stack swap skipped, other side is not the same adapter type");
                false
            }
        }
    }

    pub fn copy(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T: Element, C: SequenceMut<T>> From<C> for Stack<T, C> {
    fn from(container: C) -> Self {
        Self::from_container(container)
    }
}
