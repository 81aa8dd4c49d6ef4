//! Construction parameters shared by every container and adapter.

use crate::error::Result;
use crate::kind::{Element, ElementKind};

/// Builder for the arguments a container is created from.
///
/// * `kind`: the element-kind tag (required);
/// * `elements`: initial contents, used when `length` is zero;
/// * `length`: when non-zero the container starts with `length` copies of `default`;
/// * `default`: fill value, falls back to [`Element::placeholder`] for the kind.
///
/// ```rust
/// use typed_sequences::{Options, Vector};
///
/// let v: Vector<i32> = Vector::with_options(Options::typecode("i")?.length(3).default_value(7))?;
/// assert_eq!(v.data(), &[7, 7, 7]);
/// # Ok::<(), typed_sequences::ContainerError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options<T> {
    pub(crate) kind: ElementKind,
    pub(crate) elements: Vec<T>,
    pub(crate) length: usize,
    pub(crate) default: Option<T>,
}

impl<T: Element> Options<T> {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            length: 0,
            default: None,
        }
    }

    /// Starts from a typecode string such as `"i"` or `"A"`.
    pub fn typecode(code: &str) -> Result<Self> {
        ElementKind::from_typecode(code).map(Self::new)
    }

    pub fn elements<I: IntoIterator<Item = T>>(mut self, elements: I) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The storage these options describe, before any validation.
    pub(crate) fn into_storage(self) -> Vec<T> {
        if self.length > 0 {
            let fill = self.default.unwrap_or_else(|| T::placeholder(self.kind));
            vec![fill; self.length]
        } else {
            self.elements
        }
    }
}

impl<T: Element> Default for Options<T> {
    fn default() -> Self {
        Self::new(T::DEFAULT_KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Value;

    #[test]
    fn test_options_length_takes_precedence() {
        let opts = Options::new(ElementKind::I32)
            .elements([1, 2, 3])
            .length(2)
            .default_value(9);
        assert_eq!(opts.into_storage(), vec![9, 9]);
    }

    #[test]
    fn test_options_elements_used_without_length() {
        let opts = Options::new(ElementKind::I32).elements([1, 2, 3]);
        assert_eq!(opts.into_storage(), vec![1, 2, 3]);
    }

    #[test]
    fn test_options_placeholder_fill() {
        let opts: Options<Value> = Options::typecode("A").unwrap().length(2);
        assert_eq!(opts.into_storage(), vec![Value::Null, Value::Null]);
        let opts: Options<Value> = Options::typecode("d").unwrap().length(1);
        assert_eq!(opts.into_storage(), vec![Value::Float(0.0)]);
    }

    #[test]
    fn test_options_defaults() {
        let opts: Options<u16> = Options::default();
        assert_eq!(opts.kind(), ElementKind::U16);
        assert!(opts.into_storage().is_empty());
        assert!(Options::<i32>::typecode("?").is_err());
    }
}
