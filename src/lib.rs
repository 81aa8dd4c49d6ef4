//! # Typed Sequences
//!
//! Typed, homogeneous sequence containers in the style of the C++ standard library:
//! a resizable [`Vector`], a [`Deque`] built on it, and the [`Queue`] (FIFO) and [`Stack`]
//! (LIFO) adapters.
//!
//! ## Element kinds
//!
//! Every container carries an [`ElementKind`], the typecode tag it was created with:
//!
//! | typecode | kind | native type |
//! |----------|------|-------------|
//! | `b` / `B` | 8-bit signed / unsigned | `i8` / `u8` |
//! | `h` / `H` | 16-bit | `i16` / `u16` |
//! | `i` / `I` | 32-bit | `i32` / `u32` |
//! | `l` / `L` | 64-bit | `i64` / `u64` |
//! | `f` / `d` | single / double float | `f32` / `f64` |
//! | `A` | anything | [`Value`] |
//!
//! Native element types are bound to their kind at compile time. [`Value`] containers can
//! be created with any kind and validate each element at runtime.
//!
//! ## Examples
//!
//! ### Vector
//!
//! ```rust
//! use typed_sequences::{Sequence, Vector};
//!
//! let mut v = Vector::from_typecode("i", [1, 2, 3])?;
//! assert_eq!(v.at_or(5, -1), -1);
//! assert_eq!(v.pop_back(), Some(3));
//! assert_eq!(v.size(), 2);
//!
//! // `insert` only accepts positions inside [0, size).
//! assert!(v.insert(2, 9).is_err());
//! # Ok::<(), typed_sequences::ContainerError>(())
//! ```
//!
//! ### Runtime-checked kinds
//!
//! ```rust
//! use typed_sequences::{Sequence, Value, Vector};
//!
//! let mut bytes = Vector::<Value>::from_typecode("B", [Value::Int(1)])?;
//! assert!(bytes.push_back(Value::Int(256)).unwrap_err().is_type_error());
//! assert_eq!(bytes.size(), 1);
//! # Ok::<(), typed_sequences::ContainerError>(())
//! ```
//!
//! ### Adapters
//!
//! ```rust
//! use typed_sequences::{Queue, Stack};
//!
//! let mut q: Queue<i32> = Queue::new();
//! q.push(1)?;
//! q.push(2)?;
//! assert_eq!(q.pop()?, 1);
//!
//! let mut s: Stack<i32> = Stack::new();
//! s.push(1)?;
//! s.push(2)?;
//! assert_eq!(s.pop(), Some(2));
//! assert_eq!(s.top(), Some(&1));
//! # Ok::<(), typed_sequences::ContainerError>(())
//! ```

// --- Module Declarations ---

pub mod adapters;
pub mod error;
pub mod kind;
pub mod options;
pub mod utils;
pub mod vecs;

// --- Re-exports ---

pub use adapters::queue::Queue;
pub use adapters::stack::Stack;
pub use error::{ContainerError, ErrorCategory, Result};
pub use kind::{Element, ElementKind, Native, Value};
pub use options::Options;
pub use utils::offset::Offset;
pub use vecs::cursor::{BackwardIter, ForwardIter};
pub use vecs::deque::{Deque, DoubleEnded};
pub use vecs::vector::{Sequence, SequenceMut, Vector};
