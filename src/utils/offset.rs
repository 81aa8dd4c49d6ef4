//! Integer index arguments accepted by the positional container operations.

use core::fmt::Debug;

use crate::error::{ContainerError, Result};

/// An integer type usable as a container position.
///
/// Positional operations (`at`, `insert`, `erase`, `set`) take any `Offset` so that
/// callers holding signed indices do not need to convert first. Negative values never
/// map to a position: lookups treat them as out of range, mutations reject them with
/// [`ContainerError::IndexOutOfRange`].
pub trait Offset: Copy + Debug {
    /// Converts to a `usize` position.
    ///
    /// Returns `None` for negative values and for values that do not fit a `usize`.
    fn to_offset(self) -> Option<usize>;

    /// Lossless widening, used when reporting the rejected index.
    fn as_i128(self) -> i128;
}

macro_rules! impl_offset {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Offset for $ty {
                #[inline(always)]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_offset!(usize, isize, u8, i8, u16, i16, u32, i32, u64, i64);

/// Resolves `index` to a position strictly inside `[0, len)`.
#[inline]
pub(crate) fn position_in<I: Offset>(index: I, len: usize) -> Result<usize> {
    match index.to_offset() {
        Some(pos) if pos < len => Ok(pos),
        _ => {
            log::debug!("index {index:?} rejected, bounds (0, {len})");
            Err(ContainerError::IndexOutOfRange {
                index: index.as_i128(),
                len,
            })
        }
    }
}
