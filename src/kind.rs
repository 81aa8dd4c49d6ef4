//! Element kinds and the element model.
//!
//! An [`ElementKind`] is the typecode tag a container is created with (`'i'` for 32-bit
//! signed integers, `'d'` for doubles, `'A'` for "anything"). The [`Element`] trait ties a
//! Rust type to the kinds it can hold:
//!
//! * native numeric types (`i8` … `f64`) hold exactly one kind, so the check is resolved
//!   by the type system and never fails at runtime once the container exists;
//! * [`Value`] is a tagged union that can be stored under any kind and is validated
//!   element by element.

use core::fmt;
use core::str::FromStr;

use crate::error::{ContainerError, Result};

/// Typecode tag restricting what a container may store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// `'b'`
    I8,
    /// `'B'`
    U8,
    /// `'h'`
    I16,
    /// `'H'`
    U16,
    /// `'i'`
    I32,
    /// `'I'`
    U32,
    /// `'l'`
    I64,
    /// `'L'`
    U64,
    /// `'f'`
    F32,
    /// `'d'`
    F64,
    /// `'A'`, the wildcard: heterogeneous storage is allowed.
    Any,
}

impl ElementKind {
    /// Every recognized typecode, in declaration order.
    pub const TYPECODES: [char; 11] = ['b', 'B', 'h', 'H', 'i', 'I', 'l', 'L', 'f', 'd', 'A'];

    pub const ALL: [ElementKind; 11] = [
        ElementKind::I8,
        ElementKind::U8,
        ElementKind::I16,
        ElementKind::U16,
        ElementKind::I32,
        ElementKind::U32,
        ElementKind::I64,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::Any,
    ];

    /// Parses a single-character typecode.
    ///
    /// Anything that is not exactly one of [`TYPECODES`](Self::TYPECODES) is rejected with
    /// [`ContainerError::InvalidKind`].
    pub fn from_typecode(code: &str) -> Result<Self> {
        let mut chars = code.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        kind.ok_or_else(|| {
            log::debug!("rejected typecode {code:?}");
            ContainerError::InvalidKind {
                typecode: code.to_owned(),
            }
        })
    }

    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'b' => ElementKind::I8,
            'B' => ElementKind::U8,
            'h' => ElementKind::I16,
            'H' => ElementKind::U16,
            'i' => ElementKind::I32,
            'I' => ElementKind::U32,
            'l' => ElementKind::I64,
            'L' => ElementKind::U64,
            'f' => ElementKind::F32,
            'd' => ElementKind::F64,
            'A' => ElementKind::Any,
            _ => return None,
        })
    }

    pub const fn typecode(self) -> char {
        match self {
            ElementKind::I8 => 'b',
            ElementKind::U8 => 'B',
            ElementKind::I16 => 'h',
            ElementKind::U16 => 'H',
            ElementKind::I32 => 'i',
            ElementKind::U32 => 'I',
            ElementKind::I64 => 'l',
            ElementKind::U64 => 'L',
            ElementKind::F32 => 'f',
            ElementKind::F64 => 'd',
            ElementKind::Any => 'A',
        }
    }

    #[inline]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, ElementKind::Any)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float() && !self.is_wildcard()
    }

    /// Size in bytes of one native element, `None` for the wildcard.
    pub const fn item_size(self) -> Option<usize> {
        Some(match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
            ElementKind::Any => return None,
        })
    }

    /// Inclusive integer range of an integer kind.
    pub const fn int_range(self) -> Option<(i128, i128)> {
        Some(match self {
            ElementKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            ElementKind::U8 => (0, u8::MAX as i128),
            ElementKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            ElementKind::U16 => (0, u16::MAX as i128),
            ElementKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            ElementKind::U32 => (0, u32::MAX as i128),
            ElementKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            ElementKind::U64 => (0, u64::MAX as i128),
            _ => return None,
        })
    }
}

impl FromStr for ElementKind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_typecode(s)
    }
}

impl TryFrom<char> for ElementKind {
    type Error = ContainerError;

    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c).ok_or_else(|| ContainerError::InvalidKind {
            typecode: c.to_string(),
        })
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.typecode())
    }
}

/// A type that can be stored in the crate's containers.
///
/// `supports` answers "can a container of this element type be created with `kind`",
/// `admits` answers "may this particular value live in a container of `kind`". For native
/// numeric types both collapse to a comparison with their own kind.
pub trait Element: Clone + fmt::Debug {
    /// Kind given to containers built with `new()`.
    const DEFAULT_KIND: ElementKind;

    /// Human readable type name used in error messages.
    const NAME: &'static str;

    fn supports(kind: ElementKind) -> bool;

    fn admits(&self, kind: ElementKind) -> bool;

    /// Fill value used when a container is pre-sized without an explicit default.
    fn placeholder(kind: ElementKind) -> Self;

    /// Rendering of the value for error messages.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Marker for the fixed-kind numeric element types.
///
/// Any value of a `Native` type satisfies the kind its container was created with, so
/// containers of these types allow unchecked in-place writes.
pub trait Native: Element + Copy {}

macro_rules! native_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Native for $ty {}

            impl Element for $ty {
                const DEFAULT_KIND: ElementKind = ElementKind::$kind;
                const NAME: &'static str = stringify!($ty);

                #[inline(always)]
                fn supports(kind: ElementKind) -> bool {
                    kind == ElementKind::$kind
                }

                #[inline(always)]
                fn admits(&self, kind: ElementKind) -> bool {
                    Self::supports(kind)
                }

                #[inline(always)]
                fn placeholder(_kind: ElementKind) -> Self {
                    0 as $ty
                }
            }
        )*
    };
}

native_element! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

/// Dynamically typed element, the storage type for wildcard containers.
///
/// A `Value` container can also be created with a constrained kind, in which case every
/// inserted value is range/representation checked against it:
///
/// | kind          | admitted                                   |
/// |---------------|--------------------------------------------|
/// | integer kinds | `Int` within the kind's range, `Bool`       |
/// | `f` / `d`     | `Int`, `Float`, `Bool`                      |
/// | `A`           | everything                                 |
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i128> {
        match *self {
            Value::Int(n) => Some(n),
            Value::Bool(b) => Some(b as i128),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(x) => Some(x),
            Value::Int(n) => Some(n as f64),
            Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Element for Value {
    const DEFAULT_KIND: ElementKind = ElementKind::Any;
    const NAME: &'static str = "Value";

    #[inline(always)]
    fn supports(_kind: ElementKind) -> bool {
        true
    }

    fn admits(&self, kind: ElementKind) -> bool {
        if kind.is_wildcard() {
            return true;
        }
        if kind.is_float() {
            return matches!(self, Value::Int(_) | Value::Float(_) | Value::Bool(_));
        }
        match (self.as_int(), kind.int_range()) {
            (Some(n), Some((lo, hi))) => lo <= n && n <= hi,
            _ => false,
        }
    }

    fn placeholder(kind: ElementKind) -> Self {
        if kind.is_wildcard() {
            Value::Null
        } else if kind.is_float() {
            Value::Float(0.0)
        } else {
            Value::Int(0)
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Value::Int(n as i128)
                }
            }
        )*
    };
}

value_from_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Fails unless element type `T` can be stored under `kind`.
pub(crate) fn check_supported<T: Element>(kind: ElementKind) -> Result<()> {
    if T::supports(kind) {
        Ok(())
    } else {
        log::debug!("kind '{kind}' rejected for element type {}", T::NAME);
        Err(ContainerError::UnsupportedKind {
            kind,
            element: T::NAME,
        })
    }
}

/// Fails unless `value` is representable as `kind`.
#[inline]
pub(crate) fn check_value<T: Element>(value: &T, kind: ElementKind) -> Result<()> {
    if value.admits(kind) {
        Ok(())
    } else {
        let value = value.describe();
        log::debug!("value {value} rejected for kind '{kind}'");
        Err(ContainerError::TypeMismatch { kind, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_typecode_roundtrip() {
        for (kind, code) in ElementKind::ALL.iter().zip(ElementKind::TYPECODES) {
            assert_eq!(kind.typecode(), code);
            assert_eq!(ElementKind::from_char(code), Some(*kind));
        }
        assert_eq!("i".parse::<ElementKind>(), Ok(ElementKind::I32));
        assert_eq!(ElementKind::try_from('d'), Ok(ElementKind::F64));
    }

    #[test]
    fn test_kind_invalid_typecodes() {
        for bad in ["", "q", "ii", "x", "I ", "a"] {
            let err = ElementKind::from_typecode(bad).unwrap_err();
            assert_eq!(
                err,
                ContainerError::InvalidKind {
                    typecode: bad.to_owned()
                }
            );
        }
        assert!(ElementKind::try_from('z').is_err());
    }

    #[test]
    fn test_kind_classification() {
        assert!(ElementKind::Any.is_wildcard());
        assert!(!ElementKind::Any.is_integer());
        assert!(ElementKind::F32.is_float());
        assert!(ElementKind::U16.is_integer());
        assert_eq!(ElementKind::I16.item_size(), Some(2));
        assert_eq!(ElementKind::F64.item_size(), Some(8));
        assert_eq!(ElementKind::Any.item_size(), None);
        assert_eq!(ElementKind::U8.int_range(), Some((0, 255)));
        assert_eq!(ElementKind::F32.int_range(), None);
    }

    #[test]
    fn test_native_elements_support_own_kind_only() {
        assert!(i32::supports(ElementKind::I32));
        assert!(!i32::supports(ElementKind::I64));
        assert!(!f32::supports(ElementKind::F64));
        assert!(u8::supports(ElementKind::U8));
        assert_eq!(i16::placeholder(ElementKind::I16), 0);
        assert_eq!(f64::placeholder(ElementKind::F64), 0.0);
    }

    #[test]
    fn test_value_admits_integer_kinds() {
        assert!(Value::Int(127).admits(ElementKind::I8));
        assert!(!Value::Int(128).admits(ElementKind::I8));
        assert!(!Value::Int(-1).admits(ElementKind::U32));
        assert!(Value::Int(u64::MAX as i128).admits(ElementKind::U64));
        assert!(!Value::Int(u64::MAX as i128 + 1).admits(ElementKind::U64));
        assert!(Value::Bool(true).admits(ElementKind::I32));
        assert!(!Value::Float(1.0).admits(ElementKind::I32));
        assert!(!Value::Null.admits(ElementKind::I32));
        assert!(!Value::from("7").admits(ElementKind::I32));
    }

    #[test]
    fn test_value_admits_float_and_wildcard_kinds() {
        assert!(Value::Float(1.5).admits(ElementKind::F32));
        assert!(Value::Int(3).admits(ElementKind::F64));
        assert!(!Value::Text("x".into()).admits(ElementKind::F64));
        assert!(!Value::Null.admits(ElementKind::F64));
        for v in [Value::Null, Value::from("x"), Value::Int(-5), Value::Float(0.5)] {
            assert!(v.admits(ElementKind::Any));
        }
    }

    #[test]
    fn test_value_placeholders_and_conversions() {
        assert_eq!(Value::placeholder(ElementKind::Any), Value::Null);
        assert_eq!(Value::placeholder(ElementKind::U8), Value::Int(0));
        assert_eq!(Value::placeholder(ElementKind::F32), Value::Float(0.0));
        assert_eq!(Value::from(5u8), Value::Int(5));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(2.5)), Value::Float(2.5));
        assert_eq!(Value::Bool(true).as_int(), Some(1));
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
    }

    #[test]
    fn test_check_helpers() {
        assert!(check_supported::<Value>(ElementKind::I8).is_ok());
        let err = check_supported::<i32>(ElementKind::F64).unwrap_err();
        assert_eq!(
            err,
            ContainerError::UnsupportedKind {
                kind: ElementKind::F64,
                element: "i32"
            }
        );
        let err = check_value(&Value::Int(300), ElementKind::U8).unwrap_err();
        assert_eq!(
            err,
            ContainerError::TypeMismatch {
                kind: ElementKind::U8,
                value: "300".into()
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        for kind in ElementKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<ElementKind>(&json).unwrap(), kind);
        }
        assert_eq!(serde_json::to_string(&ElementKind::F64).unwrap(), "\"F64\"");

        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(-300),
            Value::Float(2.5),
            Value::from("text"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
