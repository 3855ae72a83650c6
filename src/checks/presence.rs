//! Presence checks
//!
//! Absence is modelled with `Option`. Entry forms accept anything implementing
//! [`Nullable`], so both a raw value and an `Option` of it can start a chain:
//!
//! ```rust
//! use requires::{not_null, ErrorKind};
//!
//! assert_eq!(*not_null("1").unwrap(), "1");
//! assert_eq!(*not_null(Some("1")).unwrap(), "1");
//! assert_eq!(not_null(None::<&str>).unwrap_err().kind(), ErrorKind::Null);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::error::{fail, Invalid, RequireError, Result};
use crate::validated::ValidatedValue;

/// A value that may be absent.
///
/// Implemented for `Option<T>` and for the types usually passed around as arguments:
/// strings, vectors, slices, arrays and the std sets. A raw value is always present;
/// `None` is the only absent value. Other iterables, lazy iterators included, go
/// through the present-value checks [`not_empty`](crate::not_empty) and
/// [`distinct`](crate::distinct).
pub trait Nullable<T> {
    /// `Some` when the value is present.
    fn into_option(self) -> Option<T>;
}

impl<T> Nullable<T> for Option<T> {
    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

/// Present-only `Nullable` impls, one per argument type.
macro_rules! impl_present {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Nullable<$ty> for $ty {
                #[inline]
                fn into_option(self) -> Option<$ty> {
                    Some(self)
                }
            }
        )+
    };
}

impl_present!(
    [] String,
    ['a] &'a str,
    ['a] Cow<'a, str>,
    [] Box<str>,
    [T] Vec<T>,
    ['a, T] &'a Vec<T>,
    ['a, T] &'a [T],
    [T, const N: usize] [T; N],
    ['a, T, const N: usize] &'a [T; N],
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);

/// Require the value to be present.
///
/// # Example
///
/// ```rust
/// use requires::not_null;
///
/// let name: Option<String> = Some("alice".to_string());
/// let name = not_null(name).unwrap();
/// assert_eq!(name.as_str(), "alice");
/// ```
pub fn not_null<T>(value: impl Nullable<T>) -> Result<ValidatedValue<T>> {
    match value.into_option() {
        Some(value) => Ok(ValidatedValue::new(value)),
        None => fail(RequireError::null()),
    }
}

/// Require the value to differ from `T::default()`.
///
/// # Example
///
/// ```rust
/// use requires::{not_default, ErrorKind};
///
/// assert!(not_default(7_u64).is_ok());
/// assert_eq!(not_default(0_u64).unwrap_err().kind(), ErrorKind::InvalidArgument);
/// assert!(not_default(String::new()).is_err());
/// ```
pub fn not_default<T>(value: T) -> Result<ValidatedValue<T>>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        return fail(RequireError::invalid(Invalid::Default));
    }
    Ok(ValidatedValue::new(value))
}

impl<T> ValidatedValue<Option<T>> {
    /// Require the held `Option` to be `Some`, unwrapping it for the rest of the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::ValidatedValue;
    ///
    /// let chain = ValidatedValue::new(Some(3));
    /// assert_eq!(*chain.and_not_null().unwrap(), 3);
    ///
    /// let chain = ValidatedValue::new(None::<i32>);
    /// assert!(chain.and_not_null().is_err());
    /// ```
    pub fn and_not_null(self) -> Result<ValidatedValue<T>> {
        not_null(self.into_inner())
    }
}

impl<T> ValidatedValue<T>
where
    T: Default + PartialEq,
{
    /// Chaining form of [`not_default`].
    pub fn and_not_default(self) -> Result<Self> {
        not_default(self.into_inner())
    }
}
