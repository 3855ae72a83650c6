//! Sequence and membership checks
//!
//! Every check here collects its input into a `Vec` exactly once. The emptiness or
//! uniqueness test runs against that `Vec`, and the same `Vec` is what the returned
//! wrapper holds, so a one-shot iterator is never traversed twice.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::checks::presence::Nullable;
use crate::error::{fail, Invalid, RequireError, Result};
use crate::validated::ValidatedValue;

/// Require a present sequence with at least one element.
///
/// Accepts any [`Nullable`] sequence; for other iterables use [`not_empty`].
///
/// # Example
///
/// ```rust
/// use requires::not_null_or_empty;
///
/// let ids = not_null_or_empty(vec![3, 1, 2]).unwrap();
/// assert_eq!(*ids, vec![3, 1, 2]);
///
/// let owned = vec![7, 8];
/// let borrowed = not_null_or_empty(&owned).unwrap();
/// assert_eq!(*borrowed, vec![&7, &8]);
///
/// assert!(not_null_or_empty(Vec::<i32>::new()).is_err());
/// assert!(not_null_or_empty(None::<Vec<i32>>).is_err());
/// ```
pub fn not_null_or_empty<I>(value: impl Nullable<I>) -> Result<ValidatedValue<Vec<I::Item>>>
where
    I: IntoIterator,
{
    match value.into_option() {
        Some(items) => not_empty(items),
        None => fail(RequireError::null()),
    }
}

/// Require an iterable with at least one element.
///
/// The present-value form of [`not_null_or_empty`]. Takes any `IntoIterator`,
/// lazy iterators included, and collects it once.
///
/// # Example
///
/// ```rust
/// use requires::not_empty;
///
/// let evens = not_empty((1..10).filter(|n| n % 2 == 0)).unwrap();
/// assert_eq!(*evens, vec![2, 4, 6, 8]);
///
/// assert!(not_empty((1..4).filter(|n| *n > 5)).is_err());
/// ```
pub fn not_empty<I>(items: I) -> Result<ValidatedValue<Vec<I::Item>>>
where
    I: IntoIterator,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    if items.is_empty() {
        return fail(RequireError::invalid(Invalid::Empty));
    }
    Ok(ValidatedValue::new(items))
}

/// Require a present sequence whose elements are all distinct.
///
/// An empty sequence has no duplicates and passes.
///
/// # Example
///
/// ```rust
/// use requires::{no_duplicates, Invalid, RequireError};
///
/// assert!(no_duplicates(vec!["a", "b"]).is_ok());
///
/// let err = no_duplicates(vec!["a", "b", "a"]).unwrap_err();
/// assert!(matches!(err, RequireError::InvalidArgument { reason: Invalid::Duplicates, .. }));
/// ```
pub fn no_duplicates<I>(value: impl Nullable<I>) -> Result<ValidatedValue<Vec<I::Item>>>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    match value.into_option() {
        Some(items) => distinct(items),
        None => fail(RequireError::null()),
    }
}

/// Require an iterable whose elements are all distinct.
///
/// The present-value form of [`no_duplicates`].
///
/// # Example
///
/// ```rust
/// use requires::distinct;
///
/// let words = "to be or not to be".split(' ');
/// assert!(distinct(words).is_err());
///
/// let letters = distinct("abc".chars()).unwrap();
/// assert_eq!(*letters, vec!['a', 'b', 'c']);
/// ```
pub fn distinct<I>(items: I) -> Result<ValidatedValue<Vec<I::Item>>>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    let seen: HashSet<&I::Item> = items.iter().collect();
    if seen.len() != items.len() {
        return fail(RequireError::invalid(Invalid::Duplicates));
    }
    Ok(ValidatedValue::new(items))
}

/// Require `value` to equal at least one element of `allowed`.
///
/// Elements are compared with `T`'s own `PartialEq`. `allowed` may yield owned values
/// or references to them.
///
/// # Example
///
/// ```rust
/// use requires::is_in;
///
/// let colors = vec![String::from("red"), String::from("green")];
///
/// assert!(is_in(&colors, String::from("red")).is_ok());
/// assert!(is_in(&colors, String::from("blue")).is_err());
/// assert!(is_in(["value"], "value").is_ok());
/// ```
pub fn is_in<I, T>(allowed: I, value: T) -> Result<ValidatedValue<T>>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + fmt::Debug,
{
    let allowed: Vec<I::Item> = allowed.into_iter().collect();
    if allowed.iter().any(|option| *option.borrow() == value) {
        return Ok(ValidatedValue::new(value));
    }
    fail(RequireError::invalid(Invalid::NotAllowed {
        value: format!("{:?}", value),
        allowed: allowed
            .iter()
            .map(|option| format!("{:?}", option.borrow()))
            .collect(),
    }))
}

impl<T> ValidatedValue<Vec<T>> {
    /// Chaining form of [`not_null_or_empty`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::ValidatedValue;
    ///
    /// assert!(ValidatedValue::new(vec![1]).and_not_null_or_empty().is_ok());
    /// assert!(ValidatedValue::new(Vec::<u8>::new()).and_not_null_or_empty().is_err());
    /// ```
    pub fn and_not_null_or_empty(self) -> Result<Self> {
        not_empty(self.into_inner())
    }

    /// Chaining form of [`no_duplicates`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_null_or_empty;
    ///
    /// let ports = not_null_or_empty(vec![80, 443])
    ///     .and_then(|ports| ports.and_no_duplicates())
    ///     .unwrap();
    /// assert_eq!(*ports, vec![80, 443]);
    ///
    /// assert!(not_null_or_empty(vec![80, 80])
    ///     .and_then(|ports| ports.and_no_duplicates())
    ///     .is_err());
    /// ```
    pub fn and_no_duplicates(self) -> Result<Self>
    where
        T: Eq + Hash,
    {
        distinct(self.into_inner())
    }
}

impl<T> ValidatedValue<T>
where
    T: PartialEq + fmt::Debug,
{
    /// Chaining form of [`is_in`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_null_or_whitespace;
    ///
    /// let level = not_null_or_whitespace("warn")
    ///     .and_then(|level| level.and_in(["debug", "info", "warn"]))
    ///     .unwrap();
    /// assert_eq!(*level, "warn");
    ///
    /// assert!(not_null_or_whitespace("trace")
    ///     .and_then(|level| level.and_in(["debug", "info", "warn"]))
    ///     .is_err());
    /// ```
    pub fn and_in<I>(self, allowed: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        is_in(allowed, self.into_inner())
    }
}
