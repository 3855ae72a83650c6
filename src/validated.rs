//! The fluent result wrapper
//!
//! [`ValidatedValue<T>`] is what every check hands back on success. Holding one is
//! evidence that the wrapped value already passed the check that produced it, so the
//! value can be carried forward without re-validating it ad hoc.
//!
//! A chain starts with a free check function, continues through `and_*` methods on the
//! wrapper, and ends by unwrapping:
//!
//! ```rust
//! use requires::{not_null_or_whitespace, RequireError};
//!
//! fn username(input: Option<&str>) -> Result<String, RequireError> {
//!     let name = not_null_or_whitespace(input)?
//!         .and_min(3)?
//!         .and_max(20)?
//!         .and(|s| s.chars().all(|c| c.is_alphanumeric() || c == '_'))?;
//!
//!     Ok(name.to_string())
//! }
//!
//! assert_eq!(username(Some("john_doe")).unwrap(), "john_doe");
//! assert!(username(Some("jd")).is_err());
//! assert!(username(None).is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::error::{fail, Invalid, RequireError, Result};

/// A value that has passed a check.
///
/// Construct one through a check such as [`not_null`](crate::not_null). The only
/// mutation-free way to get the value back out is [`into_inner`](Self::into_inner),
/// [`value`](Self::value), or the `Deref`/`AsRef`/`Borrow` impls.
///
/// # Example
///
/// ```rust
/// use requires::min;
///
/// let age = min(21, 18).unwrap();
/// assert_eq!(*age, 21);
/// assert_eq!(age.into_inner(), 21);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatedValue<T> {
    value: T,
}

impl<T> ValidatedValue<T> {
    /// Wrap a value without checking it.
    ///
    /// This is what checks call once their condition holds. Calling it directly is
    /// legal but the wrapper then proves nothing about the value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the validated value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper, returning the validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Apply `f` to the value and return its result, leaving the chain.
    ///
    /// Whatever `f` returns is passed through unchanged, including any `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_null;
    ///
    /// let len = not_null(Some("hello")).unwrap().map(str::len);
    /// assert_eq!(len, 5);
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        f(self.value)
    }

    /// Hand the value to `f` for a side effect, ending the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_null;
    ///
    /// let mut seen = None;
    /// not_null(Some(7)).unwrap().then(|v| seen = Some(v));
    /// assert_eq!(seen, Some(7));
    /// ```
    #[inline]
    pub fn then<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        f(self.value)
    }

    /// Check an ad hoc condition and keep chaining.
    ///
    /// Returns the same wrapper when `predicate` holds, otherwise
    /// [`RequireError::PredicateFailed`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::{not_null, ErrorKind};
    ///
    /// let ok = not_null(Some("valid")).unwrap().and(|v| *v != "invalid");
    /// assert!(ok.is_ok());
    ///
    /// let err = not_null(Some("invalid")).unwrap().and(|v| *v != "invalid");
    /// assert_eq!(err.unwrap_err().kind(), ErrorKind::PredicateFailed);
    /// ```
    pub fn and<P>(self, predicate: P) -> Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.value) {
            Ok(self)
        } else {
            fail(RequireError::predicate_failed())
        }
    }

    /// Convert the value with `TryInto`, failing with
    /// [`Invalid::Conversion`] if the conversion is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_negative;
    ///
    /// let small = not_negative(200_i32).unwrap().and_try_into::<u8>().unwrap();
    /// assert_eq!(*small, 200_u8);
    ///
    /// assert!(not_negative(300_i32).unwrap().and_try_into::<u8>().is_err());
    /// ```
    pub fn and_try_into<U>(self) -> Result<ValidatedValue<U>>
    where
        T: TryInto<U>,
        <T as TryInto<U>>::Error: fmt::Display,
    {
        match self.value.try_into() {
            Ok(converted) => Ok(ValidatedValue::new(converted)),
            Err(e) => fail(RequireError::invalid(Invalid::Conversion(e.to_string()))),
        }
    }
}

impl<T> Deref for ValidatedValue<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for ValidatedValue<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Borrow<T> for ValidatedValue<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedValue").field(&self.value).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ValidatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_value_and_into_inner() {
        let v = ValidatedValue::new(String::from("1"));
        assert_eq!(v.value(), "1");
        assert_eq!(v.into_inner(), "1");
    }

    #[test]
    fn test_deref_unwraps() {
        let v = ValidatedValue::new(1);
        let raw: i32 = *v;
        assert_eq!(raw, 1);
    }

    #[test]
    fn test_deref_reaches_inner_methods() {
        let v = ValidatedValue::new(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.first(), Some(&1));
    }

    #[test]
    fn test_as_ref_and_borrow() {
        let v = ValidatedValue::new(String::from("abc"));
        let r: &String = v.as_ref();
        assert_eq!(r, "abc");
        let b: &String = v.borrow();
        assert_eq!(b, "abc");
    }

    #[test]
    fn test_map_converts_type() {
        let v = ValidatedValue::new("1");
        assert!(v.map(|_| true));
    }

    #[test]
    fn test_map_passes_result_through() {
        let v = ValidatedValue::new("x1");
        let parsed: std::result::Result<i32, _> = v.map(str::parse::<i32>);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_then_runs_once() {
        let input = "1";
        let mut calls = 0;
        ValidatedValue::new(input).then(|v| {
            calls += 1;
            assert_eq!(v, input);
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_and_keeps_value() {
        let result = ValidatedValue::new("valid").and(|v| *v != "invalid");
        assert_eq!(result.unwrap().into_inner(), "valid");
    }

    #[test]
    fn test_and_fails() {
        let result = ValidatedValue::new("invalid").and(|v| *v != "invalid");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::PredicateFailed);
    }

    #[test]
    fn test_and_try_into_success() {
        let v = ValidatedValue::new(42_i64).and_try_into::<u16>().unwrap();
        assert_eq!(*v, 42_u16);
    }

    #[test]
    fn test_and_try_into_failure() {
        let err = ValidatedValue::new(-1_i32).and_try_into::<u32>().unwrap_err();
        assert!(matches!(
            err,
            RequireError::InvalidArgument {
                reason: Invalid::Conversion(_),
                ..
            }
        ));
    }

    #[test]
    fn test_display_and_debug() {
        let v = ValidatedValue::new(42);
        assert_eq!(format!("{}", v), "42");
        assert_eq!(format!("{:?}", v), "ValidatedValue(42)");
    }

    #[test]
    fn test_eq_and_ord_delegate() {
        assert_eq!(ValidatedValue::new(1), ValidatedValue::new(1));
        assert!(ValidatedValue::new(1) < ValidatedValue::new(2));
    }
}
