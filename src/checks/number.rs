//! Bound checks
//!
//! [`min`], [`max`] and [`in_range`] work on anything [`Bounded`]:
//! - integers and [`Decimal`] are compared by value
//! - strings are compared by their length in characters
//!
//! Floats are deliberately not [`Bounded`]; use `Decimal` where exact comparison
//! matters, or [`ValidatedValue::and`] for an ad hoc float condition.
//!
//! # Example
//!
//! ```rust
//! use requires::{in_range, min, ErrorKind};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(*in_range(9, 8, 10).unwrap(), 9);
//! assert_eq!(min(8, 10).unwrap_err().kind(), ErrorKind::OutOfRange);
//!
//! let price = Decimal::new(1999, 2); // 19.99
//! assert!(in_range(price, Decimal::ZERO, Decimal::new(20, 0)).is_ok());
//!
//! assert!(min("ab", 3).is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{fail, Bound, Measure, RequireError, Result};
use crate::validated::ValidatedValue;

/// A value that can be compared against inclusive bounds.
pub trait Bounded {
    /// Type of the bounds and of the measured quantity.
    type Bound: PartialOrd + fmt::Display;

    /// Reported in errors so callers can tell a value bound from a length bound.
    const MEASURE: Measure;

    /// The quantity compared against the bounds.
    fn measure(&self) -> Self::Bound;
}

/// A numeric kind with exact comparison semantics.
pub trait Numeric: Bounded<Bound = Self> + Copy + PartialOrd + fmt::Display {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl Bounded for $ty {
                type Bound = $ty;

                const MEASURE: Measure = Measure::Value;

                #[inline]
                fn measure(&self) -> $ty {
                    *self
                }
            }

            impl Numeric for $ty {
                const ZERO: $ty = $zero;
            }
        )+
    };
}

impl_numeric!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    Decimal => Decimal::ZERO,
);

macro_rules! impl_length_bounded {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Bounded for $ty {
                type Bound = usize;

                const MEASURE: Measure = Measure::Length;

                #[inline]
                fn measure(&self) -> usize {
                    self.chars().count()
                }
            }
        )+
    };
}

impl_length_bounded!(String, Box<str>, &str, Cow<'_, str>);

fn below_min<B: Bounded>(value: &B, min_value: &B::Bound) -> Option<RequireError> {
    let actual = value.measure();
    (actual < *min_value).then(|| {
        RequireError::out_of_range(
            actual.to_string(),
            Bound::Min(min_value.to_string()),
            B::MEASURE,
        )
    })
}

fn above_max<B: Bounded>(value: &B, max_value: &B::Bound) -> Option<RequireError> {
    let actual = value.measure();
    (actual > *max_value).then(|| {
        RequireError::out_of_range(
            actual.to_string(),
            Bound::Max(max_value.to_string()),
            B::MEASURE,
        )
    })
}

/// Require the value to be zero or greater.
///
/// # Example
///
/// ```rust
/// use requires::not_negative;
/// use rust_decimal::Decimal;
///
/// assert!(not_negative(0).is_ok());
/// assert!(not_negative(-1).is_err());
/// assert!(not_negative(Decimal::new(-1, 2)).is_err());
/// ```
pub fn not_negative<N: Numeric>(value: N) -> Result<ValidatedValue<N>> {
    if let Some(err) = below_min(&value, &N::ZERO) {
        return fail(err);
    }
    Ok(ValidatedValue::new(value))
}

/// Require `value` (or its length) to be at least `min_value`.
///
/// # Example
///
/// ```rust
/// use requires::{min, Measure, RequireError};
///
/// assert_eq!(*min(18_u8, 16).unwrap(), 18);
///
/// let err = min("ab", 3).unwrap_err();
/// assert!(matches!(err, RequireError::OutOfRange { measure: Measure::Length, .. }));
/// assert_eq!(err.to_string(), "value: length 2 cannot be less than 3");
/// ```
pub fn min<B: Bounded>(value: B, min_value: B::Bound) -> Result<ValidatedValue<B>> {
    if let Some(err) = below_min(&value, &min_value) {
        return fail(err);
    }
    Ok(ValidatedValue::new(value))
}

/// Require `value` (or its length) to be at most `max_value`.
///
/// # Example
///
/// ```rust
/// use requires::max;
/// use rust_decimal::Decimal;
///
/// assert!(max(Decimal::new(999, 2), Decimal::TEN).is_ok());
/// assert!(max(String::from("too long"), 5).is_err());
/// assert_eq!(max(120, 100).unwrap_err().to_string(), "value: value 120 cannot be more than 100");
/// ```
pub fn max<B: Bounded>(value: B, max_value: B::Bound) -> Result<ValidatedValue<B>> {
    if let Some(err) = above_max(&value, &max_value) {
        return fail(err);
    }
    Ok(ValidatedValue::new(value))
}

/// Require `min_value <= value <= max_value`.
///
/// The upper bound is checked first, so a value violating both bounds (possible only
/// with an inverted range) reports [`Bound::Max`]. The error carries both bounds.
///
/// # Example
///
/// ```rust
/// use requires::{in_range, Bound, RequireError};
///
/// let err = in_range(11, 8, 10).unwrap_err();
/// assert!(matches!(err, RequireError::OutOfRange { bound: Bound::Max(_), .. }));
///
/// let err = in_range(7, 8, 10).unwrap_err();
/// assert!(matches!(err, RequireError::OutOfRange { bound: Bound::Min(_), .. }));
/// ```
pub fn in_range<B: Bounded>(
    value: B,
    min_value: B::Bound,
    max_value: B::Bound,
) -> Result<ValidatedValue<B>> {
    if let Some(err) =
        above_max(&value, &max_value).or_else(|| below_min(&value, &min_value))
    {
        return fail(err.within(min_value.to_string(), max_value.to_string()));
    }
    Ok(ValidatedValue::new(value))
}

impl<N: Numeric> ValidatedValue<N> {
    /// Chaining form of [`not_negative`].
    pub fn and_not_negative(self) -> Result<Self> {
        not_negative(self.into_inner())
    }
}

impl<B: Bounded> ValidatedValue<B> {
    /// Chaining form of [`min`].
    pub fn and_min(self, min_value: B::Bound) -> Result<Self> {
        min(self.into_inner(), min_value)
    }

    /// Chaining form of [`max`].
    pub fn and_max(self, max_value: B::Bound) -> Result<Self> {
        max(self.into_inner(), max_value)
    }

    /// Chaining form of [`in_range`].
    pub fn and_in_range(self, min_value: B::Bound, max_value: B::Bound) -> Result<Self> {
        in_range(self.into_inner(), min_value, max_value)
    }
}
