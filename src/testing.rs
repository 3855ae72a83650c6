//! Assertion macros for testing code built on checks
//!
//! # Examples
//!
//! ```rust
//! use requires::{assert_fails, assert_passes, min};
//!
//! let value = assert_passes!(min(12, 10));
//! assert_eq!(value, 12);
//!
//! assert_fails!(min(8, 10));
//! assert_fails!(min(8, 10), OutOfRange);
//! ```

/// Assert that a check passes, evaluating to the unwrapped value.
///
/// Panics with the error's message if the check failed.
///
/// # Example
///
/// ```rust
/// use requires::{assert_passes, not_null};
///
/// let name = assert_passes!(not_null(Some("alice")));
/// assert_eq!(name, "alice");
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Ok(validated) => $crate::ValidatedValue::into_inner(validated),
            ::std::result::Result::Err(e) => {
                panic!("Expected check to pass, got: {}", e);
            }
        }
    };
}

/// Assert that a check fails, optionally with a given [`ErrorKind`](crate::ErrorKind).
///
/// # Example
///
/// ```rust
/// use requires::{assert_fails, not_null_or_whitespace};
///
/// assert_fails!(not_null_or_whitespace("  "));
/// assert_fails!(not_null_or_whitespace("  "), InvalidArgument);
/// assert_fails!(not_null_or_whitespace(None::<&str>), Null);
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(v) => {
                panic!("Expected check to fail, got: {:?}", v);
            }
        }
    };
    ($check:expr, $kind:ident) => {
        match $check {
            ::std::result::Result::Err(e) => {
                assert_eq!(
                    $crate::RequireError::kind(&e),
                    $crate::ErrorKind::$kind,
                    "Expected {} failure, got: {}",
                    $crate::ErrorKind::$kind,
                    e
                );
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected {} failure, got: {:?}",
                    $crate::ErrorKind::$kind,
                    v
                );
            }
        }
    };
}

/// Assert that a check fails with exactly the expected error.
///
/// # Example
///
/// ```rust
/// use requires::{assert_fails_with, not_default, Invalid, RequireError};
///
/// assert_fails_with!(
///     not_default(0),
///     RequireError::InvalidArgument { param: "value".into(), reason: Invalid::Default }
/// );
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($check:expr, $expected:expr) => {
        match $check {
            ::std::result::Result::Err(e) => {
                assert_eq!(e, $expected);
            }
            ::std::result::Result::Ok(v) => {
                panic!("Expected failure {:?}, got: {:?}", $expected, v);
            }
        }
    };
}
