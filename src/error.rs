//! Failure taxonomy for checks
//!
//! Every check either hands back a [`ValidatedValue`](crate::ValidatedValue) or a
//! [`RequireError`] describing the first condition that was not met. Errors are
//! never accumulated: a chain stops at the first failing check.
//!
//! # Examples
//!
//! ```
//! use requires::{not_null_or_whitespace, ErrorKind};
//!
//! let err = not_null_or_whitespace("   ").unwrap_err().named("username");
//!
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(err.param(), "username");
//! assert_eq!(err.to_string(), "username: cannot be blank");
//! ```

use std::borrow::Cow;
#[cfg(feature = "tracing")]
use std::cell::Cell;
use std::error::Error as StdError;
use std::fmt;

/// Result alias used by every check.
pub type Result<T, E = RequireError> = std::result::Result<T, E>;

/// Parameter name reported when the caller has not named the checked value.
pub const DEFAULT_PARAM: &str = "value";

/// Coarse category of a [`RequireError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value, or the sequence being checked, was absent.
    Null,
    /// The value was present but structurally unacceptable.
    InvalidArgument,
    /// The value (or its length) fell outside an allowed bound.
    OutOfRange,
    /// A caller-supplied predicate returned `false`.
    PredicateFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Null => "null",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::PredicateFailed => "predicate failed",
        };
        f.write_str(name)
    }
}

/// Why a present value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    /// Equal to `T::default()`.
    Default,
    /// Empty or whitespace-only string.
    Blank,
    /// Sequence with no elements.
    Empty,
    /// Sequence with at least one repeated element.
    Duplicates,
    /// Not a member of the allowed set.
    NotAllowed {
        /// Debug rendering of the rejected value
        value: String,
        /// Debug rendering of every allowed option, in order
        allowed: Vec<String>,
    },
    /// String missing a required character.
    MissingChar {
        /// The string that was searched
        value: String,
        /// The character that was required
        needle: char,
    },
    /// A checked conversion to another type failed.
    Conversion(String),
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalid::Default => f.write_str("cannot be default"),
            Invalid::Blank => f.write_str("cannot be blank"),
            Invalid::Empty => f.write_str("cannot be empty"),
            Invalid::Duplicates => f.write_str("cannot contain duplicates"),
            Invalid::NotAllowed { value, allowed } => write!(
                f,
                "{} is not a valid option, must be one of [{}]",
                value,
                allowed.join(", ")
            ),
            Invalid::MissingChar { value, needle } => {
                write!(f, "'{}' does not contain '{}'", value, needle)
            }
            Invalid::Conversion(reason) => write!(f, "cannot be converted: {}", reason),
        }
    }
}

/// Which side of a range was violated. Holds the bound, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Lower bound (inclusive)
    Min(String),
    /// Upper bound (inclusive)
    Max(String),
}

/// What was compared against the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    /// The value itself
    Value,
    /// Length of the value in characters
    Length,
}

/// A failed check.
///
/// Carries the name of the checked parameter plus whatever the failing check knows
/// about the violation. Use [`RequireError::kind`] to branch on the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequireError {
    /// The value was absent.
    Null {
        /// Name of the checked parameter
        param: Cow<'static, str>,
    },
    /// The value was present but rejected.
    InvalidArgument {
        /// Name of the checked parameter
        param: Cow<'static, str>,
        /// What was wrong with it
        reason: Invalid,
    },
    /// The value or its length was outside a bound.
    OutOfRange {
        /// Name of the checked parameter
        param: Cow<'static, str>,
        /// Formatted measure that was compared
        actual: String,
        /// The violated bound
        bound: Bound,
        /// Both bounds, when raised by a range check
        range: Option<(String, String)>,
        /// Whether `actual` is the value or its length
        measure: Measure,
    },
    /// A caller predicate rejected the value.
    PredicateFailed {
        /// Name of the checked parameter
        param: Cow<'static, str>,
    },
}

impl RequireError {
    pub(crate) fn null() -> Self {
        RequireError::Null {
            param: Cow::Borrowed(DEFAULT_PARAM),
        }
    }

    pub(crate) fn invalid(reason: Invalid) -> Self {
        RequireError::InvalidArgument {
            param: Cow::Borrowed(DEFAULT_PARAM),
            reason,
        }
    }

    pub(crate) fn out_of_range(actual: String, bound: Bound, measure: Measure) -> Self {
        RequireError::OutOfRange {
            param: Cow::Borrowed(DEFAULT_PARAM),
            actual,
            bound,
            range: None,
            measure,
        }
    }

    pub(crate) fn predicate_failed() -> Self {
        RequireError::PredicateFailed {
            param: Cow::Borrowed(DEFAULT_PARAM),
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequireError::Null { .. } => ErrorKind::Null,
            RequireError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            RequireError::OutOfRange { .. } => ErrorKind::OutOfRange,
            RequireError::PredicateFailed { .. } => ErrorKind::PredicateFailed,
        }
    }

    /// Name of the parameter that failed.
    ///
    /// Defaults to [`DEFAULT_PARAM`] unless the error was renamed with
    /// [`RequireError::named`] or raised through [`require!`](crate::require).
    pub fn param(&self) -> &str {
        let param: &Cow<'static, str> = match self {
            RequireError::Null { param }
            | RequireError::InvalidArgument { param, .. }
            | RequireError::OutOfRange { param, .. }
            | RequireError::PredicateFailed { param } => param,
        };
        param
    }

    /// Replace the parameter name.
    ///
    /// # Examples
    ///
    /// ```
    /// use requires::not_null;
    ///
    /// let err = not_null(None::<String>).unwrap_err().named("email");
    /// assert_eq!(err.param(), "email");
    /// ```
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        match &mut self {
            RequireError::Null { param }
            | RequireError::InvalidArgument { param, .. }
            | RequireError::OutOfRange { param, .. }
            | RequireError::PredicateFailed { param } => *param = name.into(),
        }
        self
    }

    /// Attach both bounds of a range to an [`RequireError::OutOfRange`].
    /// Other variants pass through untouched.
    pub(crate) fn within(mut self, min: String, max: String) -> Self {
        if let RequireError::OutOfRange { range, .. } = &mut self {
            *range = Some((min, max));
        }
        self
    }
}

impl fmt::Display for RequireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequireError::Null { param } => write!(f, "{}: cannot be null", param),
            RequireError::InvalidArgument { param, reason } => write!(f, "{}: {}", param, reason),
            RequireError::OutOfRange {
                param,
                actual,
                bound,
                range,
                measure,
            } => {
                let subject = match measure {
                    Measure::Value => "value",
                    Measure::Length => "length",
                };
                match bound {
                    Bound::Min(min) => write!(
                        f,
                        "{}: {} {} cannot be less than {}",
                        param, subject, actual, min
                    )?,
                    Bound::Max(max) => write!(
                        f,
                        "{}: {} {} cannot be more than {}",
                        param, subject, actual, max
                    )?,
                }
                if let Some((min, max)) = range {
                    write!(f, " (expected {}..={})", min, max)?;
                }
                Ok(())
            }
            RequireError::PredicateFailed { param } => {
                write!(f, "{}: does not satisfy predicate", param)
            }
        }
    }
}

impl StdError for RequireError {}

#[cfg(feature = "tracing")]
thread_local! {
    static SCOPED_PARAM: Cell<Option<&'static str>> = const { Cell::new(None) };
}

/// Parameter name in effect while a [`require!`](crate::require) check runs.
///
/// Failures raised inside the scope are logged under this name. The previous name is
/// restored on drop, so nested `require!` calls in argument position stay correct.
#[doc(hidden)]
#[derive(Debug)]
#[must_use]
pub struct ParamScope {
    #[cfg(feature = "tracing")]
    previous: Option<&'static str>,
}

impl ParamScope {
    /// Enter a scope naming the checked parameter.
    #[allow(unused_variables)]
    pub fn enter(name: &'static str) -> Self {
        ParamScope {
            #[cfg(feature = "tracing")]
            previous: SCOPED_PARAM.with(|scoped| scoped.replace(Some(name))),
        }
    }
}

impl Drop for ParamScope {
    fn drop(&mut self) {
        #[cfg(feature = "tracing")]
        SCOPED_PARAM.with(|scoped| scoped.set(self.previous));
    }
}

/// Single exit point for failed checks.
#[inline]
pub(crate) fn fail<T>(err: RequireError) -> Result<T> {
    #[cfg(feature = "tracing")]
    {
        let scoped: Option<&str> = SCOPED_PARAM.with(Cell::get);
        let param = scoped.unwrap_or_else(|| err.param());
        tracing::debug!(kind = %err.kind(), param = %param, "requirement failed: {}", err);
    }

    Err(err)
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_fail_emits_debug_event() {
        let _ = fail::<()>(RequireError::null().named("token"));
        assert!(logs_contain("requirement failed"));
        assert!(logs_contain("param=token"));
    }

    #[traced_test]
    #[test]
    fn test_fail_logs_scoped_param() {
        {
            let _scope = ParamScope::enter("session_id");
            let _ = fail::<()>(RequireError::null());
        }
        assert!(logs_contain("param=session_id"));
        assert!(!logs_contain("param=value"));
    }

    #[traced_test]
    #[test]
    fn test_nested_scope_restores_outer_name() {
        let _outer = ParamScope::enter("outer");
        {
            let _inner = ParamScope::enter("inner");
        }
        let _ = fail::<()>(RequireError::predicate_failed());
        assert!(logs_contain("param=outer"));
        assert!(!logs_contain("param=inner"));
    }
}
