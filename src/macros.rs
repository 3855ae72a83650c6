//! Naming the checked argument
//!
//! Checks report the parameter as `"value"` unless told otherwise. The [`require!`]
//! macro runs a check and names any error after the checked expression, so call sites
//! do not have to repeat the parameter name by hand.
//!
//! [`require!`]: crate::require

/// Run a check, naming any error after the checked expression.
///
/// The first argument is the check's function name, the second the checked value,
/// and any further arguments are passed through. For `is_in` the allowed set comes
/// first, as in the function, but the error is still named after the value.
///
/// With the `tracing` feature on, the failure event carries the same name.
///
/// # Example
///
/// ```rust
/// use requires::{require, RequireError};
///
/// fn register(username: Option<&str>, age: i32) -> Result<(), RequireError> {
///     let username = require!(not_null_or_whitespace, username)?;
///     let age = require!(in_range, age, 13, 130)?;
///     let _ = (username, age);
///     Ok(())
/// }
///
/// let err = register(None, 30).unwrap_err();
/// assert_eq!(err.param(), "username");
///
/// let err = register(Some("alice"), 7).unwrap_err();
/// assert_eq!(err.param(), "age");
/// ```
#[macro_export]
macro_rules! require {
    (is_in, $allowed:expr, $value:expr $(,)?) => {{
        let _scope = $crate::error::ParamScope::enter(stringify!($value));
        $crate::is_in($allowed, $value).map_err(|e| e.named(stringify!($value)))
    }};
    ($check:ident, $value:expr $(, $arg:expr)* $(,)?) => {{
        let _scope = $crate::error::ParamScope::enter(stringify!($value));
        $crate::$check($value $(, $arg)*).map_err(|e| e.named(stringify!($value)))
    }};
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    #[test]
    fn test_require_names_plain_identifier() {
        let email: Option<String> = None;
        let err = require!(not_null, email).unwrap_err();
        assert_eq!(err.param(), "email");
        assert_eq!(err.kind(), ErrorKind::Null);
    }

    #[test]
    fn test_require_names_expression() {
        struct Request {
            limit: i32,
        }
        let request = Request { limit: 500 };
        let err = require!(max, request.limit, 100).unwrap_err();
        assert_eq!(err.param(), "request.limit");
    }

    #[test]
    fn test_require_passes_value_through() {
        let count = 3;
        let checked = require!(in_range, count, 1, 5).unwrap();
        assert_eq!(*checked, 3);
    }

    #[test]
    fn test_require_is_in_names_value() {
        let method = "PATCH";
        let err = require!(is_in, ["GET", "POST"], method).unwrap_err();
        assert_eq!(err.param(), "method");
    }

    #[test]
    fn test_require_trailing_comma() {
        let name = "x";
        assert!(require!(min, name, 1,).is_ok());
    }
}
