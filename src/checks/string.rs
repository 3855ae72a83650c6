//! String checks
//!
//! Length bounds for strings live with the other bounds in
//! [`number`](super::number); they measure characters, not bytes.

use crate::checks::presence::Nullable;
use crate::error::{fail, Invalid, RequireError, Result};
use crate::validated::ValidatedValue;

/// Require a present string containing at least one non-whitespace character.
///
/// `None` fails with [`RequireError::Null`]; an empty or whitespace-only string fails
/// with [`Invalid::Blank`].
///
/// # Example
///
/// ```rust
/// use requires::{not_null_or_whitespace, ErrorKind};
///
/// assert_eq!(*not_null_or_whitespace("valid").unwrap(), "valid");
/// assert_eq!(not_null_or_whitespace("").unwrap_err().kind(), ErrorKind::InvalidArgument);
/// assert_eq!(not_null_or_whitespace("   ").unwrap_err().kind(), ErrorKind::InvalidArgument);
/// assert_eq!(not_null_or_whitespace(None::<&str>).unwrap_err().kind(), ErrorKind::Null);
/// ```
pub fn not_null_or_whitespace<S>(value: impl Nullable<S>) -> Result<ValidatedValue<S>>
where
    S: AsRef<str>,
{
    let Some(value) = value.into_option() else {
        return fail(RequireError::null());
    };
    if value.as_ref().trim().is_empty() {
        return fail(RequireError::invalid(Invalid::Blank));
    }
    Ok(ValidatedValue::new(value))
}

/// Require the string to contain `needle`.
///
/// # Example
///
/// ```rust
/// use requires::contains;
///
/// assert_eq!(*contains("a@b.c", '@').unwrap(), "a@b.c");
/// assert_eq!(
///     contains("user", '@').unwrap_err().to_string(),
///     "value: 'user' does not contain '@'"
/// );
/// ```
pub fn contains<S>(value: S, needle: char) -> Result<ValidatedValue<S>>
where
    S: AsRef<str>,
{
    if !value.as_ref().contains(needle) {
        return fail(RequireError::invalid(Invalid::MissingChar {
            value: value.as_ref().to_owned(),
            needle,
        }));
    }
    Ok(ValidatedValue::new(value))
}

impl<S> ValidatedValue<S>
where
    S: AsRef<str>,
{
    /// Chaining form of [`not_null_or_whitespace`]. The held string is never absent,
    /// so only blankness can fail here.
    pub fn and_not_null_or_whitespace(self) -> Result<Self> {
        not_null_or_whitespace(Some(self.into_inner()))
    }

    /// Chaining form of [`contains`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use requires::not_null_or_whitespace;
    ///
    /// let email = not_null_or_whitespace("user@example.com")
    ///     .and_then(|v| v.and_contains('@'))
    ///     .unwrap();
    /// assert_eq!(*email, "user@example.com");
    ///
    /// assert!(not_null_or_whitespace("user")
    ///     .and_then(|v| v.and_contains('@'))
    ///     .is_err());
    /// ```
    pub fn and_contains(self, needle: char) -> Result<Self> {
        contains(self.into_inner(), needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_not_null_or_whitespace_valid() {
        let value = "valid";
        assert_eq!(*not_null_or_whitespace(value).unwrap(), value);
    }

    #[test]
    fn test_not_null_or_whitespace_null() {
        let err = not_null_or_whitespace(None::<String>).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Null);
    }

    #[test]
    fn test_not_null_or_whitespace_empty() {
        let err = not_null_or_whitespace(String::new()).unwrap_err();
        assert_eq!(
            err,
            RequireError::InvalidArgument {
                param: "value".into(),
                reason: Invalid::Blank,
            }
        );
    }

    #[test]
    fn test_not_null_or_whitespace_whitespace() {
        assert!(not_null_or_whitespace("   ").is_err());
        assert!(not_null_or_whitespace("\t\n").is_err());
        assert!(not_null_or_whitespace("\u{2003}").is_err());
    }

    #[test]
    fn test_not_null_or_whitespace_keeps_padding() {
        let result = not_null_or_whitespace(Some(String::from("  x  "))).unwrap();
        assert_eq!(result.as_str(), "  x  ");
    }

    #[test]
    fn test_and_not_null_or_whitespace() {
        let result = ValidatedValue::new("valid").and_not_null_or_whitespace();
        assert_eq!(*result.unwrap(), "valid");

        let err = ValidatedValue::new(String::new())
            .and_not_null_or_whitespace()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert!(ValidatedValue::new("   ")
            .and_not_null_or_whitespace()
            .is_err());
    }

    #[test]
    fn test_contains() {
        assert!(contains("a,b", ',').is_ok());
        let err = contains("ab", ',').unwrap_err();
        assert_eq!(
            err,
            RequireError::InvalidArgument {
                param: "value".into(),
                reason: Invalid::MissingChar {
                    value: "ab".into(),
                    needle: ',',
                },
            }
        );
    }

    #[test]
    fn test_and_contains() {
        let result = ValidatedValue::new(String::from("key=value")).and_contains('=');
        assert_eq!(result.unwrap().as_str(), "key=value");
        assert!(ValidatedValue::new("key").and_contains('=').is_err());
    }
}
