//! The check catalog
//!
//! Each check comes in two forms:
//! - an entry form, a free function taking the raw value, which starts a chain
//! - a chaining form, an `and_*` method on [`ValidatedValue`](crate::ValidatedValue),
//!   which re-applies the same check to the held value and continues the chain
//!
//! Both forms fail fast with a [`RequireError`](crate::RequireError) at the first
//! unmet condition.
//!
//! # Example
//!
//! ```rust
//! use requires::{not_null_or_empty, RequireError};
//!
//! fn tags(input: Option<Vec<&str>>) -> Result<Vec<&str>, RequireError> {
//!     Ok(not_null_or_empty(input)?
//!         .and_no_duplicates()?
//!         .into_inner())
//! }
//!
//! assert_eq!(tags(Some(vec!["a", "b"])).unwrap(), vec!["a", "b"]);
//! assert!(tags(Some(vec!["a", "a"])).is_err());
//! assert!(tags(Some(vec![])).is_err());
//! assert!(tags(None).is_err());
//! ```

mod collection;
mod number;
mod presence;
mod string;

pub use collection::{distinct, is_in, no_duplicates, not_empty, not_null_or_empty};
pub use number::{in_range, max, min, not_negative, Bounded, Numeric};
pub use presence::{not_default, not_null, Nullable};
pub use string::{contains, not_null_or_whitespace};
