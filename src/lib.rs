//! # Requires
//!
//! Fluent guard clauses for Rust.
//!
//! A check validates one value and, on success, hands back a [`ValidatedValue`]:
//! a thin wrapper that is evidence the value passed. Further checks chain off the
//! wrapper, and the value comes back out with `?`-friendly, fail-fast errors at the
//! first unmet condition.
//!
//! ## Quick Example
//!
//! ```rust
//! use requires::{is_in, not_null_or_whitespace, require, RequireError};
//!
//! #[derive(Debug)]
//! struct Order {
//!     sku: String,
//!     quantity: u32,
//!     currency: &'static str,
//! }
//!
//! fn place_order(sku: Option<&str>, quantity: u32, currency: &'static str)
//!     -> Result<Order, RequireError>
//! {
//!     let sku = not_null_or_whitespace(sku)?
//!         .and_max(32)?
//!         .and_contains('-')?
//!         .map(str::to_uppercase);
//!     let quantity = require!(in_range, quantity, 1, 100)?.into_inner();
//!     let currency = is_in(["EUR", "USD"], currency)?.into_inner();
//!
//!     Ok(Order { sku, quantity, currency })
//! }
//!
//! let order = place_order(Some("ab-12"), 3, "EUR").unwrap();
//! assert_eq!(order.sku, "AB-12");
//!
//! let err = place_order(Some("ab-12"), 0, "EUR").unwrap_err();
//! assert_eq!(err.param(), "quantity");
//! ```
//!
//! ## Checks
//!
//! | Entry form | Chaining form | Fails with |
//! |---|---|---|
//! | [`not_null`] | [`and_not_null`](ValidatedValue::and_not_null) | `Null` |
//! | [`not_default`] | [`and_not_default`](ValidatedValue::and_not_default) | `InvalidArgument` |
//! | [`not_null_or_whitespace`] | [`and_not_null_or_whitespace`](ValidatedValue::and_not_null_or_whitespace) | `Null`, `InvalidArgument` |
//! | [`not_null_or_empty`] | [`and_not_null_or_empty`](ValidatedValue::and_not_null_or_empty) | `Null`, `InvalidArgument` |
//! | [`not_empty`] | [`and_not_null_or_empty`](ValidatedValue::and_not_null_or_empty) | `InvalidArgument` |
//! | [`no_duplicates`] | [`and_no_duplicates`](ValidatedValue::and_no_duplicates) | `Null`, `InvalidArgument` |
//! | [`distinct`] | [`and_no_duplicates`](ValidatedValue::and_no_duplicates) | `InvalidArgument` |
//! | [`contains`] | [`and_contains`](ValidatedValue::and_contains) | `InvalidArgument` |
//! | [`not_negative`] | [`and_not_negative`](ValidatedValue::and_not_negative) | `OutOfRange` |
//! | [`min`] | [`and_min`](ValidatedValue::and_min) | `OutOfRange` |
//! | [`max`] | [`and_max`](ValidatedValue::and_max) | `OutOfRange` |
//! | [`in_range`] | [`and_in_range`](ValidatedValue::and_in_range) | `OutOfRange` |
//! | [`is_in`] | [`and_in`](ValidatedValue::and_in) | `InvalidArgument` |
//!
//! `not_empty` and `distinct` take any `IntoIterator`, lazy iterators included. The
//! `Null`-aware forms take a [`Nullable`] value such as an `Option`, a `Vec`, a slice
//! or a std set.
//!
//! Ad hoc conditions go through [`ValidatedValue::and`].
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every failed check, carrying the name given
//!   by [`require!`]
//! - `serde`: `Serialize` for [`ValidatedValue`] and [`RequireError`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod checks;
pub mod error;
pub mod testing;
pub mod validated;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use checks::{
    contains, distinct, in_range, is_in, max, min, no_duplicates, not_default, not_empty,
    not_negative, not_null, not_null_or_empty, not_null_or_whitespace, Bounded, Nullable,
    Numeric,
};
pub use error::{Bound, ErrorKind, Invalid, Measure, RequireError, Result};
pub use validated::ValidatedValue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checks::*;
    pub use crate::error::{ErrorKind, RequireError};
    pub use crate::require;
    pub use crate::validated::ValidatedValue;
}
