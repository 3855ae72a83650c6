//! Serde support (feature-gated)
//!
//! [`ValidatedValue<T>`] serializes exactly like `T`. There is intentionally no
//! `Deserialize` impl: a deserialized value has not passed any check, so it should
//! be deserialized as `T` and then run through one.
//!
//! [`RequireError`] serializes as a flat record with `kind`, `param` and `message`
//! fields, which is the shape API error bodies usually want.
//!
//! ```rust,ignore
//! use requires::not_null_or_whitespace;
//!
//! let name = not_null_or_whitespace("alice").unwrap();
//! assert_eq!(serde_json::to_string(&name).unwrap(), r#""alice""#);
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{ErrorKind, RequireError};
use crate::validated::ValidatedValue;

impl<T: Serialize> Serialize for ValidatedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = match self {
            ErrorKind::Null => "null",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::PredicateFailed => "predicate_failed",
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for RequireError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RequireError", 3)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("param", self.param())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
