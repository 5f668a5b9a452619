//! Foreign error lists.
//!
//! Libraries often define their own "list of errors" type to control how it is
//! displayed. Such a type is not an [`ErrorSlice`](crate::ErrorSlice), so by
//! default merging treats it as one opaque error. Implementing
//! [`ErrorSequence`] and registering the type with
//! [`register_sequence`](crate::register_sequence) lets
//! [`coerce`](crate::coerce) and [`append`](crate::append) see through it.
//!
//! # Examples
//!
//! ```
//! use error_slice::{coerce, error_sequence, register_sequence, BoxError};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Problems(Vec<BoxError>);
//!
//! impl fmt::Display for Problems {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{} problems", self.0.len())
//!     }
//! }
//!
//! impl std::error::Error for Problems {}
//!
//! error_sequence!(Problems);
//! register_sequence::<Problems>();
//!
//! let err: BoxError = Box::new(Problems(vec!["one".into(), "two".into()]));
//! let errors = coerce(Some(err)).unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string(), "one and two");
//! ```

use crate::types::{BoxError, ErrorVec};

/// An error type whose content is an ordered list of errors.
///
/// Implementors give up their own identity when merged: their elements are
/// copied into an [`ErrorSlice`](crate::ErrorSlice) in order.
pub trait ErrorSequence: core::error::Error + Send + Sync + Sized + 'static {
    /// Consumes the value, returning its errors in order.
    fn into_errors(self) -> ErrorVec<BoxError>;
}
