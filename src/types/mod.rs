//! Error list types and formatting utilities.
//!
//! This module provides [`ErrorSlice`], the canonical "many errors as one error"
//! container, plus the list formatter that renders it.
//!
//! # Examples
//!
//! ```
//! use error_slice::{BoxError, ErrorSlice};
//!
//! let errors: ErrorSlice = ["disk full", "socket closed", "lock poisoned"]
//!     .into_iter()
//!     .map(BoxError::from)
//!     .collect();
//!
//! assert_eq!(errors.to_string(), "disk full, socket closed, and lock poisoned");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_slice;
pub mod list_formatter;

pub use error_slice::*;
pub use list_formatter::{ListFormatBuilder, ListFormatConfig, ListFormatter};

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 2 elements, so the common "primary failure
/// plus cleanup failure" pair never allocates for the list itself.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Owned, type-erased error value.
///
/// This is the element type of [`ErrorSlice`] and the type every merge
/// operation accepts and returns. `None` in an `Option<BoxError>` is the
/// "no error" value.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;

/// Result alias with a [`BoxError`] failure.
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type BoxResult<T> = Result<T, BoxError>;
