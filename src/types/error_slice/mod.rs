//! The canonical error list.
//!
//! [`ErrorSlice`] is an ordered list of [`BoxError`]s that is itself an error.
//! Its message is the English-list join of its elements' messages, so it can be
//! handed to any API that expects a single error without losing any of the
//! failures it carries.

use crate::traits::ErrorSequence;
use crate::types::alloc_type::{String, Vec};
use crate::types::list_formatter::{ListFormatBuilder, ListFormatConfig, ListFormatter};
use crate::types::{BoxError, ErrorVec};
use core::fmt::Display;

mod traits;

/// An ordered list of errors that is itself an error.
///
/// Order is exactly the order in which errors were pushed or merged. Nothing is
/// deduplicated or reordered.
///
/// # Examples
///
/// ```
/// use error_slice::{BoxError, ErrorSlice};
///
/// let mut errors = ErrorSlice::new();
/// assert_eq!(errors.to_string(), "");
///
/// errors.push_error("one");
/// assert_eq!(errors.to_string(), "one");
///
/// errors.push_error("two");
/// assert_eq!(errors.to_string(), "one and two");
///
/// errors.push_error("three");
/// assert_eq!(errors.to_string(), "one, two, and three");
/// ```
#[derive(Debug, Default)]
pub struct ErrorSlice {
    pub(crate) errors: ErrorVec<BoxError>,
}

impl ErrorSlice {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Creates an empty list with room for `capacity` errors.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { errors: ErrorVec::with_capacity(capacity) }
    }

    /// Creates a list holding exactly one error.
    #[inline]
    pub fn single(error: BoxError) -> Self {
        let mut errors = ErrorVec::new();
        errors.push(error);
        Self { errors }
    }

    /// Copies the elements of a foreign error sequence into a new list.
    ///
    /// This is the statically typed counterpart of [`coerce`](crate::coerce)
    /// and works whether or not `T` has been registered.
    #[inline]
    pub fn from_sequence<T: ErrorSequence>(sequence: T) -> Self {
        Self { errors: sequence.into_errors() }
    }

    /// Converts `error` into a list, recognizing registered foreign sequences.
    ///
    /// See [`coerce`](crate::coerce).
    #[inline]
    pub fn from_error(error: BoxError) -> Self {
        crate::coerce::coerce_one(error)
    }

    /// Converts `error` into a list, recognizing only `ErrorSlice` itself.
    ///
    /// See [`coerce_fast`](crate::coerce_fast).
    #[inline]
    pub fn from_error_fast(error: BoxError) -> Self {
        crate::coerce::coerce_fast_one(error)
    }

    /// Appends an error.
    #[inline]
    pub fn push(&mut self, error: BoxError) {
        self.errors.push(error);
    }

    /// Appends anything that converts into a [`BoxError`].
    #[inline]
    pub fn push_error<E: Into<BoxError>>(&mut self, error: E) {
        self.errors.push(error.into());
    }

    /// Removes and returns the last error.
    #[inline]
    pub fn pop(&mut self) -> Option<BoxError> {
        self.errors.pop()
    }

    /// Returns the number of errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the errors in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, BoxError> {
        self.errors.iter()
    }

    /// Borrows the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[BoxError] {
        &self.errors
    }

    /// Consumes the list, returning the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<BoxError> {
        self.errors
    }

    /// Consumes the list, returning the errors as a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<BoxError> {
        self.errors.into_vec()
    }

    /// Boxes the list as a single [`BoxError`].
    #[inline]
    pub fn into_error(self) -> BoxError {
        crate::types::alloc_type::Box::new(self)
    }

    /// Returns a builder for customizing the rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ListFormatBuilder<'_> {
        ListFormatBuilder::new(self)
    }

    /// Renders the errors as an English list.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&ListFormatConfig::default())
    }

    /// Renders the errors with a custom formatter.
    #[must_use]
    pub fn render_with<F: ListFormatter>(&self, formatter: &F) -> String {
        formatter.format_list(self.errors.iter().map(|e| e as &dyn Display))
    }
}
