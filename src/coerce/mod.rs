//! Turning one error back into the list of errors it stands for.
//!
//! - [`coerce_fast`] recognizes only [`ErrorSlice`] itself.
//! - [`coerce`] also recognizes foreign [`ErrorSequence`](crate::ErrorSequence)
//!   types that were registered with [`register_sequence`].
//!
//! Both return `None` for `None`, so "no error" stays distinguishable from an
//! empty list.
//!
//! # Examples
//!
//! ```
//! use error_slice::{append, coerce, BoxError};
//!
//! fn print_all(err: Option<BoxError>) -> Vec<String> {
//!     coerce(err)
//!         .into_iter()
//!         .flatten()
//!         .map(|e| format!("Error: {e}"))
//!         .collect()
//! }
//!
//! let err = append([Some("no writing!".into()), Some("no closing!".into())]);
//! assert_eq!(print_all(err), ["Error: no writing!", "Error: no closing!"]);
//! assert!(print_all(None).is_empty());
//! ```

use crate::types::{BoxError, ErrorSlice};

#[cfg(feature = "std")]
mod registry;

#[cfg(feature = "std")]
pub use registry::{is_registered, register_sequence};

/// Converts an error into a list, recognizing only [`ErrorSlice`].
///
/// - `None` stays `None`.
/// - An `ErrorSlice` is moved out of its box and returned as is; its storage is
///   not copied.
/// - Anything else becomes a one-element list, including foreign error lists.
///
/// # Examples
///
/// ```
/// use error_slice::{coerce_fast, BoxError, ErrorSlice};
///
/// assert!(coerce_fast(None).is_none());
///
/// let single = coerce_fast(Some("one".into())).unwrap();
/// assert_eq!(single.len(), 1);
///
/// let pair: ErrorSlice = ["one", "two"].into_iter().map(BoxError::from).collect();
/// let back = coerce_fast(Some(pair.into_error())).unwrap();
/// assert_eq!(back.len(), 2);
/// ```
#[inline]
pub fn coerce_fast(err: Option<BoxError>) -> Option<ErrorSlice> {
    err.map(coerce_fast_one)
}

/// Converts an error into a list, also recognizing registered foreign lists.
///
/// Behaves like [`coerce_fast`], except that an error whose concrete type was
/// registered with [`register_sequence`] has its elements copied into a new
/// [`ErrorSlice`] instead of being wrapped as a single element. A type that is
/// not registered is never an error here; it is simply wrapped.
///
/// Without the `std` feature there is no registry and this is the same as
/// [`coerce_fast`].
#[inline]
pub fn coerce(err: Option<BoxError>) -> Option<ErrorSlice> {
    err.map(coerce_one)
}

pub(crate) fn coerce_fast_one(err: BoxError) -> ErrorSlice {
    match err.downcast::<ErrorSlice>() {
        Ok(errors) => *errors,
        Err(err) => ErrorSlice::single(err),
    }
}

pub(crate) fn coerce_one(err: BoxError) -> ErrorSlice {
    let err = match err.downcast::<ErrorSlice>() {
        Ok(errors) => return *errors,
        Err(err) => err,
    };
    match probe_sequence(err) {
        Ok(errors) => errors,
        Err(err) => ErrorSlice::single(err),
    }
}

/// Tries every registered foreign shape, handing `err` back untouched on no match.
#[inline]
pub(crate) fn probe_sequence(err: BoxError) -> Result<ErrorSlice, BoxError> {
    #[cfg(feature = "std")]
    {
        registry::probe(err)
    }
    #[cfg(not(feature = "std"))]
    {
        Err(err)
    }
}
