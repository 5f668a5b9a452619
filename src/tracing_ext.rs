//! Tracing integration for error-slice.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-slice = { version = "0.1", features = ["tracing"] }
//! ```

use crate::types::{BoxError, ErrorSlice};

/// Emits one `ERROR` event per constituent error.
///
/// An [`ErrorSlice`] is reported element by element with `index` and `total`
/// fields; any other error is reported as a single event. Returns the number of
/// events emitted.
///
/// # Examples
///
/// ```
/// use error_slice::{append, report};
///
/// let err = append([Some("no writing!".into()), Some("no closing!".into())]).unwrap();
/// assert_eq!(report(&*err), 2);
/// ```
pub fn report(err: &(dyn core::error::Error + 'static)) -> usize {
    match err.downcast_ref::<ErrorSlice>() {
        Some(errors) => {
            let total = errors.len();
            for (index, error) in errors.iter().enumerate() {
                tracing::error!(index, total, error = %error, "operation failed");
            }
            total
        },
        None => {
            tracing::error!(index = 0usize, total = 1usize, error = %err, "operation failed");
            1
        },
    }
}

/// Reports an optional error with [`report`], returning 0 for `None`.
#[inline]
pub fn report_opt(err: Option<&BoxError>) -> usize {
    err.map_or(0, |err| report(&**err))
}
