//! Extension trait for merging a follow-up failure into a `Result`.

use crate::append::merge_pair;
use crate::types::BoxError;

/// Extension trait for reporting a second failure alongside a `Result`.
///
/// The success value survives only if both sides succeeded. When both failed,
/// the errors are merged with [`append`](crate::append) in order: this
/// result's error first.
///
/// # Examples
///
/// ```
/// use error_slice::traits::AppendResultExt;
///
/// let ok: Result<u8, &str> = Ok(7);
/// assert_eq!(ok.append_err(Ok::<(), &str>(())).unwrap(), 7);
///
/// let ok: Result<u8, &str> = Ok(7);
/// let err = ok.append_err(Err::<(), _>("close failed")).unwrap_err();
/// assert_eq!(err.to_string(), "close failed");
/// ```
pub trait AppendResultExt<T> {
    /// Merges the failure of `other`, if any, into this result.
    fn append_err<E>(self, other: Result<(), E>) -> Result<T, BoxError>
    where
        E: Into<BoxError>;

    /// Runs `f` and merges its failure, if any, into this result.
    ///
    /// `f` runs whether or not this result is a failure.
    #[inline]
    fn append_with<E, F>(self, f: F) -> Result<T, BoxError>
    where
        Self: Sized,
        E: Into<BoxError>,
        F: FnOnce() -> Result<(), E>,
    {
        self.append_err(f())
    }
}

impl<T, E0> AppendResultExt<T> for Result<T, E0>
where
    E0: Into<BoxError>,
{
    #[inline]
    fn append_err<E>(self, other: Result<(), E>) -> Result<T, BoxError>
    where
        E: Into<BoxError>,
    {
        match (self, other) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err.into()),
            (Err(err), Ok(())) => Err(err.into()),
            (Err(first), Err(second)) => Err(merge_pair(first.into(), second.into())),
        }
    }
}
