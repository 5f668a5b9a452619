//! Merging possibly-absent errors into one.
//!
//! [`append`] is the core operation: it drops `None`s, returns a lone error
//! untouched, and otherwise builds an [`ErrorSlice`], flattening any
//! `ErrorSlice` inputs by one level.
//!
//! The helpers in [`deferred`] apply it to the usual "primary step, then
//! cleanup" shape.

use crate::coerce::probe_sequence;
use crate::types::{BoxError, ErrorSlice};

pub mod deferred;

pub use deferred::{append_call, finally, AppendGuard};

/// Merges errors, dropping `None`s and flattening [`ErrorSlice`]s one level.
///
/// - No `Some` inputs: returns `None`, never an empty list.
/// - Exactly one `Some` input: returns that very box, not wrapped or copied.
/// - Otherwise: returns an `ErrorSlice` of all inputs in order. Inputs that are
///   `ErrorSlice`s contribute their elements instead of themselves, but the
///   elements of those elements are left alone.
///
/// The first error is also checked against registered foreign
/// [`ErrorSequence`](crate::ErrorSequence) types and flattened if it matches.
/// Later errors are only flattened when they are `ErrorSlice`s; a registered
/// foreign list after the first error is kept as a single element.
///
/// # Examples
///
/// ```
/// use error_slice::{append, BoxError, ErrorSlice};
///
/// assert!(append(Vec::<Option<BoxError>>::new()).is_none());
/// assert!(append([None, None, None]).is_none());
///
/// let one: BoxError = "one".into();
/// let addr = &*one as *const _ as *const ();
/// let same = append([None, Some(one), None]).unwrap();
/// assert_eq!(&*same as *const _ as *const (), addr);
///
/// let pair: ErrorSlice = ["one", "two"].into_iter().map(BoxError::from).collect();
/// let merged = append([Some(pair.into_error()), Some("three".into())]).unwrap();
/// assert_eq!(merged.to_string(), "one, two, and three");
/// ```
pub fn append<I>(errs: I) -> Option<BoxError>
where
    I: IntoIterator<Item = Option<BoxError>>,
{
    let mut errs = errs.into_iter().flatten();

    let first = errs.next()?;
    let Some(second) = errs.next() else {
        return Some(first);
    };

    let mut acc = seed(first);
    push_flattened(&mut acc, second);
    for err in errs {
        push_flattened(&mut acc, err);
    }
    Some(acc.into_error())
}

/// Merges exactly two errors; the common case of [`append`].
///
/// # Examples
///
/// ```
/// use error_slice::append2;
///
/// assert!(append2(None, None).is_none());
///
/// let merged = append2(Some("one".into()), Some("two".into())).unwrap();
/// assert_eq!(merged.to_string(), "one and two");
/// ```
#[inline]
pub fn append2(first: Option<BoxError>, second: Option<BoxError>) -> Option<BoxError> {
    match (first, second) {
        (None, None) => None,
        (Some(err), None) | (None, Some(err)) => Some(err),
        (Some(first), Some(second)) => Some(merge_pair(first, second)),
    }
}

pub(crate) fn merge_pair(first: BoxError, second: BoxError) -> BoxError {
    let mut acc = seed(first);
    push_flattened(&mut acc, second);
    acc.into_error()
}

/// Builds the accumulator from the first error.
///
/// An `ErrorSlice` is reused without copying. The caller gave up ownership of
/// it, so growing it in place cannot be observed through another handle.
fn seed(first: BoxError) -> ErrorSlice {
    let first = match first.downcast::<ErrorSlice>() {
        Ok(errors) => return *errors,
        Err(first) => first,
    };
    match probe_sequence(first) {
        Ok(errors) => errors,
        Err(first) => ErrorSlice::single(first),
    }
}

fn push_flattened(acc: &mut ErrorSlice, err: BoxError) {
    match err.downcast::<ErrorSlice>() {
        Ok(errors) => acc.extend(*errors),
        Err(err) => acc.push(err),
    }
}
