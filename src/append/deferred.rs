//! Reporting cleanup failures without losing the primary failure.
//!
//! - [`append_call`] runs a fallible operation and merges its failure into an
//!   error slot.
//! - [`AppendGuard`] runs a fallible cleanup on every exit path of a scope.
//! - [`finally`] runs a body and then its cleanup, returning both failures.
//!
//! # Examples
//!
//! ```
//! use error_slice::finally;
//! use std::io::{self, Write};
//!
//! struct Angry;
//!
//! impl Angry {
//!     fn close(&mut self) -> io::Result<()> {
//!         Err(io::Error::other("no closing!"))
//!     }
//! }
//!
//! impl Write for Angry {
//!     fn write(&mut self, _: &[u8]) -> io::Result<usize> {
//!         Err(io::Error::other("no writing!"))
//!     }
//!
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let w = std::cell::RefCell::new(Angry);
//! let err = finally(|| w.borrow_mut().write_all(b"abc"), || w.borrow_mut().close()).unwrap_err();
//! assert_eq!(err.to_string(), "no writing! and no closing!");
//! ```

use crate::append::append2;
use crate::traits::AppendResultExt;
use crate::types::BoxError;
use core::marker::PhantomData;

/// Runs `f` and merges its failure into `slot`.
///
/// `slot` keeps its current error first; `f`'s failure, if any, follows it.
/// When `slot` is empty, it simply receives `f`'s failure unchanged.
///
/// # Examples
///
/// ```
/// use error_slice::{append_call, BoxError};
///
/// let mut err: Option<BoxError> = None;
///
/// append_call(&mut err, || Err::<(), _>("no writing!"));
/// assert_eq!(err.as_ref().unwrap().to_string(), "no writing!");
///
/// append_call(&mut err, || Err::<(), _>("no closing!"));
/// assert_eq!(err.unwrap().to_string(), "no writing! and no closing!");
/// ```
#[inline]
pub fn append_call<F, E>(slot: &mut Option<BoxError>, f: F)
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    let err = f().err().map(Into::into);
    *slot = append2(slot.take(), err);
}

/// Runs `body`, then always runs `cleanup`, reporting both failures.
///
/// `cleanup` runs even if `body` panics. On that path there is no result to
/// merge into, so a cleanup failure is only logged (with the `tracing`
/// feature) before unwinding continues.
#[inline]
pub fn finally<T, E, B, C, CE>(body: B, cleanup: C) -> Result<T, BoxError>
where
    B: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    C: FnOnce() -> Result<(), CE>,
    CE: Into<BoxError>,
{
    let guard = AppendGuard::new(cleanup);
    let result = body();
    guard.finish(result)
}

/// Drop guard that runs a fallible cleanup when its scope exits.
///
/// Call [`finish`](AppendGuard::finish) (or
/// [`finish_into`](AppendGuard::finish_into)) on the normal path to merge the
/// cleanup failure into the outgoing result. If the guard is dropped instead,
/// for example by `?` or a panic, the cleanup still runs; its failure is logged
/// with the `tracing` feature and otherwise discarded.
///
/// # Examples
///
/// ```
/// use error_slice::{AppendGuard, BoxError};
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
///
/// let run = |fail_early: bool| -> Result<u32, BoxError> {
///     let guard = AppendGuard::new(|| {
///         closed.set(true);
///         Err::<(), _>("no closing!")
///     });
///     if fail_early {
///         Err::<(), _>("no writing!")?;
///     }
///     guard.finish(Ok::<_, BoxError>(7))
/// };
///
/// assert_eq!(run(false).unwrap_err().to_string(), "no closing!");
/// assert!(closed.replace(false));
///
/// assert_eq!(run(true).unwrap_err().to_string(), "no writing!");
/// assert!(closed.get());
/// ```
#[must_use = "the cleanup runs as soon as the guard is dropped"]
pub struct AppendGuard<F, E>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    cleanup: Option<F>,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> AppendGuard<F, E>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    /// Arms a guard around `cleanup`.
    #[inline]
    pub fn new(cleanup: F) -> Self {
        Self { cleanup: Some(cleanup), _error: PhantomData }
    }

    /// Runs the cleanup now and merges its failure into `result`.
    pub fn finish<T, E0>(mut self, result: Result<T, E0>) -> Result<T, BoxError>
    where
        E0: Into<BoxError>,
    {
        match self.cleanup.take() {
            Some(cleanup) => result.append_with(cleanup),
            None => result.map_err(Into::into),
        }
    }

    /// Runs the cleanup now and merges its failure into `slot`.
    pub fn finish_into(mut self, slot: &mut Option<BoxError>) {
        if let Some(cleanup) = self.cleanup.take() {
            append_call(slot, cleanup);
        }
    }
}

impl<F, E> Drop for AppendGuard<F, E>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    fn drop(&mut self) {
        let Some(cleanup) = self.cleanup.take() else {
            return;
        };
        if let Err(err) = cleanup() {
            let err: BoxError = err.into();
            #[cfg(feature = "tracing")]
            tracing::warn!(
                error = %err,
                panicking = std::thread::panicking(),
                "cleanup failed after its scope exited early"
            );
            drop(err);
        }
    }
}
