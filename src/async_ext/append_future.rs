//! Future wrapper that merges a cleanup future's failure into a prior error.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::append::append2;
use crate::types::BoxError;

pin_project! {
    /// A future that awaits a fallible cleanup and merges its failure after a
    /// prior error.
    ///
    /// Resolves to the merged `Option<BoxError>`, following the same rules as
    /// [`append_call`](crate::append_call).
    ///
    /// # Cancel Safety
    ///
    /// Dropping this future before completion drops the prior error with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_slice::async_ext::FutureAppendExt;
    /// use error_slice::BoxError;
    ///
    /// async fn example() -> Option<BoxError> {
    ///     async { Err::<(), _>("no closing!") }
    ///         .append_to(Some("no writing!".into()))
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct AppendCallFuture<Fut> {
        #[pin]
        future: Fut,
        prior: Option<Option<BoxError>>,
    }
}

impl<Fut> AppendCallFuture<Fut> {
    /// Creates a future that merges `future`'s failure after `prior`.
    #[inline]
    pub fn new(prior: Option<BoxError>, future: Fut) -> Self {
        Self { future, prior: Some(prior) }
    }
}

impl<Fut, E> Future for AppendCallFuture<Fut>
where
    Fut: Future<Output = Result<(), E>>,
    E: Into<BoxError>,
{
    type Output = Option<BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let prior = this
                .prior
                .take()
                .expect("AppendCallFuture polled after completion; this is a bug");
            append2(prior, res.err().map(Into::into))
        })
    }
}

impl<Fut, E> FusedFuture for AppendCallFuture<Fut>
where
    Fut: Future<Output = Result<(), E>>,
    E: Into<BoxError>,
{
    fn is_terminated(&self) -> bool {
        self.prior.is_none()
    }
}

/// Extension trait for merging a cleanup future's failure into a prior error.
pub trait FutureAppendExt<E>: Future<Output = Result<(), E>> + Sized {
    /// Awaits this future and merges its failure after `prior`.
    #[inline]
    fn append_to(self, prior: Option<BoxError>) -> AppendCallFuture<Self> {
        AppendCallFuture::new(prior, self)
    }
}

impl<F, E> FutureAppendExt<E> for F where F: Future<Output = Result<(), E>> {}

/// Awaits `future` and merges its failure into `slot`.
///
/// The async form of [`append_call`](crate::append_call). `slot` is left
/// untouched if this future is dropped before `future` completes.
///
/// # Examples
///
/// ```rust
/// use error_slice::async_ext::append_call_async;
/// use error_slice::BoxError;
///
/// async fn close_all() -> Option<BoxError> {
///     let mut err = None;
///     append_call_async(&mut err, async { Err::<(), _>("no writing!") }).await;
///     append_call_async(&mut err, async { Err::<(), _>("no closing!") }).await;
///     err
/// }
/// ```
pub async fn append_call_async<Fut, E>(slot: &mut Option<BoxError>, future: Fut)
where
    Fut: Future<Output = Result<(), E>>,
    E: Into<BoxError>,
{
    let err = future.await.err().map(Into::into);
    *slot = append2(slot.take(), err);
}
