//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`append_call_async`](crate::async_ext::append_call_async),
//! [`AppendCallFuture`](crate::async_ext::AppendCallFuture) and
//! [`FutureAppendExt`](crate::async_ext::FutureAppendExt).

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{append_call_async, AppendCallFuture, FutureAppendExt};
