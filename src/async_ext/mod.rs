//! Async counterparts of the deferred append helpers.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-slice = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_slice::prelude_async::*;
//!
//! async fn upload(conn: &mut Conn) -> BoxResult<()> {
//!     let mut err = conn.send(payload).await.err().map(BoxError::from);
//!     append_call_async(&mut err, conn.shutdown()).await;
//!     err.map_or(Ok(()), Err)
//! }
//! ```

mod append_future;

pub use append_future::{append_call_async, AppendCallFuture, FutureAppendExt};
