//! Merge several errors into one error value, and get them back out again.
//!
//! A function that runs a primary step and then a cleanup step can fail twice.
//! Its signature only has room for one error. [`append`] folds any number of
//! possibly-absent errors into one, and [`coerce`] turns that one error back into
//! the list of errors it was built from.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_slice::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Merging Errors
//!
//! ```
//! use error_slice::{append, BoxError};
//!
//! let one: BoxError = "one".into();
//! let two: BoxError = "two".into();
//! let three: BoxError = "three".into();
//!
//! let merged = append([Some(one), None, Some(two), Some(three)]).unwrap();
//! assert_eq!(merged.to_string(), "one, two, and three");
//! ```
//!
//! ## Recovering the Constituents
//!
//! ```
//! use error_slice::{append, coerce, BoxError};
//!
//! let merged = append([Some(BoxError::from("one")), Some("two".into())]);
//!
//! let errors = coerce(merged).unwrap();
//! let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["one", "two"]);
//! ```
//!
//! ## Reporting a Cleanup Failure
//!
//! ```
//! use error_slice::{append_call, BoxError};
//!
//! fn write_then_close() -> Result<(), BoxError> {
//!     let mut err: Option<BoxError> = Some("no writing!".into());
//!     append_call(&mut err, || Err::<(), _>("no closing!"));
//!     err.map_or(Ok(()), Err)
//! }
//!
//! let err = write_then_close().unwrap_err();
//! assert_eq!(err.to_string(), "no writing! and no closing!");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Merging errors and scope-exit helpers
pub mod append;
/// Converting a single error back into its constituent errors
pub mod coerce;
/// Variadic merge and foreign sequence macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits for error sequences and `Result` extensions
pub mod traits;
/// ErrorSlice and list formatting
pub mod types;

/// Async deferred append (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use append::*;
pub use coerce::*;
pub use traits::*;
pub use types::{
    list_formatter::ListFormatConfig, BoxError, BoxResult, ErrorSlice, ErrorVec,
};

#[cfg(feature = "tracing")]
pub use tracing_ext::report;
