//! Capability traits.
//!
//! - [`ErrorSequence`]: opt-in capability for foreign error types that are
//!   "a list of errors" so merging and coercion can flatten them
//! - [`AppendResultExt`]: merges a second failure into a `Result`
//!
//! # Examples
//!
//! ```
//! use error_slice::traits::AppendResultExt;
//!
//! let primary: Result<u8, &str> = Err("write failed");
//! let cleanup: Result<(), &str> = Err("close failed");
//!
//! let err = primary.append_err(cleanup).unwrap_err();
//! assert_eq!(err.to_string(), "write failed and close failed");
//! ```

pub mod error_sequence;
pub mod result_ext;

pub use error_sequence::ErrorSequence;
pub use result_ext::AppendResultExt;
