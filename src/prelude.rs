//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_slice::prelude::*;
//!
//! fn save() -> BoxResult<()> {
//!     finally(|| Err::<(), _>("no writing!"), || Err::<(), _>("no closing!"))
//! }
//!
//! let err = save().unwrap_err();
//! assert_eq!(coerce(Some(err)).map(|errors| errors.len()), Some(2));
//! ```

// Macros
pub use crate::{append, error_sequence};

// Core types
pub use crate::types::{BoxError, BoxResult, ErrorSlice};

// Operations
pub use crate::append::{append2, append_call, finally, AppendGuard};
pub use crate::coerce::{coerce, coerce_fast};
#[cfg(feature = "std")]
pub use crate::coerce::{is_registered, register_sequence};

// Traits
pub use crate::traits::{AppendResultExt, ErrorSequence};
