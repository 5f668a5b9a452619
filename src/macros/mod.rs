//! Macros for merging errors and declaring foreign error lists.
//!
//! - [`macro@crate::append`] - variadic form of [`append`](crate::append()), each
//!   argument an `Option<BoxError>`.
//! - [`macro@crate::error_sequence`] - implements
//!   [`ErrorSequence`](crate::ErrorSequence) for a newtype over a list of
//!   [`BoxError`](crate::BoxError)s.
//!
//! # Examples
//!
//! ```
//! use error_slice::{append, BoxError};
//!
//! let primary: Option<BoxError> = Some("no writing!".into());
//! let cleanup: Option<BoxError> = Some("no closing!".into());
//!
//! let err = append!(primary, None, cleanup).unwrap();
//! assert_eq!(err.to_string(), "no writing! and no closing!");
//! ```

/// Merges any number of `Option<BoxError>` arguments.
///
/// Expands to a call to [`append`](crate::append()) over an array of the
/// arguments, so every argument must already be an `Option<BoxError>`.
///
/// # Examples
///
/// ```
/// use error_slice::{append, BoxError};
///
/// let none: Option<BoxError> = append!();
/// assert!(none.is_none());
///
/// let one: Option<BoxError> = Some("one".into());
/// let two: Option<BoxError> = Some("two".into());
/// let three: Option<BoxError> = Some("three".into());
/// assert_eq!(append!(one, two, three).unwrap().to_string(), "one, two, and three");
/// ```
#[macro_export]
macro_rules! append {
    () => {
        ::core::option::Option::<$crate::BoxError>::None
    };
    ($first:expr, $second:expr $(,)?) => {
        $crate::append2($first, $second)
    };
    ($($err:expr),+ $(,)?) => {
        $crate::append([$($err),+])
    };
}

/// Implements [`ErrorSequence`](crate::ErrorSequence) for a tuple newtype whose
/// first field is a `Vec<BoxError>` or an [`ErrorVec<BoxError>`](crate::ErrorVec).
///
/// The type must already implement `std::error::Error`. Call
/// [`register_sequence`](crate::register_sequence) as well for
/// [`coerce`](crate::coerce()) and [`append`](crate::append()) to recognize it
/// behind a `BoxError`.
///
/// # Examples
///
/// ```
/// use error_slice::{error_sequence, BoxError, ErrorSlice};
///
/// #[derive(Debug)]
/// struct Other(Vec<BoxError>);
///
/// impl std::fmt::Display for Other {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "other: ({} errors)", self.0.len())
///     }
/// }
///
/// impl std::error::Error for Other {}
///
/// error_sequence!(Other);
///
/// let errors = ErrorSlice::from_sequence(Other(vec!["one".into(), "two".into()]));
/// assert_eq!(errors.to_string(), "one and two");
/// ```
#[macro_export]
macro_rules! error_sequence {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ErrorSequence for $ty {
                #[inline]
                fn into_errors(self) -> $crate::ErrorVec<$crate::BoxError> {
                    ::core::iter::IntoIterator::into_iter(self.0).collect()
                }
            }
        )+
    };
}
