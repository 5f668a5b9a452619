//! Process-wide table of foreign error list types.
//!
//! Rust cannot ask an arbitrary `dyn Error` whether its representation is a
//! list of errors, so each foreign type is looked up by exact type instead.
//! Lookups hold the read lock only for the type check; the conversion itself
//! runs unlocked, so an `into_errors` that registers another type cannot
//! deadlock.

use crate::traits::ErrorSequence;
use crate::types::{BoxError, ErrorSlice};
use std::any::TypeId;
use std::sync::{PoisonError, RwLock};
use std::vec::Vec;

type DynError = dyn core::error::Error + Send + Sync + 'static;

struct Shape {
    type_id: TypeId,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    type_name: &'static str,
    matches: fn(&DynError) -> bool,
    convert: fn(BoxError) -> Result<ErrorSlice, BoxError>,
}

static SHAPES: RwLock<Vec<Shape>> = RwLock::new(Vec::new());

fn matches_as<T: ErrorSequence>(err: &DynError) -> bool {
    err.is::<T>()
}

fn convert_as<T: ErrorSequence>(err: BoxError) -> Result<ErrorSlice, BoxError> {
    err.downcast::<T>().map(|sequence| ErrorSlice::from_sequence(*sequence))
}

/// Registers `T` so [`coerce`](crate::coerce) and [`append`](crate::append)
/// flatten it.
///
/// Returns `false` if `T` was already registered. Registration cannot be
/// undone.
///
/// # Examples
///
/// ```
/// use error_slice::{error_sequence, is_registered, register_sequence, BoxError};
///
/// #[derive(Debug)]
/// struct Failures(Vec<BoxError>);
///
/// impl std::fmt::Display for Failures {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("failures")
///     }
/// }
///
/// impl std::error::Error for Failures {}
///
/// error_sequence!(Failures);
///
/// assert!(!is_registered::<Failures>());
/// assert!(register_sequence::<Failures>());
/// assert!(!register_sequence::<Failures>());
/// assert!(is_registered::<Failures>());
/// ```
pub fn register_sequence<T: ErrorSequence>() -> bool {
    let type_id = TypeId::of::<T>();
    let mut shapes = SHAPES.write().unwrap_or_else(PoisonError::into_inner);
    if shapes.iter().any(|shape| shape.type_id == type_id) {
        return false;
    }

    let type_name = core::any::type_name::<T>();
    shapes.push(Shape { type_id, type_name, matches: matches_as::<T>, convert: convert_as::<T> });

    #[cfg(feature = "tracing")]
    tracing::debug!(type_name, shapes = shapes.len(), "registered error sequence");

    true
}

/// Returns true if `T` has been registered with [`register_sequence`].
pub fn is_registered<T: ErrorSequence>() -> bool {
    let type_id = TypeId::of::<T>();
    SHAPES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .any(|shape| shape.type_id == type_id)
}

pub(crate) fn probe(err: BoxError) -> Result<ErrorSlice, BoxError> {
    let convert = {
        let shapes = SHAPES.read().unwrap_or_else(PoisonError::into_inner);
        match shapes.iter().find(|shape| (shape.matches)(&*err)) {
            Some(shape) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(type_name = shape.type_name, "flattening foreign error sequence");
                shape.convert
            },
            None => return Err(err),
        }
    };
    convert(err)
}
