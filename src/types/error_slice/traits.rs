use super::ErrorSlice;
use crate::types::alloc_type::Vec;
use crate::types::list_formatter::{ListFormatConfig, ListFormatter};
use crate::types::{BoxError, ErrorVec};
use core::fmt::Display;
use core::ops::{Deref, DerefMut};

impl Display for ErrorSlice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let items = self.errors.iter().map(|e| e as &dyn Display);
        if !f.alternate() {
            return ListFormatConfig::default().write_list(f, items);
        }
        ListFormatConfig::pretty().write_list(f, items)
    }
}

impl core::error::Error for ErrorSlice {}

impl Deref for ErrorSlice {
    type Target = [BoxError];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.errors
    }
}

impl DerefMut for ErrorSlice {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.errors
    }
}

impl From<ErrorVec<BoxError>> for ErrorSlice {
    #[inline]
    fn from(errors: ErrorVec<BoxError>) -> Self {
        Self { errors }
    }
}

impl From<Vec<BoxError>> for ErrorSlice {
    #[inline]
    fn from(errors: Vec<BoxError>) -> Self {
        Self { errors: ErrorVec::from_vec(errors) }
    }
}

impl From<ErrorSlice> for Vec<BoxError> {
    #[inline]
    fn from(errors: ErrorSlice) -> Self {
        errors.into_vec()
    }
}

impl FromIterator<BoxError> for ErrorSlice {
    fn from_iter<I: IntoIterator<Item = BoxError>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl Extend<BoxError> for ErrorSlice {
    fn extend<I: IntoIterator<Item = BoxError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorSlice {
    type Item = BoxError;
    type IntoIter = smallvec::IntoIter<[BoxError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSlice {
    type Item = &'a BoxError;
    type IntoIter = core::slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorSlice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        struct Message<'a>(&'a BoxError);

        impl serde::Serialize for Message<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self.0)
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.errors.len()))?;
        for error in &self.errors {
            seq.serialize_element(&Message(error))?;
        }
        seq.end()
    }
}
