use calc_attrs::ErrorKind;
use calc_error::{Error, ErrorKind};
use std::fmt;

/// Attempted to remove an element from an empty container.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "cannot remove an element from an empty container",
    labels = ["this container is empty"],
)]
pub struct EmptyContainer;

/// An index was outside the valid range of a container.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("index {} is out of range for a container of size {}", self.index, self.len),
    labels = ["this index"],
    help = if self.len == 0 {
        "the container is empty".to_string()
    } else {
        format!("valid indices are 0 to {}", self.len - 1)
    },
)]
pub struct IndexOutOfRange {
    /// The index that was given.
    pub index: usize,

    /// The size of the container at the time of the access.
    pub len: usize,
}

/// The key is not present in the map.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("no entry for key `{}`", self.key),
    labels = ["this key"],
)]
pub struct NoSuchKey {
    /// The debug representation of the missing key.
    pub key: String,
}

/// Represents an error that can occur while using a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Removed from an empty container.
    EmptyContainer(EmptyContainer),

    /// Accessed an index outside the container.
    IndexOutOfRange(IndexOutOfRange),

    /// Looked up a key that is not in the map.
    NoSuchKey(NoSuchKey),
}

impl From<EmptyContainer> for CollectionError {
    fn from(e: EmptyContainer) -> Self {
        CollectionError::EmptyContainer(e)
    }
}

impl From<IndexOutOfRange> for CollectionError {
    fn from(e: IndexOutOfRange) -> Self {
        CollectionError::IndexOutOfRange(e)
    }
}

impl From<NoSuchKey> for CollectionError {
    fn from(e: NoSuchKey) -> Self {
        CollectionError::NoSuchKey(e)
    }
}

impl From<CollectionError> for Error {
    fn from(e: CollectionError) -> Self {
        match e {
            CollectionError::EmptyContainer(e) => Error::unspanned(e),
            CollectionError::IndexOutOfRange(e) => Error::unspanned(e),
            CollectionError::NoSuchKey(e) => Error::unspanned(e),
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CollectionError::EmptyContainer(e) => e.message(),
            CollectionError::IndexOutOfRange(e) => e.message(),
            CollectionError::NoSuchKey(e) => e.message(),
        };
        f.write_str(&message)
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_shared_error() {
        let err: Error = CollectionError::from(IndexOutOfRange { index: 7, len: 3 }).into();
        assert!(err.is::<IndexOutOfRange>());
        assert_eq!(err.to_string(), "index 7 is out of range for a container of size 3");
    }

    #[test]
    fn display_matches_kind_message() {
        let err = CollectionError::from(NoSuchKey { key: "\"x\"".to_string() });
        assert_eq!(err.to_string(), "no entry for key `\"x\"`");
    }
}
