use thiserror::Error;

/// Errors returned by fallible [`Tree`][crate::Tree] operations.
///
/// An empty tree is never an error: inserting into it installs the root,
/// while finding or deleting simply finds nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error<T> {
    /// The value is already stored in the tree. The rejected value is handed
    /// back so the caller keeps ownership of it.
    #[error("value already exists in the tree")]
    DuplicateValue(T),
}

impl<T> Error<T> {
    /// Takes back the value that caused the error.
    pub fn into_value(self) -> T {
        match self {
            Self::DuplicateValue(value) => value,
        }
    }
}
