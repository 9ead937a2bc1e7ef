use thiserror::Error;

/// Failures reported by [`AssociativeArray`](crate::AssociativeArray).
///
/// `remove` and `has_key` never produce these; they report absence with
/// `None` / `false` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A `None` key was passed to `set`.
    #[error("key cannot be null")]
    NullKey,
    /// The key (or a `None` key) is not present in the array.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
