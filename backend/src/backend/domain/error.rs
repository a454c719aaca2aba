//! Typed domain errors shared across profile, age and image logic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile has no national identity number on record. This is an
    /// expected "birth date unknown" state, not a fault; callers convert it
    /// to an absent result instead of surfacing it.
    #[error("no national identity number on record")]
    MissingNationalId,

    /// The national identity number is present but not a valid 10-digit value.
    #[error("malformed national identity number: {0:?}")]
    InvalidNationalId(String),

    /// The requested image size tag is not in the configured size table.
    #[error("unknown image size tag: {0:?}")]
    UnknownSizeTag(String),
}
