//! Carts service errors.

use std::num::TryFromIntError;

use thiserror::Error;

use crate::ids::InvalidHexId;

/// One taxonomy for the whole domain: repository failures pass through the
/// service unchanged, so both layers share this type.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists for user")]
    AlreadyExists,

    #[error("not found")]
    NotFound,

    #[error("invalid identifier")]
    InvalidIdentifier(#[from] InvalidHexId),

    #[error("stored quantity out of range")]
    InvalidQuantity(#[from] TryFromIntError),

    #[error("unit price must be non-negative")]
    InvalidPrice,

    #[error("storage error")]
    Store(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for CartsServiceError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::Store(error)
    }
}
