//! Engine error types

use crate::storage::StorageError;
use thiserror::Error;

/// Errors raised by cart operations and order assembly.
///
/// The validation variants are all detected before any network call is
/// attempted, so a rejected assembly never causes a partial
/// submission. Persistence corruption is not represented here: the
/// store self-heals it into an empty cart (see [`crate::store`]).
#[derive(Debug, Error)]
pub enum CartError {
    /// Checkout attempted with no lines in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// No restaurant identifier available for the order
    #[error("Missing restaurant context")]
    MissingRestaurantContext,

    /// Counter/pickup order without a customer name
    #[error("Missing contact info: customer name is required for pickup orders")]
    MissingContactInfo,

    /// Phone number does not match the minimal expected shape
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Email supplied but not of local@domain.tld shape
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Persistence failure while writing the cart snapshot
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for cart operations
pub type CartResult<T> = Result<T, CartError>;
