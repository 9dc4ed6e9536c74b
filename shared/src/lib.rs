//! Shared types for the ordering cart
//!
//! Data models exchanged between the cart engine and the UI layer:
//! menu catalog records, cart lines and snapshots, and the order
//! submission payload.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
