//! Data models
//!
//! Shared between the cart engine and the UI layer (via serde/JSON).

pub mod cart;
pub mod menu;
pub mod order;

// Re-exports
pub use cart::*;
pub use menu::*;
pub use order::*;
