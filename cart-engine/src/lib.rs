//! Cart composition and pricing engine
//!
//! The diner-facing core of the ordering app: configured-item
//! identity, per-line and order-level pricing, the durable cart store,
//! and order assembly/submission.
//!
//! # Architecture
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`key`] | Stable identity for an item + component/extras selection |
//! | [`pricing`] | Decimal-precise unit/line/cart totals |
//! | [`storage`] | Durable key-value slot for the cart snapshot (redb) |
//! | [`store`] | Mutable cart line list: add/merge, quantity, remove, clear |
//! | [`assembler`] | Cart lines + contact metadata -> order payload |
//! | [`submit`] | HTTP submission of the assembled payload |
//!
//! All cart mutations are synchronous and single-threaded; the only
//! async boundary is [`submit::OrderSubmitter`], owned by the caller.

pub mod assembler;
pub mod config;
pub mod error;
pub mod key;
pub mod pricing;
pub mod storage;
pub mod store;
pub mod submit;

pub use assembler::OrderAssembler;
pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use storage::{CartStorage, MemoryCartStorage, RedbCartStorage, StorageError};
pub use store::{CartObserver, CartStore};
pub use submit::{OrderSubmitter, SubmitError};
