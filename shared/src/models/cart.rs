//! Cart Models
//!
//! `CartLine` is the unit the engine manages, `CartSnapshot` is the
//! persisted form, `CartView` is the derived read model handed to the
//! UI layer.

use super::menu::{ExtraOption, MenuItemSnapshot};
use serde::{Deserialize, Serialize};

/// One row in the cart: a unique configuration and its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identity of this item + component-selection + extras-selection
    /// combination; stable for the same semantic configuration
    /// regardless of selection order
    pub configuration_key: String,
    /// Frozen menu item copy as it existed at add-time
    pub item: MenuItemSnapshot,
    /// Always >= 1; a line reduced to zero is removed, never retained
    pub quantity: i32,
    /// Component names retained for this configuration
    pub selected_components: Vec<String>,
    /// Extras retained for this configuration
    pub selected_extras: Vec<ExtraOption>,
    /// Per-unit price frozen at add-time (base + extras), never
    /// recomputed from the catalog
    pub unit_price: f64,
    /// Add timestamp (epoch millis)
    pub added_at: i64,
}

/// Persisted cart state, the sole source of truth rehydrated on startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub updated_at: i64,
    /// Drift detector over the persisted lines
    #[serde(default)]
    pub checksum: String,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>, updated_at: i64) -> Self {
        let mut snapshot = Self {
            lines,
            updated_at,
            checksum: String::new(),
        };
        snapshot.update_checksum();
        snapshot
    }

    /// Compute checksum over the fields that define cart identity.
    ///
    /// Monetary values are hashed in cents to avoid float precision
    /// issues.
    pub fn compute_checksum(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher as _};

        let mut hasher = DefaultHasher::new();
        self.lines.len().hash(&mut hasher);
        for line in &self.lines {
            line.configuration_key.hash(&mut hasher);
            line.quantity.hash(&mut hasher);
            ((line.unit_price * 100.0).round() as i64).hash(&mut hasher);
        }
        format!("{:016x}", hasher.finish())
    }

    pub fn update_checksum(&mut self) {
        self.checksum = self.compute_checksum();
    }

    /// Returns false when the stored lines no longer match the
    /// recorded checksum
    pub fn verify_checksum(&self) -> bool {
        self.checksum == self.compute_checksum()
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// Derived read model: the current lines plus fresh aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// Sum of unit_price * quantity across all lines (unrounded)
    pub subtotal: f64,
    /// Sum of quantity across all lines
    pub total_item_count: i32,
}
