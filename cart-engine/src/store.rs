//! Cart store
//!
//! Owns the mutable list of cart lines. Every mutating operation
//! persists the full snapshot to the configured [`CartStorage`] slot
//! inline, then notifies subscribed observers with a fresh view.
//!
//! The store is an explicitly owned instance handed to whichever
//! component needs it; there is no ambient global cart. All mutations
//! are synchronous and single-threaded, so the "at most one line per
//! configuration key" invariant is maintained by the add/merge scan
//! alone.

use crate::key::configuration_key;
use crate::pricing;
use crate::storage::{CartStorage, StorageError, StorageResult};
use shared::models::{CartLine, CartSnapshot, CartView, MenuItem, MenuItemSnapshot, SelectionState};
use shared::util::now_millis;

/// Observer notified after every cart mutation.
///
/// Explicit subscription replaces the implicit reactivity of a global
/// store: UI layers register themselves and re-render from the view.
pub trait CartObserver {
    fn cart_changed(&self, view: &CartView);
}

/// The cart composition engine
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Open the store, rehydrating from the storage slot.
    ///
    /// A missing slot yields an empty cart. A corrupt slot (unparsable
    /// bytes, checksum drift) is discarded in favor of an empty cart
    /// and logged; the user simply sees an empty cart, never an error.
    pub fn open(storage: Box<dyn CartStorage>) -> StorageResult<Self> {
        let lines = match storage.load() {
            Ok(Some(snapshot)) => {
                tracing::debug!(lines = snapshot.lines.len(), "Cart rehydrated");
                snapshot.lines
            }
            Ok(None) => Vec::new(),
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(%reason, "Stored cart is corrupt, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            lines,
            storage,
            observers: Vec::new(),
        })
    }

    /// Register an observer; it is called after every mutation
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    // ========== Mutations ==========

    /// Add a configured item to the cart.
    ///
    /// If a line with the same configuration key already exists its
    /// quantity is incremented and everything else is left untouched
    /// (unit price, components and extras are definitionally identical
    /// when the key matches). Otherwise a new line is appended with a
    /// frozen menu item snapshot and the unit price computed at this
    /// moment. The requested quantity is clamped to at least 1.
    ///
    /// Returns the configuration key of the affected line.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        selection: &SelectionState,
    ) -> StorageResult<String> {
        let key = configuration_key(
            &item.id,
            &selection.selected_components,
            &selection.selected_extras,
        );
        let quantity = selection.quantity.max(1);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.configuration_key == key)
        {
            existing.quantity += quantity;
            tracing::debug!(key = %key, quantity = existing.quantity, "Merged into existing line");
        } else {
            let unit_price = pricing::unit_price(item.price, &selection.selected_extras);
            self.lines.push(CartLine {
                configuration_key: key.clone(),
                item: MenuItemSnapshot::of(item),
                quantity,
                selected_components: selection.selected_components.clone(),
                selected_extras: selection.selected_extras.clone(),
                unit_price,
                added_at: now_millis(),
            });
            tracing::debug!(key = %key, unit_price, quantity, "Added new line");
        }

        self.persist()?;
        Ok(key)
    }

    /// Adjust a line's quantity by `delta`, flooring at 1.
    ///
    /// Silent no-op when the key is not present. Because of the floor,
    /// decrementing can never remove a line; removal is only via
    /// [`remove_line`](Self::remove_line).
    pub fn change_quantity(&mut self, configuration_key: &str, delta: i32) -> StorageResult<()> {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.configuration_key == configuration_key)
        else {
            tracing::debug!(key = %configuration_key, "change_quantity on unknown key, ignored");
            return Ok(());
        };

        line.quantity = (line.quantity + delta).max(1);
        self.persist()
    }

    /// Delete a line unconditionally; no-op when the key is absent
    pub fn remove_line(&mut self, configuration_key: &str) -> StorageResult<()> {
        let Some(pos) = self
            .lines
            .iter()
            .position(|l| l.configuration_key == configuration_key)
        else {
            return Ok(());
        };

        self.lines.remove(pos);
        tracing::debug!(key = %configuration_key, "Removed line");
        self.persist()
    }

    /// Empty the cart and persist the empty snapshot.
    ///
    /// Called only after the external order submission reports success.
    pub fn clear(&mut self) -> StorageResult<()> {
        self.lines.clear();
        self.persist()
    }

    // ========== Reads ==========

    /// Current lines plus derived aggregates, recomputed fresh on
    /// every read
    pub fn snapshot(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            subtotal: pricing::cart_subtotal(&self.lines),
            total_item_count: pricing::cart_item_count(&self.lines),
        }
    }

    /// Borrow the current lines without the derived aggregates
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, configuration_key: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| l.configuration_key == configuration_key)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    // ========== Internals ==========

    /// Write the full line list to the storage slot, then notify
    /// observers
    fn persist(&mut self) -> StorageResult<()> {
        let snapshot = CartSnapshot::new(self.lines.clone(), now_millis());
        self.storage.save(&snapshot)?;

        if !self.observers.is_empty() {
            let view = self.snapshot();
            for observer in &self.observers {
                observer.cart_changed(&view);
            }
        }
        Ok(())
    }
}
