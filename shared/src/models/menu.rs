//! Menu Catalog Models

use serde::{Deserialize, Serialize};

/// Menu item as served by the catalog endpoint (read-only input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Base price before extras
    pub price: f64,
    #[serde(default)]
    pub image: String,
    /// Category reference (String ID)
    pub category: String,
    /// Ingredients the customer may deselect (no price change)
    #[serde(default)]
    pub components: Vec<String>,
    /// Paid add-ons
    #[serde(default)]
    pub extras: Vec<ExtraOption>,
    /// Unavailable items are filtered out before they reach the cart
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Paid add-on for a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub name: String,
    pub price: f64,
}

/// Frozen copy of a menu item taken when it enters the cart.
///
/// Not a live reference to catalog data: catalog edits after the add
/// (price changes, renames, removed ingredients) never alter lines
/// already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemSnapshot {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    #[serde(default)]
    pub image: String,
    /// Default component list as it existed at add-time
    #[serde(default)]
    pub components: Vec<String>,
}

impl MenuItemSnapshot {
    pub fn of(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            base_price: item.price,
            image: item.image.clone(),
            components: item.components.clone(),
        }
    }
}

/// Transient configuration state while a customer customizes one item
/// before adding it to the cart.
///
/// Defaults: every component selected, no extras, quantity 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_components: Vec<String>,
    pub selected_extras: Vec<ExtraOption>,
    pub quantity: i32,
}

impl SelectionState {
    /// Start configuring an item with all components included
    pub fn for_item(item: &MenuItem) -> Self {
        Self {
            selected_components: item.components.clone(),
            selected_extras: Vec::new(),
            quantity: 1,
        }
    }

    /// Deselect a component if selected, re-select it otherwise
    pub fn toggle_component(&mut self, name: &str) {
        if let Some(pos) = self.selected_components.iter().position(|c| c == name) {
            self.selected_components.remove(pos);
        } else {
            self.selected_components.push(name.to_string());
        }
    }

    /// Add an extra if not chosen, drop it otherwise (matched by name)
    pub fn toggle_extra(&mut self, extra: &ExtraOption) {
        if let Some(pos) = self
            .selected_extras
            .iter()
            .position(|e| e.name == extra.name)
        {
            self.selected_extras.remove(pos);
        } else {
            self.selected_extras.push(extra.clone());
        }
    }

    /// Set the desired quantity, floored at 1
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity.max(1);
    }
}
