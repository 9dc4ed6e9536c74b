//! Order Submission Models
//!
//! Wire payload handed to the order endpoint at checkout. Assembled
//! from the current cart lines; never persisted by the engine.

use super::menu::ExtraOption;
use serde::{Deserialize, Serialize};

/// Customer contact fields, required for counter/pickup orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One line of the submitted order (faithful snapshot of a CartLine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub selected_components: Vec<String>,
    pub selected_extras: Vec<ExtraOption>,
    pub line_total: f64,
}

/// Complete order submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub restaurant_id: String,
    /// Absent for counter/pickup orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    /// Client-generated id so the endpoint can deduplicate retries
    pub client_request_id: String,
    pub lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Equals the cart subtotal at assembly time
    pub total_amount: f64,
    pub created_at: i64,
}

/// Response from the order endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    /// Human-facing order number shown to the diner
    pub order_number: String,
}
