//! Engine configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `CART_DATA_DIR` | `.` | Directory holding the cart database |
//! | `ORDER_API_URL` | `http://localhost:3000` | Order submission endpoint base URL |
//! | `REQUEST_TIMEOUT_MS` | `30000` | Submission request timeout |
//! | `RESTAURANT_ID` | (empty) | Restaurant identifier stamped onto orders |

use std::path::PathBuf;

/// Cart engine configuration
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the cart database file
    pub data_dir: String,
    /// Base URL of the order submission endpoint
    pub order_api_url: String,
    /// Submission request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Restaurant identifier for assembled orders
    pub restaurant_id: String,
}

impl CartConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("CART_DATA_DIR").unwrap_or_else(|_| ".".into()),
            order_api_url: std::env::var("ORDER_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            restaurant_id: std::env::var("RESTAURANT_ID").unwrap_or_default(),
        }
    }

    /// Path of the cart database file inside the data directory
    pub fn cart_db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("cart.redb")
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".into(),
            order_api_url: "http://localhost:3000".into(),
            request_timeout_ms: 30000,
            restaurant_id: String::new(),
        }
    }
}
