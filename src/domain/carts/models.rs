//! Cart Models
//!
//! Wire-facing shapes. Identifiers are always the external hexadecimal
//! strings; the internal `ObjectId` form never appears here.

use serde::{Deserialize, Serialize};

/// Cart Model
///
/// `products` is a read-time projection assembled from the cart's
/// reference list; it is never persisted as embedded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "cartID")]
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Product Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productID")]
    pub id: String,
    pub quantity: u64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

/// New Cart Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCart {
    /// Explicit cart identifier; a fresh one is generated when omitted.
    #[serde(rename = "cartID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// New Product Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    /// Explicit product identifier; a fresh one is generated when omitted.
    #[serde(rename = "productID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub quantity: u64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}
