//! Product model and request DTOs.
//!
//! Wire field names are camelCase (`stockQuantity`); the storage column
//! keeps its historical lowercase-concatenated name (`stockquantity`).

use inventory_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[sqlx(rename = "stockquantity")]
    pub stock_quantity: i32,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Decoded body for insert and full update.
///
/// Every field is optional so a missing value reaches the validation table
/// as a `Required` violation instead of failing deserialization. A value
/// of the wrong shape (e.g. a string for `price`) still fails decoding,
/// which the handler reports as a coercion error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
}

/// A validated product ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
}
