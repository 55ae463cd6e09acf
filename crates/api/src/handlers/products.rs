//! Product request handlers.
//!
//! This is where the branching behavior of the API lives: payload
//! decoding with an explicit coercion-error kind, the per-field
//! validation table, partial-update reconciliation against the stored
//! record, and the defensive identity checks around saves.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_core::validation;
use inventory_db::models::product::{NewProduct, ProductPayload};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult};
use crate::service::ProductService;
use crate::state::AppState;

/// Query parameters for `GET /products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

/// GET /products
///
/// List all products. An empty sequence is a valid success, not an error.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductService::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/search?name=&price=
///
/// Products whose name contains `name` (case-insensitive) and whose price
/// is strictly less than `price`. No validation beyond query-string type
/// coercion; an empty result is not an error.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let products = ProductService::search(&state.pool, &params.name, params.price).await?;
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

/// POST /products
///
/// Insert a full product payload; any id in the body is ignored, the
/// store assigns one. Success is a 200 with an empty body.
pub async fn insert_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let payload = decode_payload(body)?;

    let errors = validation::validate_all(&json_record(&payload));
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    let created = ProductService::create(&state.pool, &to_new_product(&payload)).await?;

    // The store must hand back a usable identity; anything else is an
    // upstream fault the client cannot fix.
    if created.id <= 0 {
        return Err(CoreError::Upstream(format!(
            "store returned non-positive id {} on insert",
            created.id
        ))
        .into());
    }

    tracing::info!(product_id = created.id, name = %created.name, "Product created");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /products/{id}
///
/// Remove a product permanently. A non-positive id is rejected up front;
/// an unknown id is a 404 carrying the id in its message.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(id)?;

    match ProductService::delete(&state.pool, id).await? {
        Some(product) => {
            tracing::info!(product_id = product.id, "Product deleted");
            Ok(Json(json!({
                "message": format!("Product with id {id} deleted")
            })))
        }
        None => Err(CoreError::NotFound {
            entity: "Product",
            id,
        }
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Full update
// ---------------------------------------------------------------------------

/// PUT /products/{id}
///
/// Replace every mutable field of an existing product from the payload,
/// preserving the id. The incoming payload (not the merged record) is
/// validated against the full rule table. Success is a 200 with an empty
/// body.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(id)?;

    let payload = decode_payload(body)?;
    let mut product = ProductService::find(&state.pool, id).await?;

    let errors = validation::validate_all(&json_record(&payload));
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    product.name = payload.name.clone().unwrap_or_default();
    product.description = payload.description.clone();
    product.price = payload.price.unwrap_or_default();
    product.stock_quantity = payload.stock_quantity.unwrap_or_default();

    let saved = ProductService::update(&state.pool, &product)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    // Defensive: a save must never move a record to a different id.
    if saved.id != id {
        return Err(CoreError::IdentityMismatch.into());
    }

    tracing::info!(product_id = id, "Product updated");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

/// PATCH /products/{id}
///
/// Apply a mapping of recognized field names onto the stored record.
/// Unrecognized keys are ignored. Only the fields actually present in the
/// body are validated afterwards, so a record with an invalid untouched
/// field can still be partially updated.
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(id)?;

    let updates = match body {
        Value::Object(map) => map,
        _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
    };

    let mut product = ProductService::find(&state.pool, id).await?;
    let mut touched: Vec<&str> = Vec::new();

    if let Some(value) = updates.get("name") {
        product.name = coerce_string(value)?;
        touched.push("name");
    }
    if let Some(value) = updates.get("description") {
        product.description = coerce_nullable_string(value)?;
        touched.push("description");
    }
    if let Some(value) = updates.get("price") {
        // Accepts both integer- and float-shaped numbers.
        product.price = coerce_number(value)?;
        touched.push("price");
    }
    if let Some(value) = updates.get("stockQuantity") {
        product.stock_quantity = coerce_integer(value)?;
        touched.push("stockQuantity");
    }

    let errors = validation::validate_fields(&json_record(&product), &touched);
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    ProductService::update(&state.pool, &product)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    tracing::info!(product_id = id, touched = ?touched, "Product partially updated");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Decode / coerce helpers
// ---------------------------------------------------------------------------

/// A non-positive path id never refers to a real record; reject it before
/// touching the store.
fn ensure_valid_id(id: DbId) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest("id must be positive".into()));
    }
    Ok(())
}

/// Decode a raw JSON body into the product payload. A value of the wrong
/// shape (a string where a number belongs, a number where a string
/// belongs) is a coercion error, distinct from constraint validation.
fn decode_payload(body: Value) -> Result<ProductPayload, AppError> {
    serde_json::from_value(body).map_err(|_| AppError::Core(CoreError::Coercion))
}

/// JSON-object view of a record, keyed by wire field names, for the
/// validation table.
fn json_record<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn to_new_product(payload: &ProductPayload) -> NewProduct {
    // Validation has already established presence of the required fields;
    // the defaults below are unreachable.
    NewProduct {
        name: payload.name.clone().unwrap_or_default(),
        description: payload.description.clone(),
        price: payload.price.unwrap_or_default(),
        stock_quantity: payload.stock_quantity.unwrap_or_default(),
    }
}

fn coerce_string(value: &Value) -> Result<String, AppError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(AppError::Core(CoreError::Coercion))
}

fn coerce_nullable_string(value: &Value) -> Result<Option<String>, AppError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(AppError::Core(CoreError::Coercion)),
    }
}

fn coerce_number(value: &Value) -> Result<f64, AppError> {
    value.as_f64().ok_or(AppError::Core(CoreError::Coercion))
}

fn coerce_integer(value: &Value) -> Result<i32, AppError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(AppError::Core(CoreError::Coercion))
}
