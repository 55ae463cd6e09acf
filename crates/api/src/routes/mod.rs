pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health check excluded; that is
/// merged separately at root level).
///
/// ```text
/// /products                     list (GET), insert (POST)
/// /products/search              filtered search (GET)
/// /products/{id}                full update (PUT), partial update (PATCH),
///                               delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}
