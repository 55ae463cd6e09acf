//! Route definitions for the product resource, mounted at `/products`.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes.
///
/// ```text
/// GET    /         -> list_products
/// POST   /         -> insert_product
/// GET    /search   -> search_products
/// PUT    /{id}     -> update_product
/// PATCH  /{id}     -> patch_product
/// DELETE /{id}     -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::insert_product),
        )
        .route("/search", get(products::search_products))
        .route(
            "/{id}",
            axum::routing::put(products::update_product)
                .patch(products::patch_product)
                .delete(products::delete_product),
        )
}
