//! Thin service façade over [`ProductRepo`].
//!
//! Mostly pure delegation, with two behavioral additions the handlers
//! rely on: [`ProductService::find`] raises a distinguishable not-found
//! error instead of returning an optional, and [`ProductService::delete`]
//! returns the deleted record (or `None` meaning nothing was deleted).

use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::product::{NewProduct, Product};
use inventory_db::repositories::ProductRepo;
use inventory_db::DbPool;

use crate::error::{AppError, AppResult};

pub struct ProductService;

impl ProductService {
    /// List every product in store order.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<Product>> {
        Ok(ProductRepo::list_all(pool).await?)
    }

    /// Products whose name matches the pattern case-insensitively and
    /// whose price is strictly below the ceiling.
    pub async fn search(pool: &DbPool, name: &str, price_ceiling: f64) -> AppResult<Vec<Product>> {
        Ok(ProductRepo::search(pool, name, price_ceiling).await?)
    }

    /// Look up a product by id, raising `NotFound` when the lookup misses.
    pub async fn find(pool: &DbPool, id: DbId) -> AppResult<Product> {
        ProductRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }))
    }

    /// Persist a new product; the store assigns the id.
    pub async fn create(pool: &DbPool, dto: &NewProduct) -> AppResult<Product> {
        Ok(ProductRepo::create(pool, dto).await?)
    }

    /// Overwrite an existing product. `None` means no row with that id.
    pub async fn update(pool: &DbPool, product: &Product) -> AppResult<Option<Product>> {
        Ok(ProductRepo::update(pool, product).await?)
    }

    /// Delete by id, returning the record that was removed, or `None`
    /// if nothing was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<Option<Product>> {
        match ProductRepo::find_by_id(pool, id).await? {
            Some(product) => {
                ProductRepo::delete_by_id(pool, id).await?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }
}
