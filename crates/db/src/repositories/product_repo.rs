//! Repository for the `products` table.
//!
//! Owns all SQL for the single-entity store: keyed CRUD plus the one
//! filtered query (name pattern + price ceiling).

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{NewProduct, Product};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "id, name, description, price, stockquantity";

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product and return the stored row with its assigned id.
    pub async fn create(pool: &PgPool, dto: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stockquantity) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock_quantity)
            .fetch_one(pool)
            .await
    }

    /// Overwrite an existing product in place, keyed by its id.
    ///
    /// Returns `None` if no row with that id exists.
    pub async fn update(pool: &PgPool, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = $2, \
                 description = $3, \
                 price = $4, \
                 stockquantity = $5 \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_quantity)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by id. Returns `true` if a row was deleted.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every product in store order (ascending id).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring match on `name`, combined with a strict
    /// upper bound on `price` (exclusive ceiling).
    pub async fn search(
        pool: &PgPool,
        name: &str,
        price_ceiling: f64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE name ILIKE '%' || $1 || '%' AND price < $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .bind(price_ceiling)
            .fetch_all(pool)
            .await
    }
}
