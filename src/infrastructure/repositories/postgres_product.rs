// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{Price, Product, ProductId, ProductName, ProductRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: i64,
    category_id: Option<Uuid>,
    is_visible: bool,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product::new(
            ProductId::from(row.id),
            ProductName::new(row.name)?,
            Price::new(row.price)?,
            row.category_id.map(CategoryId::from),
            row.is_visible,
        ))
    }
}

const PRODUCT_COLUMNS: &str = "id, name, price, category_id, is_visible";

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: &Product) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO products (id, name, price, category_id, is_visible)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::from(product.id))
        .bind(product.name.as_str())
        .bind(product.price.cents())
        .bind(product.category_id.map(Uuid::from))
        .bind(product.visible)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE products
             SET name = $2, price = $3, category_id = $4, is_visible = $5
             WHERE id = $1",
        )
        .bind(Uuid::from(product.id))
        .bind(product.name.as_str())
        .bind(product.price.cents())
        .bind(product.category_id.map(Uuid::from))
        .bind(product.visible)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        // Every product, hidden ones included; the menu assembler is the
        // single place visibility is applied.
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
