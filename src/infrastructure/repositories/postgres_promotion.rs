// src/infrastructure/repositories/postgres_promotion.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use crate::domain::promotion::{
    Discount, Promotion, PromotionId, PromotionRepository, TimeOfDay, TimeWindow, Weekday,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresPromotionRepository {
    pool: PgPool,
}

impl PostgresPromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn coverage_for(&self, promotion_ids: &[Uuid]) -> DomainResult<HashMap<Uuid, Vec<ProductId>>> {
        let rows = sqlx::query_as::<_, CoverageRow>(
            "SELECT promotion_id, product_id FROM promotion_products
             WHERE promotion_id = ANY($1)
             ORDER BY promotion_id, product_id",
        )
        .bind(promotion_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<Uuid, Vec<ProductId>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.promotion_id)
                .or_default()
                .push(ProductId::from(row.product_id));
        }
        Ok(grouped)
    }
}

#[derive(Debug, FromRow)]
struct PromotionRow {
    id: Uuid,
    description: String,
    discount_price: Option<i64>,
    discount_percentage: Option<i16>,
    valid_days: Vec<String>,
    window_start: i16,
    window_end: i16,
    valid_until: Option<DateTime<Utc>>,
    is_expired: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CoverageRow {
    promotion_id: Uuid,
    product_id: Uuid,
}

fn promotion_from_row(row: PromotionRow, product_ids: Vec<ProductId>) -> DomainResult<Promotion> {
    let percentage = row
        .discount_percentage
        .map(|value| {
            u8::try_from(value).map_err(|_| {
                DomainError::InvalidPromotion(format!("stored percentage out of range: {value}"))
            })
        })
        .transpose()?;
    let discount = Discount::from_parts(row.discount_price, percentage)?;

    let valid_days = row
        .valid_days
        .iter()
        .map(|code| Weekday::from_code(code))
        .collect::<DomainResult<_>>()?;

    let minutes = |value: i16| {
        u16::try_from(value)
            .map_err(|_| DomainError::InvalidTimeWindow(format!("stored time out of range: {value}")))
            .and_then(TimeOfDay::new)
    };
    let window = TimeWindow::new(minutes(row.window_start)?, minutes(row.window_end)?)?;

    Ok(Promotion::new(
        PromotionId::from(row.id),
        row.description,
        discount,
        valid_days,
        window,
        row.valid_until,
        row.is_expired,
        product_ids,
        row.created_at,
    ))
}

const PROMOTION_COLUMNS: &str = "id, description, discount_price, discount_percentage, \
     valid_days, window_start, window_end, valid_until, is_expired, created_at";

#[async_trait]
impl PromotionRepository for PostgresPromotionRepository {
    async fn insert(&self, promotion: &Promotion) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO promotions
                 (id, description, discount_price, discount_percentage, valid_days,
                  window_start, window_end, valid_until, is_expired, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(Uuid::from(promotion.id))
        .bind(&promotion.description)
        .bind(promotion.discount.price())
        .bind(promotion.discount.percentage().map(i16::from))
        .bind(
            promotion
                .valid_days
                .iter()
                .map(|day| day.code().to_owned())
                .collect::<Vec<_>>(),
        )
        .bind(promotion.window.start().minutes() as i16)
        .bind(promotion.window.end().minutes() as i16)
        .bind(promotion.valid_until)
        .bind(promotion.is_expired)
        .bind(promotion.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for product_id in promotion.product_ids() {
            sqlx::query(
                "INSERT INTO promotion_products (promotion_id, product_id) VALUES ($1, $2)",
            )
            .bind(Uuid::from(promotion.id))
            .bind(Uuid::from(*product_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn update(&self, promotion: &Promotion) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE promotions
             SET description = $2, discount_price = $3, discount_percentage = $4,
                 valid_days = $5, window_start = $6, window_end = $7,
                 valid_until = $8, is_expired = $9
             WHERE id = $1",
        )
        .bind(Uuid::from(promotion.id))
        .bind(&promotion.description)
        .bind(promotion.discount.price())
        .bind(promotion.discount.percentage().map(i16::from))
        .bind(
            promotion
                .valid_days
                .iter()
                .map(|day| day.code().to_owned())
                .collect::<Vec<_>>(),
        )
        .bind(promotion.window.start().minutes() as i16)
        .bind(promotion.window.end().minutes() as i16)
        .bind(promotion.valid_until)
        .bind(promotion.is_expired)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("promotion not found".into()));
        }

        // Coverage is rewritten wholesale; the entity owns the relation.
        sqlx::query("DELETE FROM promotion_products WHERE promotion_id = $1")
            .bind(Uuid::from(promotion.id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for product_id in promotion.product_ids() {
            sqlx::query(
                "INSERT INTO promotion_products (promotion_id, product_id) VALUES ($1, $2)",
            )
            .bind(Uuid::from(promotion.id))
            .bind(Uuid::from(*product_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn delete(&self, id: PromotionId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("promotion not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<Promotion>> {
        let row = sqlx::query_as::<_, PromotionRow>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut coverage = self.coverage_for(&[row.id]).await?;
        let product_ids = coverage.remove(&row.id).unwrap_or_default();
        promotion_from_row(row, product_ids).map(Some)
    }

    async fn list_active(&self, now: DateTime<Utc>) -> DomainResult<Vec<Promotion>> {
        let rows = sqlx::query_as::<_, PromotionRow>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions
             WHERE NOT is_expired AND (valid_until IS NULL OR valid_until >= $1)
             ORDER BY created_at, id"
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut coverage = self.coverage_for(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let product_ids = coverage.remove(&row.id).unwrap_or_default();
                promotion_from_row(row, product_ids)
            })
            .collect()
    }
}
