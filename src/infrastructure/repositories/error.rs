use crate::domain::errors::DomainError;

const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_PRODUCT_PRICE: &str = "products_price_non_negative_chk";
const CNT_PROMOTION_DISCOUNT_MODE: &str = "promotions_discount_mode_chk";
const CNT_COVERAGE_PRODUCT: &str = "promotion_products_product_id_fkey";
const CNT_COVERAGE_PROMOTION: &str = "promotion_products_promotion_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_NAME => DomainError::Conflict("category name already exists".into()),
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_COVERAGE_PRODUCT => DomainError::NotFound("product not found".into()),
                    CNT_COVERAGE_PROMOTION => DomainError::NotFound("promotion not found".into()),
                    CNT_PRODUCT_PRICE => {
                        DomainError::InvalidPrice("price cannot be negative".into())
                    }
                    CNT_PROMOTION_DISCOUNT_MODE => DomainError::InvalidPromotion(
                        "exactly one discount mode is required".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
