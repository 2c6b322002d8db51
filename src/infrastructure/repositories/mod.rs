// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_product;
mod postgres_promotion;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_product::PostgresProductRepository;
pub use postgres_promotion::PostgresPromotionRepository;
