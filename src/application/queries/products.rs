// src/application/queries/products.rs
use crate::application::{
    dto::ProductDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::product::{ProductId, ProductRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct ProductQueryService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductQueryService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_product(&self, id: Uuid) -> ApplicationResult<ProductDto> {
        let product = self
            .repo
            .find_by_id(ProductId::from(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        Ok(product.into())
    }

    pub async fn list_products(&self) -> ApplicationResult<Vec<ProductDto>> {
        let products = self.repo.list().await?;
        Ok(products.into_iter().map(Into::into).collect())
    }
}
