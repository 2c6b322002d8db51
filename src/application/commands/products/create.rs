// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::application::{
    dto::ProductDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::category::CategoryId;
use crate::domain::product::{Price, Product, ProductId, ProductName};
use uuid::Uuid;

pub struct CreateProductCommand {
    pub name: String,
    pub price: i64,
    pub category_id: Option<Uuid>,
    pub visible: bool,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let name = ProductName::new(command.name)?;
        let price = Price::new(command.price)?;
        let category_id = self.resolve_category(command.category_id).await?;

        let product = Product::new(
            ProductId::generate(),
            name,
            price,
            category_id,
            command.visible,
        );
        self.product_repo.insert(&product).await?;
        Ok(product.into())
    }

    pub(super) async fn resolve_category(
        &self,
        category_id: Option<Uuid>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(id) = category_id else {
            return Ok(None);
        };
        let id = CategoryId::from(id);
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(Some(id))
    }
}
