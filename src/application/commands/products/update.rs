// src/application/commands/products/update.rs
use super::ProductCommandService;
use crate::application::{
    dto::ProductDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::product::{Price, ProductId, ProductName};
use uuid::Uuid;

/// Full replacement of a product's mutable fields, as the catalog PUT does.
pub struct UpdateProductCommand {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub category_id: Option<Uuid>,
    pub visible: bool,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::from(command.id);
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        product.rename(ProductName::new(command.name)?);
        product.set_price(Price::new(command.price)?);
        product.set_category(self.resolve_category(command.category_id).await?);
        product.set_visible(command.visible);

        self.product_repo.update(&product).await?;
        Ok(product.into())
    }
}
