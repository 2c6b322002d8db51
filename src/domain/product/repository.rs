use crate::domain::errors::DomainResult;
use crate::domain::product::entity::Product;
use crate::domain::product::value_objects::ProductId;
use async_trait::async_trait;

/// Read/write access to the product catalog. `list` returns every product,
/// visible or not; visibility filtering belongs to menu assembly alone.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &Product) -> DomainResult<()>;
    async fn update(&self, product: &Product) -> DomainResult<()>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn list(&self) -> DomainResult<Vec<Product>>;
}
