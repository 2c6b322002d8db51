// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use cardapio_core::application::ports::time::Clock;
use cardapio_core::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use cardapio_core::domain::errors::{DomainError, DomainResult};
use cardapio_core::domain::product::{Product, ProductId, ProductRepository};
use cardapio_core::domain::promotion::{Promotion, PromotionId, PromotionRepository};

/// A Monday at noon UTC, so weekday/window assertions stay deterministic.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2026-08-31T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_fixed_now() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct InMemoryCategoryRepo {
    inner: Mutex<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: Mutex::new(
                categories
                    .into_iter()
                    .map(|category| (category.id.into(), category))
                    .collect(),
            ),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: &Category) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        if map.contains_key(&category.id.into()) {
            return Err(DomainError::Conflict("category already exists".into()));
        }
        map.insert(category.id.into(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(&category.id.into()) {
            Some(stored) => {
                *stored = category.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("category not found".into())),
        }
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&id.into())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&id.into()).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|category| category.name.as_str() == name.as_str())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let map = self.inner.lock().unwrap();
        let mut categories: Vec<_> = map.values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

pub struct InMemoryProductRepo {
    inner: Mutex<Vec<Product>>,
}

impl InMemoryProductRepo {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            inner: Mutex::new(products),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn insert(&self, product: &Product) -> DomainResult<()> {
        let mut products = self.inner.lock().unwrap();
        if products.iter().any(|stored| stored.id == product.id) {
            return Err(DomainError::Conflict("product already exists".into()));
        }
        products.push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        let mut products = self.inner.lock().unwrap();
        match products.iter_mut().find(|stored| stored.id == product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("product not found".into())),
        }
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.inner.lock().unwrap();
        let before = products.len();
        products.retain(|stored| stored.id != id);
        if products.len() == before {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let products = self.inner.lock().unwrap();
        Ok(products.iter().find(|stored| stored.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let products = self.inner.lock().unwrap();
        Ok(products.clone())
    }
}

pub struct InMemoryPromotionRepo {
    inner: Mutex<Vec<Promotion>>,
}

impl InMemoryPromotionRepo {
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Self {
            inner: Mutex::new(promotions),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PromotionRepository for InMemoryPromotionRepo {
    async fn insert(&self, promotion: &Promotion) -> DomainResult<()> {
        let mut promotions = self.inner.lock().unwrap();
        if promotions.iter().any(|stored| stored.id == promotion.id) {
            return Err(DomainError::Conflict("promotion already exists".into()));
        }
        promotions.push(promotion.clone());
        Ok(())
    }

    async fn update(&self, promotion: &Promotion) -> DomainResult<()> {
        let mut promotions = self.inner.lock().unwrap();
        match promotions.iter_mut().find(|stored| stored.id == promotion.id) {
            Some(stored) => {
                *stored = promotion.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("promotion not found".into())),
        }
    }

    async fn delete(&self, id: PromotionId) -> DomainResult<()> {
        let mut promotions = self.inner.lock().unwrap();
        let before = promotions.len();
        promotions.retain(|stored| stored.id != id);
        if promotions.len() == before {
            return Err(DomainError::NotFound("promotion not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<Promotion>> {
        let promotions = self.inner.lock().unwrap();
        Ok(promotions.iter().find(|stored| stored.id == id).cloned())
    }

    async fn list_active(&self, now: DateTime<Utc>) -> DomainResult<Vec<Promotion>> {
        let promotions = self.inner.lock().unwrap();
        let mut active: Vec<_> = promotions
            .iter()
            .filter(|promotion| {
                !promotion.is_expired
                    && promotion.valid_until.is_none_or(|until| until >= now)
            })
            .cloned()
            .collect();
        active.sort_by_key(|promotion| promotion.created_at);
        Ok(active)
    }
}
