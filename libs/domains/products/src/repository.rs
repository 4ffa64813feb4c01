use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Lookups that can miss return `Option`/`bool`; turning a miss into
/// `ProductError::NotFound` is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new, available product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, ordered by id ascending
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite name, price and availability
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip availability
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are handed out sequentially from 1 and never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };

        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };

        product.availability = !product.availability;

        tracing::info!(product_id = id, availability = product.availability, "Toggled availability");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.products.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> CreateProduct {
        CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(monitor()).await.unwrap();
        let second = repo.create(monitor()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(monitor()).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        let second = repo.create(monitor()).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(repo.get_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for _ in 0..12 {
            repo.create(monitor()).await.unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_update_and_toggle_missing_product() {
        let repo = InMemoryProductRepository::new();
        let input = UpdateProduct {
            name: "Monitor".to_string(),
            price: 1.0,
            availability: false,
        };

        assert!(repo.update(7, input).await.unwrap().is_none());
        assert!(repo.toggle_availability(7).await.unwrap().is_none());
        assert!(!repo.delete(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_availability() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(monitor()).await.unwrap();

        let toggled = repo.toggle_availability(product.id).await.unwrap().unwrap();
        assert!(!toggled.availability);

        let restored = repo.toggle_availability(product.id).await.unwrap().unwrap();
        assert!(restored.availability);
    }
}
