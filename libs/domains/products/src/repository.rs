use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductChanges, ProductId};

/// Repository trait for Product persistence
///
/// Implementations keep products in insertion order. `update` and `delete`
/// take the record the caller already resolved, so existence is checked
/// once by the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product with a fresh id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Merge `changes` into `product` and persist the result
    async fn update(&self, product: Product, changes: ProductChanges) -> ProductResult<Product>;

    async fn delete(&self, product: Product) -> ProductResult<()>;

    /// All products, oldest first
    async fn list(&self) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository
///
/// Used when no database is configured, and by tests.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, product: Product, changes: ProductChanges) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let stored = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        stored.apply_changes(changes);

        tracing::info!(product_id = %stored.id, "Updated product");
        Ok(stored.clone())
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != product.id);

        if products.len() == before {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!(product_id = %product.id, "Deleted product");
        Ok(())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: dec!(1.50),
        }
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        for name in ["first", "second", "third"] {
            repo.create(input(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_update_persists_changes() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Chicle")).await.unwrap();

        let updated = repo
            .update(
                product.clone(),
                ProductChanges {
                    name: Some("Chicle Bazooka".to_string()),
                    price: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Chicle Bazooka");
        assert_eq!(updated.price, product.price);
        assert_eq!(repo.find(product.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_removes_and_reports_missing() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Chicle")).await.unwrap();

        repo.delete(product.clone()).await.unwrap();
        assert_eq!(repo.find(product.id).await.unwrap(), None);

        let err = repo.delete(product).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }
}
