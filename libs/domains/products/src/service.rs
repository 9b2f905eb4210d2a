//! Product Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductId};
use crate::repository::ProductRepository;
use crate::validation::{validate_create, validate_update};

/// Product service providing business logic operations
///
/// Every mutation validates first and resolves existence before touching
/// the store, so a rejected request never changes a record.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, oldest first
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Validate a create document and persist the product
    #[instrument(skip(self, document))]
    pub async fn create_product(&self, document: &Value) -> ProductResult<Product> {
        let input = validate_create(document)?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> ProductResult<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Existence is checked before the document is validated
    #[instrument(skip(self, document))]
    pub async fn update_product(&self, id: ProductId, document: &Value) -> ProductResult<Product> {
        let existing = self.get_product(id).await?;
        let changes = validate_update(document)?;
        self.repository.update(existing, changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> ProductResult<()> {
        let existing = self.get_product(id).await?;
        self.repository.delete(existing).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn stored() -> Product {
        Product::new(NewProduct {
            name: "Huevito Kinder".to_string(),
            price: dec!(9.30),
        })
    }

    fn document(attributes: Value) -> Value {
        json!({ "data": { "type": "products", "attributes": attributes } })
    }

    #[tokio::test]
    async fn test_create_invalid_never_touches_store() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().never();

        let service = ProductService::new(mock);
        let err = service
            .create_product(&document(json!({ "price": -2 })))
            .await
            .unwrap_err();

        match err {
            ProductError::Validation(violations) => {
                let titles: Vec<_> = violations.iter().map(|v| v.title.as_str()).collect();
                assert_eq!(
                    titles,
                    vec![
                        "A name is required",
                        "The price has to be more than 0 (zero)"
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_passes_normalized_input() {
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .with(eq(NewProduct {
                name: "Huevito Kinder".to_string(),
                price: dec!(9.30),
            }))
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock);
        let product = service
            .create_product(&document(json!({ "name": " Huevito Kinder ", "price": "9.3" })))
            .await
            .unwrap();

        assert_eq!(product.price.to_string(), "9.30");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_before_validation() {
        let mut mock = MockProductRepository::new();
        mock.expect_find().times(1).returning(|_| Ok(None));
        mock.expect_update().never();

        let service = ProductService::new(mock);
        let err = service
            .update_product(ProductId::generate(), &document(json!({ "price": "Dolar" })))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_never_writes() {
        let product = stored();
        let id = product.id;
        let mut mock = MockProductRepository::new();
        mock.expect_find()
            .with(eq(id))
            .returning(move |_| Ok(Some(product.clone())));
        mock.expect_update().never();

        let service = ProductService::new(mock);
        let err = service
            .update_product(id, &document(json!({ "price": "Dolar" })))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_never_deletes() {
        let mut mock = MockProductRepository::new();
        mock.expect_find().returning(|_| Ok(None));
        mock.expect_delete().never();

        let service = ProductService::new(mock);
        let err = service
            .delete_product(ProductId::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_clones_share_one_repository() {
        let service = ProductService::new(crate::repository::InMemoryProductRepository::new());
        let clone = service.clone();

        let created = service
            .create_product(&document(json!({ "name": "Chicle", "price": 1 })))
            .await
            .unwrap();

        assert_eq!(clone.get_product(created.id).await.unwrap(), created);
        assert!(Arc::ptr_eq(&service.repository, &clone.repository));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut mock = MockProductRepository::new();
        mock.expect_list()
            .returning(|| Err(ProductError::Internal("pool timed out".to_string())));

        let service = ProductService::new(mock);
        let err = service.list_products().await.unwrap_err();

        assert!(matches!(err, ProductError::Internal(_)));
    }
}
