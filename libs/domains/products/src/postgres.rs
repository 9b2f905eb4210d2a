use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{NewProduct, Product, ProductChanges, ProductId},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        let active_model = entity::ActiveModel {
            id: Set(product.id.into_inner()),
            name: Set(product.name),
            price: Set(product.price),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, product: Product, changes: ProductChanges) -> ProductResult<Product> {
        let id = product.id;
        let mut product = product;
        product.apply_changes(changes);

        let active_model = entity::ActiveModel {
            id: Unchanged(id.into_inner()),
            name: Set(product.name),
            price: Set(product.price),
            created_at: Unchanged(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProductError::NotFound(id),
            other => other.into(),
        })?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(product.id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!(product_id = %product.id, "Deleted product");
        Ok(())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
