use axum::Router;
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductFormatter, ProductService, handlers,
};

pub fn router(state: &crate::state::AppState) -> Router {
    let formatter = ProductFormatter::new(state.config.server.public_base_url.clone());

    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository), formatter)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            let repository = InMemoryProductRepository::new();
            handlers::router(ProductService::new(repository), formatter)
        }
    }
}
