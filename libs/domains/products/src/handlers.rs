//! HTTP handlers for Products API

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse},
    ErrorDocument, ErrorObject, LenientJson, UuidPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::document::{
    Operation, ProductAttributes, ProductCollectionDocument, ProductDocument, ProductFormatter,
    ProductRequestAttributes, ProductRequestData, ProductRequestDocument, ProductResource,
    ResourceLinks,
};
use crate::error::ProductResult;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            ProductDocument, ProductCollectionDocument, ProductResource,
            ProductAttributes, ResourceLinks, ProductRequestDocument,
            ProductRequestData, ProductRequestAttributes, ErrorDocument, ErrorObject
        ),
        responses(
            NotFoundResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Router state: the service plus the response formatter.
pub struct ProductsState<R: ProductRepository> {
    service: ProductService<R>,
    formatter: Arc<ProductFormatter>,
}

impl<R: ProductRepository> Clone for ProductsState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            formatter: Arc::clone(&self.formatter),
        }
    }
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    formatter: ProductFormatter,
) -> Router {
    let state = ProductsState {
        service,
        formatter: Arc::new(formatter),
    };

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// List all products, oldest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = ProductCollectionDocument),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
) -> ProductResult<Response> {
    let products = state.service.list_products().await?;
    Ok(state.formatter.respond_collection(&products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequestDocument,
    responses(
        (status = 201, description = "Product created successfully", body = ProductDocument),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    LenientJson(document): LenientJson,
) -> ProductResult<Response> {
    let product = state.service.create_product(&document).await?;
    Ok(state.formatter.respond(Operation::Create, &product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDocument),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Response> {
    let product = state.service.get_product(id.into()).await?;
    Ok(state.formatter.respond(Operation::Show, &product))
}

/// Update a product; omitted attributes keep their values
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductRequestDocument,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductDocument),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    UuidPath(id): UuidPath,
    LenientJson(document): LenientJson,
) -> ProductResult<Response> {
    let product = state.service.update_product(id.into(), &document).await?;
    Ok(state.formatter.respond(Operation::Update, &product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Response> {
    state.service.delete_product(id.into()).await?;
    Ok(state.formatter.respond_deleted())
}
