use axum_helpers::{ErrorDocument, ErrorObject};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(ErrorDocument, ErrorObject)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "JSON:API service for managing the product catalog"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
