use axum::Router;

pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn in_memory_app() -> Router {
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: None,
                run_migrations: false,
                server: ServerConfig::default().with_public_base_url("https://shop.example.com/"),
                environment: Environment::Development,
            },
            db: None,
        };

        create_router::<ApiDoc>(routes(&state), &state.config.server)
            .unwrap()
            .merge(health_router(state.config.app))
            .merge(ready_router(state))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_products_are_served_under_api() {
        let app = in_memory_app();

        let (status, body) = call(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [] }));

        let document = json!({
            "data": { "type": "products", "attributes": { "name": "Huevito Kinder", "price": 9.30 } }
        });
        let (status, created) = call(&app, "POST", "/api/products", Some(document)).await;
        assert_eq!(status, StatusCode::CREATED);

        let id = created["data"]["id"].as_str().unwrap();
        let self_link = format!("https://shop.example.com/api/products/{}", id);
        assert_eq!(created["data"]["links"]["self"], self_link);

        let (status, shown) = call(&app, "GET", &format!("/api/products/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shown["data"]["attributes"]["price"], "9.30");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_error_4() {
        let app = in_memory_app();

        let (status, body) = call(&app, "GET", "/api/orders", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"][0]["code"], "Error-4");
        assert_eq!(body["errors"][0]["title"], "The requested route was not found");
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_error_5() {
        let app = in_memory_app();

        let (status, body) = call(&app, "PATCH", "/api/products", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["errors"][0]["code"], "Error-5");
    }

    #[tokio::test]
    async fn test_health_and_ready_without_database() {
        let app = in_memory_app();

        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");

        let (status, body) = call(&app, "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let app = in_memory_app();

        let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/products"]["post"].is_object());
        assert!(body["paths"]["/products/{id}"]["delete"].is_object());
    }
}
