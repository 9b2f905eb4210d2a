//! JSON:API documents for product responses and requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, ProductId};

pub const RESOURCE_TYPE: &str = "products";

/// Handler operations, each with a fixed success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Show,
    Update,
    Delete,
}

impl Operation {
    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::List | Operation::Show | Operation::Update => StatusCode::OK,
            Operation::Create => StatusCode::CREATED,
            Operation::Delete => StatusCode::NO_CONTENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductAttributes {
    #[schema(example = "Huevito Kinder")]
    pub name: String,
    /// Two-decimal string
    #[schema(example = "9.30")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    #[schema(example = "https://shop.example.com/api/products/0190f5c4-8a2e-7c4d-9b1e-3f6a2d8c1b70")]
    pub self_link: String,
}

/// A product as a JSON:API resource object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResource {
    #[serde(rename = "type")]
    #[schema(example = "products")]
    pub kind: String,
    #[schema(value_type = String, format = Uuid)]
    pub id: ProductId,
    pub attributes: ProductAttributes,
    pub links: ResourceLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDocument {
    pub data: ProductResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCollectionDocument {
    pub data: Vec<ProductResource>,
}

/// Request body accepted by create and update.
///
/// Only `data.attributes` is read; `data.type` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRequestDocument {
    pub data: ProductRequestData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRequestData {
    #[serde(rename = "type")]
    #[schema(example = "products")]
    pub kind: Option<String>,
    pub attributes: ProductRequestAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRequestAttributes {
    /// Required on create
    #[schema(example = "Huevito Kinder")]
    pub name: Option<String>,
    /// Number or numeric string greater than zero; required on create
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
}

/// Builds response documents with absolute self links.
#[derive(Debug, Clone, Default)]
pub struct ProductFormatter {
    base_url: String,
}

impl ProductFormatter {
    /// `base_url` prefixes every self link; empty yields absolute paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn self_link(&self, id: ProductId) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    pub fn resource(&self, product: &Product) -> ProductResource {
        ProductResource {
            kind: RESOURCE_TYPE.to_string(),
            id: product.id,
            attributes: ProductAttributes {
                name: product.name.clone(),
                price: product.price,
            },
            links: ResourceLinks {
                self_link: self.self_link(product.id),
            },
        }
    }

    pub fn single(&self, product: &Product) -> ProductDocument {
        ProductDocument {
            data: self.resource(product),
        }
    }

    pub fn collection(&self, products: &[Product]) -> ProductCollectionDocument {
        ProductCollectionDocument {
            data: products.iter().map(|p| self.resource(p)).collect(),
        }
    }

    /// Success response for a single-product operation.
    pub fn respond(&self, operation: Operation, product: &Product) -> Response {
        (operation.success_status(), Json(self.single(product))).into_response()
    }

    pub fn respond_collection(&self, products: &[Product]) -> Response {
        (
            Operation::List.success_status(),
            Json(self.collection(products)),
        )
            .into_response()
    }

    /// `204 No Content` with an empty body.
    pub fn respond_deleted(&self) -> Response {
        Operation::Delete.success_status().into_response()
    }
}
