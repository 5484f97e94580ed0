use contracts::domain::a002_product::aggregate::{Product, ProductPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const PRODUCTS: &str = "/api/lookup-product";

pub async fn fetch_products(gateway: &Gateway) -> Result<Vec<Product>, ApiError> {
    gateway.get_list(PRODUCTS).await
}

pub async fn create_product(gateway: &Gateway, payload: &ProductPayload) -> Result<(), ApiError> {
    gateway.post(PRODUCTS, payload).await
}

pub async fn update_product(
    gateway: &Gateway,
    id: &RecordId,
    payload: &ProductPayload,
) -> Result<(), ApiError> {
    gateway.put(&format!("{}/{}", PRODUCTS, id), payload).await
}

pub async fn delete_product(gateway: &Gateway, id: &RecordId) -> Result<(), ApiError> {
    gateway.delete(&format!("{}/{}", PRODUCTS, id)).await
}
