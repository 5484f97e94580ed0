use contracts::domain::a001_store::aggregate::{Store, StorePayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const STORES: &str = "/api/lookup-store";

pub async fn fetch_stores(gateway: &Gateway) -> Result<Vec<Store>, ApiError> {
    gateway.get_list(STORES).await
}

pub async fn create_store(gateway: &Gateway, payload: &StorePayload) -> Result<(), ApiError> {
    gateway.post(STORES, payload).await
}

pub async fn update_store(
    gateway: &Gateway,
    id: &RecordId,
    payload: &StorePayload,
) -> Result<(), ApiError> {
    gateway.put(&format!("{}/{}", STORES, id), payload).await
}

pub async fn delete_store(gateway: &Gateway, id: &RecordId) -> Result<(), ApiError> {
    gateway.delete(&format!("{}/{}", STORES, id)).await
}
