use contracts::domain::a003_inventory::aggregate::{InventoryPayload, InventoryRecord};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const INVENTORY: &str = "/api/store";

pub async fn fetch_inventory(gateway: &Gateway) -> Result<Vec<InventoryRecord>, ApiError> {
    gateway.get_list(INVENTORY).await
}

pub async fn create_inventory(
    gateway: &Gateway,
    payload: &InventoryPayload,
) -> Result<(), ApiError> {
    gateway.post(INVENTORY, payload).await
}

pub async fn update_inventory(
    gateway: &Gateway,
    id: &RecordId,
    payload: &InventoryPayload,
) -> Result<(), ApiError> {
    gateway.put(&format!("{}/{}", INVENTORY, id), payload).await
}

pub async fn delete_inventory(gateway: &Gateway, id: &RecordId) -> Result<(), ApiError> {
    gateway.delete(&format!("{}/{}", INVENTORY, id)).await
}
