use contracts::domain::common::RecordId;
use contracts::projections::p901_live_inventory::dto::LiveInventoryItem;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const LIVE_INVENTORY: &str = "/api/live-inventory";

pub async fn fetch_live_inventory(gateway: &Gateway) -> Result<Vec<LiveInventoryItem>, ApiError> {
    gateway.get_list(LIVE_INVENTORY).await
}

/// Send the edited row; the gateway answers with the stored row
pub async fn update_live_inventory(
    gateway: &Gateway,
    inventory_id: &RecordId,
    item: &LiveInventoryItem,
) -> Result<LiveInventoryItem, ApiError> {
    gateway
        .put_json(&format!("{}/{}", LIVE_INVENTORY, inventory_id), item)
        .await
}

pub async fn delete_live_inventory(gateway: &Gateway, item_id: &RecordId) -> Result<(), ApiError> {
    gateway
        .delete(&format!("{}/{}", LIVE_INVENTORY, item_id))
        .await
}
