use contracts::dashboards::d400_inventory_summary::dto::{InventoryByDateQuery, InventorySummary};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::with_query;
use crate::shared::http::Gateway;

const INVENTORY_BY_DATE: &str = "/api/inventorybydate";

/// Stock and sales totals for `query.from..=query.to`
pub async fn fetch_inventory_summary(
    gateway: &Gateway,
    query: &InventoryByDateQuery,
) -> Result<InventorySummary, ApiError> {
    let path =
        with_query(INVENTORY_BY_DATE, query).map_err(|e| ApiError::Request(e.to_string()))?;
    gateway.get_json(&path).await
}
