use contracts::domain::a004_stock_item::aggregate::{StockItem, StockItemPayload};
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const STOCK_ITEMS: &str = "/api/stock-items";

/// Stock items offered by the sale form picker
pub async fn fetch_stock_items(gateway: &Gateway) -> Result<Vec<StockItem>, ApiError> {
    gateway.get_list(STOCK_ITEMS).await
}

pub async fn create_stock_item(
    gateway: &Gateway,
    payload: &StockItemPayload,
) -> Result<(), ApiError> {
    gateway.post(STOCK_ITEMS, payload).await
}
