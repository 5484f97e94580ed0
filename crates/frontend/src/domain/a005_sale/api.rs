use contracts::domain::a005_sale::aggregate::SalePayload;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const SALES: &str = "/api/sales";

pub async fn create_sale(gateway: &Gateway, payload: &SalePayload) -> Result<(), ApiError> {
    gateway.post(SALES, payload).await
}
