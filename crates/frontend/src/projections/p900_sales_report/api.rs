use contracts::projections::p900_sales_report::dto::SaleReportRecord;
use contracts::shared::api_error::ApiError;

use crate::shared::http::Gateway;

const SALES_REPORT: &str = "/api/sales-report-details";

pub async fn fetch_sales_report(gateway: &Gateway) -> Result<Vec<SaleReportRecord>, ApiError> {
    gateway.get_list(SALES_REPORT).await
}
