use crate::domain::common::{LooseInteger, LooseNumber, LooseText, RecordId};
use crate::shared::export::{ExcelExportable, ExportCell, ExportRecord};
use crate::shared::list::HasProductType;
use crate::shared::money::{format_money, round2};
use serde::{Deserialize, Serialize};

/// Sale as returned by `/api/sales-report-details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleReportRecord {
    pub sale_id: RecordId,
    pub product_type: LooseText,
    pub texture: LooseText,
    pub length: LooseText,
    pub color: LooseText,
    pub quantity_sold: LooseInteger,
    pub quantity_unit: LooseText,
    pub rate: LooseNumber,
    pub purchase_price: LooseNumber,
    pub shipping_cost: LooseNumber,
    pub customer_name: LooseText,
    pub payment_method: LooseText,
    pub sale_date: LooseText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitSign {
    Positive,
    Negative,
}

impl ProfitSign {
    pub fn of(profit: f64) -> Self {
        if profit >= 0.0 {
            ProfitSign::Positive
        } else {
            ProfitSign::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProfitSign::Positive => "profit-positive",
            ProfitSign::Negative => "profit-negative",
        }
    }
}

/// A sale with its cost, revenue and profit worked out. Money values are
/// already rounded to cents.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReportRow {
    pub sale_id: RecordId,
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub quantity_sold: i64,
    pub quantity_unit: String,
    pub rate: f64,
    pub purchase_price: f64,
    pub shipping_cost: f64,
    pub total_purchase: f64,
    pub total_selling: f64,
    pub profit: f64,
    pub customer_name: String,
    pub payment_method: String,
    pub sale_date: String,
}

impl SalesReportRow {
    pub fn profit_sign(&self) -> ProfitSign {
        ProfitSign::of(self.profit)
    }

    /// `18"`
    pub fn length_label(&self) -> String {
        format!("{}\"", self.length)
    }
}

/// Derive the report row of one sale.
///
/// Totals are rounded to cents before profit is taken from them, so the
/// profit matches what the table shows.
pub fn compute_report_row(sale: &SaleReportRecord) -> SalesReportRow {
    let purchase_price = sale.purchase_price.value();
    let shipping_cost = sale.shipping_cost.value();
    let rate = sale.rate.value();
    let quantity = sale.quantity_sold.value();

    let total_purchase = round2(purchase_price + shipping_cost);
    let total_selling = round2(quantity as f64 * rate);
    let profit = round2(total_selling - total_purchase * quantity as f64);

    SalesReportRow {
        sale_id: sale.sale_id.clone(),
        product_type: sale.product_type.to_string(),
        texture: sale.texture.to_string(),
        length: sale.length.to_string(),
        color: sale.color.to_string(),
        quantity_sold: quantity,
        quantity_unit: sale.quantity_unit.to_string(),
        rate: round2(rate),
        purchase_price: round2(purchase_price),
        shipping_cost: round2(shipping_cost),
        total_purchase,
        total_selling,
        profit,
        customer_name: sale.customer_name.to_string(),
        payment_method: sale.payment_method.to_string(),
        sale_date: sale.sale_date.to_string(),
    }
}

pub fn compute_report(sales: &[SaleReportRecord]) -> Vec<SalesReportRow> {
    sales.iter().map(compute_report_row).collect()
}

/// Figures for the summary cards above the report table
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesReportSummary {
    pub sales_count: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
}

impl SalesReportSummary {
    pub fn revenue_label(&self) -> String {
        format_money(self.total_revenue)
    }

    pub fn profit_label(&self) -> String {
        format_money(self.total_profit)
    }
}

pub fn summarize(rows: &[SalesReportRow]) -> SalesReportSummary {
    let (revenue, profit) = rows
        .iter()
        .fold((0.0, 0.0), |(r, p), row| (r + row.total_selling, p + row.profit));
    SalesReportSummary {
        sales_count: rows.len(),
        total_revenue: round2(revenue),
        total_profit: round2(profit),
    }
}

impl HasProductType for SalesReportRow {
    fn product_type(&self) -> &str {
        &self.product_type
    }
}

impl ExcelExportable for SalesReportRow {
    fn to_export_record(&self) -> ExportRecord {
        vec![
            ("Product", self.product_type.clone().into()),
            ("Length", self.length_label().into()),
            ("Qty", self.quantity_sold.into()),
            ("Unit", self.quantity_unit.clone().into()),
            ("Unit Price", self.rate.into()),
            ("Purchase Cost", self.purchase_price.into()),
            ("Shipping", self.shipping_cost.into()),
            ("Total Cost", self.total_purchase.into()),
            ("Revenue", self.total_selling.into()),
            ("Profit", self.profit.into()),
            ("Date", ExportCell::from(self.sale_date.clone())),
        ]
    }
}

pub const SALES_REPORT_FILE: &str = "sales_report.xlsx";
pub const SALES_REPORT_SHEET: &str = "Sales Report";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::ExportTable;
    use crate::shared::list::{filter_by_product_type, ListView};
    use serde_json::json;

    fn record(value: serde_json::Value) -> SaleReportRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_compute_report_row() {
        let row = compute_report_row(&record(json!({
            "sale_id": 1, "product_type": "Wig", "length": 18,
            "purchase_price": "10", "shipping_cost": "2",
            "rate": "5", "quantity_sold": "3"
        })));
        assert_eq!(row.total_purchase, 12.0);
        assert_eq!(row.total_selling, 15.0);
        assert_eq!(row.profit, -21.0);
        assert_eq!(row.profit_sign(), ProfitSign::Negative);
        assert_eq!(format_money(row.profit), "-21.00");
        assert_eq!(row.length_label(), "18\"");
    }

    #[test]
    fn garbage_numbers_count_as_zero() {
        let row = compute_report_row(&record(json!({
            "purchase_price": "n/a", "shipping_cost": null,
            "rate": "", "quantity_sold": "2.9 pcs"
        })));
        assert_eq!(row.quantity_sold, 2);
        assert_eq!(row.total_purchase, 0.0);
        assert_eq!(row.total_selling, 0.0);
        assert_eq!(row.profit, 0.0);
        assert!(!row.profit.is_nan());
        assert_eq!(row.profit_sign(), ProfitSign::Positive);
    }

    #[test]
    fn profit_uses_rounded_totals() {
        let row = compute_report_row(&record(json!({
            "purchase_price": 1.004, "shipping_cost": 1.004,
            "rate": 3.333, "quantity_sold": 3
        })));
        // 2.008 -> 2.01, 9.999 -> 10.00, 10.00 - 2.01 * 3
        assert_eq!(row.total_purchase, 2.01);
        assert_eq!(row.total_selling, 10.0);
        assert_eq!(row.profit, 3.97);
    }

    #[test]
    fn test_summary_over_filtered_rows() {
        let rows = compute_report(&[
            record(json!({"product_type": "Wig", "rate": 100, "quantity_sold": 1, "purchase_price": 60})),
            record(json!({"product_type": "Bundle", "rate": 20, "quantity_sold": 2})),
            record(json!({"product_type": "Wig", "rate": 50, "quantity_sold": 2, "purchase_price": 10})),
        ]);
        let wigs = filter_by_product_type(&rows, "Wig");
        let summary = summarize(&wigs);
        assert_eq!(summary.sales_count, 2);
        assert_eq!(summary.revenue_label(), "200.00");
        assert_eq!(summary.profit_label(), "120.00");
    }

    #[test]
    fn report_pages_by_ten() {
        let rows: Vec<SalesReportRow> = (0..12)
            .map(|i| compute_report_row(&record(json!({"sale_id": i, "product_type": "Wig"}))))
            .collect();
        let mut view = ListView::new(10);
        assert_eq!(view.apply(&rows).rows.len(), 10);
        view.next(2);
        let page = view.apply(&rows);
        assert_eq!(page.rows.len(), 2);
        view.set_filter("Bundle");
        assert_eq!(view.page(), 1);
        assert_eq!(view.apply(&rows).total_count, 0);
    }

    #[test]
    fn test_export_columns() {
        let rows = compute_report(&[record(json!({
            "product_type": "Wig", "length": "20", "quantity_sold": 1,
            "quantity_unit": "pcs", "rate": 5, "sale_date": "2025-07-02"
        }))]);
        let table = ExportTable::from_items(SALES_REPORT_SHEET, &rows);
        assert_eq!(
            table.headers,
            vec![
                "Product", "Length", "Qty", "Unit", "Unit Price", "Purchase Cost",
                "Shipping", "Total Cost", "Revenue", "Profit", "Date"
            ]
        );
        assert_eq!(table.rows[0][1], ExportCell::Text("20\"".into()));
        assert_eq!(table.rows[0][8], ExportCell::Number(5.0));
    }
}
