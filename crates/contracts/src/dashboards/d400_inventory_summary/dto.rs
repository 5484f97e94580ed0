use crate::domain::common::{LooseNumber, LooseText};
use crate::shared::list::HasProductType;
use crate::shared::notification::Severity;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Query of `GET /api/inventorybydate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryByDateQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Response of `GET /api/inventorybydate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySummary {
    pub total: Option<LooseNumber>,
    pub total_sales: Option<LooseNumber>,
    pub total_expenses: Option<LooseNumber>,
    pub groupedata: Vec<InventoryGroup>,
}

/// Stock quantity aggregated per product type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryGroup {
    pub product_type: LooseText,
    pub total_quantity: LooseNumber,
}

impl InventoryGroup {
    pub fn badge(&self) -> StockBadge {
        StockBadge::for_quantity(self.total_quantity.value())
    }
}

impl HasProductType for InventoryGroup {
    fn product_type(&self) -> &str {
        self.product_type.as_str()
    }
}

/// Availability badge shown next to a quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockBadge {
    Low(f64),
    InStock,
    OutOfStock,
}

impl StockBadge {
    pub const LOW_STOCK_BELOW: f64 = 20.0;

    pub fn for_quantity(quantity: f64) -> Self {
        if quantity > 0.0 && quantity < Self::LOW_STOCK_BELOW {
            StockBadge::Low(quantity)
        } else if quantity >= Self::LOW_STOCK_BELOW {
            StockBadge::InStock
        } else {
            StockBadge::OutOfStock
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockBadge::Low(q) => format!("{} left", q),
            StockBadge::InStock => "In Stock".to_string(),
            StockBadge::OutOfStock => "Out of Stock".to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            StockBadge::Low(_) => Severity::Warning,
            StockBadge::InStock => Severity::Success,
            StockBadge::OutOfStock => Severity::Danger,
        }
    }
}

/// Period picked on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPeriod {
    #[default]
    ThisMonth,
    LastMonth,
    Today,
}

impl DashboardPeriod {
    pub const ALL: [DashboardPeriod; 3] = [
        DashboardPeriod::ThisMonth,
        DashboardPeriod::LastMonth,
        DashboardPeriod::Today,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardPeriod::ThisMonth => "this_month",
            DashboardPeriod::LastMonth => "last_month",
            DashboardPeriod::Today => "today",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardPeriod::ThisMonth => "This Month",
            DashboardPeriod::LastMonth => "Last Month",
            DashboardPeriod::Today => "Today",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Inclusive date range of the period as seen on `today`
    pub fn date_range(&self, today: NaiveDate) -> InventoryByDateQuery {
        let first_of_month = today.with_day(1).unwrap_or(today);
        match self {
            DashboardPeriod::ThisMonth => InventoryByDateQuery {
                from: first_of_month,
                to: today,
            },
            DashboardPeriod::LastMonth => {
                let to = first_of_month.pred_opt().unwrap_or(first_of_month);
                InventoryByDateQuery {
                    from: to.with_day(1).unwrap_or(to),
                    to,
                }
            }
            DashboardPeriod::Today => InventoryByDateQuery {
                from: today,
                to: today,
            },
        }
    }
}

/// Text of a widget figure; `"..."` until the number is known
pub fn widget_value(value: Option<LooseNumber>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "...".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::ListView;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_ranges() {
        let today = day(2025, 3, 15);
        assert_eq!(
            DashboardPeriod::ThisMonth.date_range(today),
            InventoryByDateQuery { from: day(2025, 3, 1), to: today }
        );
        assert_eq!(
            DashboardPeriod::LastMonth.date_range(today),
            InventoryByDateQuery { from: day(2025, 2, 1), to: day(2025, 2, 28) }
        );
        assert_eq!(
            DashboardPeriod::Today.date_range(today),
            InventoryByDateQuery { from: today, to: today }
        );
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        let range = DashboardPeriod::LastMonth.date_range(day(2026, 1, 3));
        assert_eq!(range.from, day(2025, 12, 1));
        assert_eq!(range.to, day(2025, 12, 31));
    }

    #[test]
    fn test_stock_badges() {
        assert_eq!(StockBadge::for_quantity(5.0).label(), "5 left");
        assert_eq!(StockBadge::for_quantity(5.0).severity(), Severity::Warning);
        assert_eq!(StockBadge::for_quantity(20.0), StockBadge::InStock);
        assert_eq!(StockBadge::for_quantity(0.0), StockBadge::OutOfStock);
        assert_eq!(StockBadge::for_quantity(-2.0).label(), "Out of Stock");
    }

    #[test]
    fn summary_parses_and_pages_by_five() {
        let groups: Vec<serde_json::Value> = (0..7)
            .map(|i| json!({"product_type": format!("Type {}", i), "total_quantity": i * 5}))
            .collect();
        let summary: InventorySummary = serde_json::from_value(json!({
            "total": "1520.5",
            "total_sales": 300,
            "groupedata": groups
        }))
        .unwrap();
        assert_eq!(widget_value(summary.total), "1520.5");
        assert_eq!(widget_value(summary.total_expenses), "...");

        let view = ListView::new(5);
        let page = view.page_of(summary.groupedata.clone());
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows[0].badge(), StockBadge::OutOfStock);
    }

    #[test]
    fn query_string_uses_iso_dates() {
        let range = DashboardPeriod::Today.date_range(day(2025, 7, 9));
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({"from": "2025-07-09", "to": "2025-07-09"})
        );
        assert_eq!(DashboardPeriod::parse("last_month"), Some(DashboardPeriod::LastMonth));
    }
}
