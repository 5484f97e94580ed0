//! Tab content registry: maps a tab key to its view

use super::tab_labels::*;
use crate::dashboards::d400_inventory_summary::ui::InventorySummaryDashboard;
use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_stock_item::ui::form::AddStockPage;
use crate::domain::a005_sale::ui::form::AddSalePage;
use crate::projections::p900_sales_report::ui::list::SalesReportList;
use crate::projections::p901_live_inventory::ui::list::LiveInventoryList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        TAB_DASHBOARD => view! { <InventorySummaryDashboard /> }.into_any(),
        TAB_STORES => view! { <StoreList /> }.into_any(),
        TAB_PRODUCTS => view! { <ProductList /> }.into_any(),
        TAB_INVENTORY => view! { <InventoryList /> }.into_any(),
        TAB_ADD_STOCK => view! { <AddStockPage /> }.into_any(),
        TAB_ADD_SALE => view! { <AddSalePage /> }.into_any(),
        TAB_SALES_REPORT => view! { <SalesReportList /> }.into_any(),
        TAB_LIVE_STOCK => view! { <LiveInventoryList /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
