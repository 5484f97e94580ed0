//! Tab keys and their titles

pub const TAB_DASHBOARD: &str = "d400_inventory_summary";
pub const TAB_STORES: &str = "a001_store";
pub const TAB_PRODUCTS: &str = "a002_product";
pub const TAB_INVENTORY: &str = "a003_inventory";
pub const TAB_ADD_STOCK: &str = "a004_stock_item";
pub const TAB_ADD_SALE: &str = "a005_sale";
pub const TAB_SALES_REPORT: &str = "p900_sales_report";
pub const TAB_LIVE_STOCK: &str = "p901_live_inventory";

/// Title shown on the tab and in the sidebar; empty for unknown keys
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        TAB_DASHBOARD => "Dashboard",
        TAB_STORES => "Stores",
        TAB_PRODUCTS => "Products",
        TAB_INVENTORY => "Inventory",
        TAB_ADD_STOCK => "Add Stock",
        TAB_ADD_SALE => "Add Sale",
        TAB_SALES_REPORT => "Sales Report",
        TAB_LIVE_STOCK => "Live Stock",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_label() {
        for key in [
            TAB_DASHBOARD,
            TAB_STORES,
            TAB_PRODUCTS,
            TAB_INVENTORY,
            TAB_ADD_STOCK,
            TAB_ADD_SALE,
            TAB_SALES_REPORT,
            TAB_LIVE_STOCK,
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }
}
