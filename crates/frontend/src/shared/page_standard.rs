//! Page categories of the views rendered inside a tab.
//!
//! Every tab page carries an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a003_inventory--list"`) and a matching `data-page-category`, so the
//! id seen in the DOM inspector leads straight to the module that renders it.

/// Table of records with filter and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Standalone entry form (add stock, add sale)
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Widgets and aggregate tables
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// `{entity}--{category}` with a known category
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_store--list"));
        assert!(is_valid_page_id("d400_inventory_summary--dashboard"));
        assert!(!is_valid_page_id("a001_store"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_store--wizard"));
    }
}
