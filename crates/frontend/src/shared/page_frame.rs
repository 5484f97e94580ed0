//! Root wrapper of every page rendered inside a tab

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the category modifier class:
/// `list` → `page`, `detail` → `page page--detail`,
/// `dashboard` → `page page--dashboard`.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_store--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id {} does not follow entity--category", page_id);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
