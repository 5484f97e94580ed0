use crate::shared::icons::icon;
use contracts::shared::list::ListView;
use leptos::prelude::*;

/// Previous / next pager with numbered page buttons and a "Page x of y" label.
///
/// Pages are 1-based. Buttons are disabled at the bounds, and an empty
/// collection still shows "Page 1 of 1".
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 when the collection is empty)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into, optional)]
    total_count: Option<Signal<usize>>,

    on_prev: Callback<()>,
    on_next: Callback<()>,

    /// Jump straight to a page number
    on_go_to: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
                " Prev"
            </button>
            {move || {
                let current = current_page.get();
                (1..=total_pages.get().max(1))
                    .map(|n| {
                        let class = if n == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button class=class on:click=move |_| on_go_to.run(n)>
                                {n}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <span class="pagination-info">
                {move || {
                    let label = format!("Page {} of {}", current_page.get(), total_pages.get().max(1));
                    match total_count {
                        Some(count) => format!("{} ({} items)", label, count.get()),
                        None => label,
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=at_last
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}

/// Move the stored page back in range whenever the page count drops below it
pub fn keep_page_in_range(view_state: RwSignal<ListView>, total_pages: impl Fn() -> usize + 'static) {
    Effect::new(move |_| {
        let total = total_pages();
        if view_state.with_untracked(|v| v.page() > total.max(1)) {
            view_state.update(|v| {
                v.clamp_to(total);
            });
        }
    });
}
