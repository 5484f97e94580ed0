use contracts::dashboards::d400_inventory_summary::dto::{
    widget_value, DashboardPeriod, InventoryByDateQuery, InventoryGroup, InventorySummary,
};
use contracts::domain::common::LooseNumber;
use contracts::shared::list::ListView;
use contracts::shared::notification::Severity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_inventory_summary::api;
use crate::shared::components::pagination_controls::{keep_page_in_range, PaginationControls};
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::config;
use crate::shared::date_utils::today;
use crate::shared::fetcher::CollectionResource;
use crate::shared::online::use_online;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Inventory summary dashboard: totals widgets and stock per product type
#[component]
pub fn InventorySummaryDashboard() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();

    let (period, set_period) = signal(DashboardPeriod::default());
    let groups = CollectionResource::<InventoryGroup>::new();
    let view_state = RwSignal::new(ListView::new(config().ui.dashboard_page_size));
    let (stats, set_stats) = signal(None::<InventorySummary>);

    // Table data follows the selected period
    Effect::new(move |_| {
        online.online.track();
        let query = period.get().date_range(today());
        let gateway = auth.gateway();
        view_state.update(|v| v.reset_page());
        groups.load(online.online.get_untracked(), "inventory groups", move || async move {
            api::fetch_inventory_summary(&gateway, &query)
                .await
                .map(|summary| summary.groupedata)
        });
    });

    // Widgets always cover the configured start date up to today
    Effect::new(move |_| {
        if !online.online.get() {
            return;
        }
        let query = InventoryByDateQuery {
            from: config().dashboard.stats_from,
            to: today(),
        };
        let gateway = auth.gateway();
        spawn_local(async move {
            match api::fetch_inventory_summary(&gateway, &query).await {
                Ok(summary) => {
                    let _ = set_stats.try_set(Some(summary));
                }
                Err(e) => log::error!("Failed to fetch dashboard stats: {}", e),
            }
        });
    });

    let page = Memo::new(move |_| view_state.with(|v| v.page_of(groups.items())));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));
    let stat = move |pick: fn(&InventorySummary) -> Option<LooseNumber>| {
        Signal::derive(move || widget_value(stats.with(|s| s.as_ref().and_then(pick))))
    };

    view! {
        <PageFrame page_id="d400_inventory_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Total Stock Value" icon_name="stock" value=stat(|s| s.total) />
                    <StatCard label="Total Sales" icon_name="sales" value=stat(|s| s.total_sales) />
                    <StatCard label="Expenses" icon_name="report" value=stat(|s| s.total_expenses) />
                </div>

                <div class="card">
                    <div class="card__header">
                        <strong>"Inventory Data"</strong>
                        <select
                            class="filter-field__select"
                            prop:value=move || period.get().as_str()
                            on:change=move |ev| {
                                if let Some(p) = DashboardPeriod::parse(&event_target_value(&ev)) {
                                    set_period.set(p);
                                }
                            }
                        >
                            {DashboardPeriod::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    {move || groups.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <Show when=move || groups.offline()>
                        <div class="alert alert--warning">"No internet connection. Please check your network."</div>
                    </Show>
                    <Show when=move || groups.loading()>
                        <Spinner />
                    </Show>

                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product Type"</TableHeaderCell>
                                <TableHeaderCell>"Total Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Latest Available"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page.get()
                                    .rows
                                    .into_iter()
                                    .map(|group| {
                                        let badge = group.badge();
                                        view! {
                                            <TableRow>
                                                <TableCell>{group.product_type.to_string()}</TableCell>
                                                <TableCell class="text-right">{group.total_quantity.to_string()}</TableCell>
                                                <TableCell>
                                                    <Badge appearance=BadgeAppearance::Tint color=badge_color(badge.severity())>
                                                        {badge.label()}
                                                    </Badge>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>

                    <PaginationControls
                        current_page=Signal::derive(move || page.get().page)
                        total_pages=Signal::derive(move || page.get().total_pages)
                        on_prev=Callback::new(move |_| view_state.update(|v| v.prev()))
                        on_next=Callback::new(move |_| {
                            let total = page.get_untracked().total_pages;
                            view_state.update(|v| v.next(total));
                        })
                        on_go_to=Callback::new(move |n| {
                            let total = page.get_untracked().total_pages;
                            view_state.update(|v| v.go_to(n, total));
                        })
                    />
                </div>
            </div>
        </PageFrame>
    }
}

fn badge_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Success => BadgeColor::Success,
        Severity::Info => BadgeColor::Informative,
        Severity::Warning => BadgeColor::Warning,
        Severity::Danger => BadgeColor::Danger,
    }
}
