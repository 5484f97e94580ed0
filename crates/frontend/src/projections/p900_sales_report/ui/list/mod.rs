mod state;

use contracts::projections::p900_sales_report::dto::{
    compute_report, summarize, SaleReportRecord, SalesReportRow, SALES_REPORT_FILE,
    SALES_REPORT_SHEET,
};
use contracts::shared::list::{filter_by_product_type, unique_product_types};
use contracts::shared::money::format_money;
use contracts::shared::notification::Severity;
use leptos::prelude::*;
use thaw::*;

use crate::projections::p900_sales_report::api;
use crate::shared::components::pagination_controls::{keep_page_in_range, PaginationControls};
use crate::shared::components::product_type_filter::ProductTypeFilter;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::{export_to_excel, ExportOutcome};
use crate::shared::fetcher::CollectionResource;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::online::use_online;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

#[component]
pub fn SalesReportList() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let sales = CollectionResource::<SaleReportRecord>::new();
    let view_state = create_state();

    let load_data = move || {
        let gateway = auth.gateway();
        sales.load(online.online.get_untracked(), "sales report", move || async move {
            api::fetch_sales_report(&gateway).await
        });
    };

    Effect::new(move |_| {
        online.online.track();
        load_data();
    });

    let report = Memo::new(move |_| sales.state.with(|s| compute_report(&s.items)));
    let filtered = Memo::new(move |_| {
        let key = view_state.with(|v| v.filter().to_string());
        report.with(|rows| filter_by_product_type(rows, &key))
    });
    let page = Memo::new(move |_| view_state.with(|v| filtered.with(|rows| v.page_of(rows.clone()))));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));
    let summary = Memo::new(move |_| filtered.with(|rows| summarize(rows)));
    let type_options = Signal::derive(move || report.with(|rows| unique_product_types(rows)));

    let profit_status = Signal::derive(move || {
        if summary.get().total_profit < 0.0 {
            Severity::Danger
        } else {
            Severity::Success
        }
    });

    let on_export = move |_| {
        let rows = filtered.get_untracked();
        match export_to_excel(&rows, SALES_REPORT_FILE, SALES_REPORT_SHEET) {
            Ok(ExportOutcome::Written { rows }) => {
                notifications.success(format!("Exported {} rows", rows))
            }
            Ok(ExportOutcome::Empty) => {}
            Err(e) => notifications.error(format!("Export failed: {}", e)),
        }
    };

    view! {
        <PageFrame page_id="p900_sales_report--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales Report"</h1>
                    <Badge>{move || summary.get().sales_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <ProductTypeFilter
                        value=Signal::derive(move || view_state.with(|v| v.filter().to_string()))
                        options=type_options
                        on_change=Callback::new(move |key: String| view_state.update(|v| v.set_filter(key)))
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                        disabled=Signal::derive(move || filtered.with(|rows| rows.is_empty()))
                    >
                        {icon("download")}
                        " Export"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || sales.loading())
                    >
                        {icon("refresh")}
                        {move || if sales.loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || sales.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !sales.offline()
                    fallback=|| view! { <div class="alert alert--warning">"No internet connection. Please check your network."</div> }
                >
                    <div class="stat-cards">
                        <StatCard
                            label="Sales"
                            icon_name="sales"
                            value=Signal::derive(move || summary.get().sales_count.to_string())
                        />
                        <StatCard
                            label="Revenue"
                            icon_name="report"
                            value=Signal::derive(move || summary.get().revenue_label())
                        />
                        <StatCard
                            label="Profit"
                            icon_name="report"
                            value=Signal::derive(move || summary.get().profit_label())
                            status=profit_status
                        />
                    </div>

                    <Show when=move || sales.loading() && sales.state.with(|s| !s.loaded)>
                        <Spinner />
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Length"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Unit"</TableHeaderCell>
                                    <TableHeaderCell>"Unit Price"</TableHeaderCell>
                                    <TableHeaderCell>"Purchase Cost"</TableHeaderCell>
                                    <TableHeaderCell>"Shipping"</TableHeaderCell>
                                    <TableHeaderCell>"Total Cost"</TableHeaderCell>
                                    <TableHeaderCell>"Revenue"</TableHeaderCell>
                                    <TableHeaderCell>"Profit"</TableHeaderCell>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || page.get().rows.into_iter().map(report_row).collect_view()}
                            </TableBody>
                        </Table>
                    </div>

                    <Show when=move || sales.state.with(|s| s.loaded) && filtered.with(|rows| rows.is_empty())>
                        <div class="table-empty">"No data available for this filter."</div>
                    </Show>

                    <PaginationControls
                        current_page=Signal::derive(move || page.get().page)
                        total_pages=Signal::derive(move || page.get().total_pages)
                        total_count=Signal::derive(move || page.get().total_count)
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
                </Show>
            </div>
        </PageFrame>
    }
}

fn report_row(row: SalesReportRow) -> impl IntoView {
    let profit_class = format!("text-right {}", row.profit_sign().css_class());
    let product_type = row.product_type.clone();
    let length_label = row.length_label();
    let quantity_sold = row.quantity_sold.to_string();
    let quantity_unit = row.quantity_unit.clone();
    let rate = format_money(row.rate);
    let purchase_price = format_money(row.purchase_price);
    let shipping_cost = format_money(row.shipping_cost);
    let total_purchase = format_money(row.total_purchase);
    let total_selling = format_money(row.total_selling);
    let profit = format_money(row.profit);
    let sale_date = row.sale_date.clone();
    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{product_type}</TableCellLayout>
            </TableCell>
            <TableCell>{length_label}</TableCell>
            <TableCell class="text-right">{quantity_sold}</TableCell>
            <TableCell>{quantity_unit}</TableCell>
            <TableCell class="text-right">{rate}</TableCell>
            <TableCell class="text-right">{purchase_price}</TableCell>
            <TableCell class="text-right">{shipping_cost}</TableCell>
            <TableCell class="text-right">{total_purchase}</TableCell>
            <TableCell class="text-right">{total_selling}</TableCell>
            <TableCell class=profit_class>{profit}</TableCell>
            <TableCell>{sale_date}</TableCell>
        </TableRow>
    }
}
