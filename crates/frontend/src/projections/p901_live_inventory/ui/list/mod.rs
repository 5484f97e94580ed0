mod state;

use contracts::projections::p901_live_inventory::dto::{
    remove_by_item_id, replace_by_inventory_id, stock_export_file_name, LiveInventoryForm,
    LiveInventoryItem, STOCK_SHEET,
};
use contracts::shared::form::SubmitKind;
use contracts::shared::list::{filter_by_product_type, unique_product_types};
use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

use crate::projections::p901_live_inventory::api;
use crate::shared::components::form_field::{bind, TextField};
use crate::shared::components::pagination_controls::{keep_page_in_range, PaginationControls};
use crate::shared::components::product_type_filter::ProductTypeFilter;
use crate::shared::date_utils::today;
use crate::shared::export::{export_to_excel, ExportOutcome};
use crate::shared::fetcher::CollectionResource;
use crate::shared::icons::icon;
use crate::shared::mutation::{confirm_delete, submit_form};
use crate::shared::notification::use_notifications;
use crate::shared::online::use_online;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::{create_form, create_state};

#[component]
pub fn LiveInventoryList() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let stock = CollectionResource::<LiveInventoryItem>::new();
    let view_state = create_state();
    let form = create_form();
    let dialog_open = RwSignal::new(false);

    let load_data = move || {
        let gateway = auth.gateway();
        stock.load(online.online.get_untracked(), "live inventory", move || async move {
            api::fetch_live_inventory(&gateway).await
        });
    };

    Effect::new(move |_| {
        online.online.track();
        load_data();
    });

    let filtered = Memo::new(move |_| {
        let key = view_state.with(|v| v.filter().to_string());
        stock.state.with(|s| filter_by_product_type(&s.items, &key))
    });
    let page = Memo::new(move |_| view_state.with(|v| filtered.with(|rows| v.page_of(rows.clone()))));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));
    let type_options = Signal::derive(move || stock.state.with(|s| unique_product_types(&s.items)));

    let open_edit = move |item: LiveInventoryItem| {
        form.update(|f| f.start_edit(item.inventory_id.clone(), LiveInventoryForm::from(&item)));
        dialog_open.set(true);
    };

    let close_edit = move || {
        form.update(|f| f.cancel_edit());
        dialog_open.set(false);
    };

    let on_save = move || {
        let gateway = auth.gateway();
        submit_form(
            form,
            notifications,
            "Item updated successfully",
            "Failed to update item",
            move |submission| async move {
                let SubmitKind::Update(inventory_id) = submission.kind else {
                    return Ok(());
                };
                let updated =
                    api::update_live_inventory(&gateway, &inventory_id, &submission.payload).await?;
                let mut replaced = false;
                stock.update_items(|items| replaced = replace_by_inventory_id(items, updated));
                if !replaced {
                    log::warn!("Updated row {} is not loaded, reloading", inventory_id);
                    load_data();
                }
                Ok(())
            },
            move || dialog_open.set(false),
        );
    };

    let on_delete = move |item: LiveInventoryItem| {
        let gateway = auth.gateway();
        let item_id = item.item_id;
        let request_id = item_id.clone();
        confirm_delete(
            notifications,
            "Are you sure you want to delete this item?",
            "item",
            move || async move { api::delete_live_inventory(&gateway, &request_id).await },
            move || stock.update_items(|items| remove_by_item_id(items, &item_id)),
        );
    };

    let on_export = move |_| {
        let rows = filtered.get_untracked();
        match export_to_excel(&rows, &stock_export_file_name(today()), STOCK_SHEET) {
            Ok(ExportOutcome::Written { rows }) => {
                notifications.success(format!("Exported {} rows", rows))
            }
            Ok(ExportOutcome::Empty) => {}
            Err(e) => notifications.error(format!("Export failed: {}", e)),
        }
    };

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    view! {
        <PageFrame page_id="p901_live_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Live Stock"</h1>
                    <Badge>{move || filtered.with(|rows| rows.len()).to_string()}</Badge>
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
                        disabled=Signal::derive(move || stock.loading())
                    >
                        {icon("refresh")}
                        {move || if stock.loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || stock.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !stock.offline()
                    fallback=|| view! { <div class="alert alert--error">"No internet connection. Please check your network."</div> }
                >
                    <Show
                        when=move || !(stock.loading() && stock.state.with(|s| !s.loaded))
                        fallback=|| view! { <Spinner /> }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Product Type"</TableHeaderCell>
                                        <TableHeaderCell>"Texture"</TableHeaderCell>
                                        <TableHeaderCell>"Length"</TableHeaderCell>
                                        <TableHeaderCell>"Color"</TableHeaderCell>
                                        <TableHeaderCell>"Added"</TableHeaderCell>
                                        <TableHeaderCell>"Sold"</TableHeaderCell>
                                        <TableHeaderCell>"Remaining"</TableHeaderCell>
                                        <TableHeaderCell>"Unit Price"</TableHeaderCell>
                                        <TableHeaderCell>"Stock Value"</TableHeaderCell>
                                        <TableHeaderCell>"Added Date"</TableHeaderCell>
                                        <TableHeaderCell>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        page.get()
                                            .rows
                                            .into_iter()
                                            .map(|item| {
                                                let for_edit = item.clone();
                                                let for_delete = item.clone();
                                                let product_type = item.product_type.to_string();
                                                let texture = item.texture.to_string();
                                                let length = item.length.to_string();
                                                let color = item.color.to_string();
                                                let item_added = item.item_added.to_string();
                                                let sold_item = item.sold_item.to_string();
                                                let quantity_available = item.quantity_available.to_string();
                                                let unit_price = format_money(item.unit_price.value());
                                                let stock_value = format_money(item.stock_value.value());
                                                let added_date = item.added_date_label();
                                                view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{product_type}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>{texture}</TableCell>
                                                        <TableCell>{length}</TableCell>
                                                        <TableCell>{color}</TableCell>
                                                        <TableCell class="text-right">{item_added}</TableCell>
                                                        <TableCell class="text-right">{sold_item}</TableCell>
                                                        <TableCell class="text-right">{quantity_available}</TableCell>
                                                        <TableCell class="text-right">{unit_price}</TableCell>
                                                        <TableCell class="text-right">{stock_value}</TableCell>
                                                        <TableCell>{added_date}</TableCell>
                                                        <TableCell>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| open_edit(for_edit.clone())
                                                                attr:title="Edit"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_delete(for_delete.clone())
                                                                attr:title="Delete"
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </TableBody>
                            </Table>
                        </div>

                        <Show when=move || stock.state.with(|s| s.loaded) && filtered.with(|rows| rows.is_empty())>
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
                </Show>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Edit Stock Item"</DialogTitle>
                        <DialogContent>
                            <TextField
                                label="Product type"
                                binding=bind(form, "product_type", |f| &f.product_type, |f, v| f.product_type = v)
                                disabled=submitting
                            />
                            <TextField
                                label="Texture"
                                binding=bind(form, "texture", |f| &f.texture, |f, v| f.texture = v)
                                disabled=submitting
                            />
                            <TextField
                                label="Length"
                                binding=bind(form, "length", |f| &f.length, |f, v| f.length = v)
                                disabled=submitting
                            />
                            <TextField
                                label="Color"
                                binding=bind(form, "color", |f| &f.color, |f, v| f.color = v)
                                disabled=submitting
                            />
                            <TextField
                                label="Remaining quantity"
                                input_type="number"
                                binding=bind(form, "quantity_available", |f| &f.quantity_available, |f, v| f.quantity_available = v)
                                disabled=submitting
                            />
                            <TextField
                                label="Unit price"
                                input_type="number"
                                binding=bind(form, "unit_price", |f| &f.unit_price, |f, v| f.unit_price = v)
                                disabled=submitting
                            />
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| close_edit()
                                disabled=submitting
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_save()
                                disabled=submitting
                            >
                                {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
