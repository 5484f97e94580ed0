mod state;

use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_inventory::aggregate::{InventoryForm, InventoryRecord};
use contracts::shared::form::SubmitKind;
use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_store::api as store_api;
use crate::domain::a002_product::api as product_api;
use crate::domain::a003_inventory::api;
use crate::shared::components::form_field::{bind, SelectField, TextField};
use crate::shared::components::pagination_controls::{keep_page_in_range, PaginationControls};
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
pub fn InventoryList() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let records = CollectionResource::<InventoryRecord>::new();
    let stores = CollectionResource::<Store>::new();
    let products = CollectionResource::<Product>::new();
    let view_state = create_state();
    let form = create_form();

    let load_records = move || {
        let gateway = auth.gateway();
        records.load(online.online.get_untracked(), "inventory", move || async move {
            api::fetch_inventory(&gateway).await
        });
    };

    let load_lookups = move || {
        let is_online = online.online.get_untracked();
        let gateway = auth.gateway();
        stores.load(is_online, "stores", move || async move {
            store_api::fetch_stores(&gateway).await
        });
        let gateway = auth.gateway();
        products.load(is_online, "products", move || async move {
            product_api::fetch_products(&gateway).await
        });
    };

    Effect::new(move |_| {
        online.online.track();
        load_lookups();
        load_records();
    });

    let page = Memo::new(move |_| view_state.with(|v| v.page_of(records.items())));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));

    let store_options = Signal::derive(move || {
        stores
            .items()
            .iter()
            .map(|s| (s.id.to_string(), s.label()))
            .collect::<Vec<_>>()
    });
    let product_options = Signal::derive(move || {
        products
            .items()
            .iter()
            .map(|p| (p.id.to_string(), p.label()))
            .collect::<Vec<_>>()
    });

    let on_submit = move || {
        let gateway = auth.gateway();
        submit_form(
            form,
            notifications,
            "Inventory saved successfully",
            "Failed to save inventory",
            move |submission| async move {
                match submission.kind {
                    SubmitKind::Create => {
                        api::create_inventory(&gateway, &submission.payload).await
                    }
                    SubmitKind::Update(id) => {
                        api::update_inventory(&gateway, &id, &submission.payload).await
                    }
                }
            },
            move || load_records(),
        );
    };

    let on_delete = move |record: InventoryRecord| {
        let gateway = auth.gateway();
        confirm_delete(
            notifications,
            "Are you sure you want to delete this inventory record?",
            "inventory record",
            move || async move { api::delete_inventory(&gateway, &record.id).await },
            move || load_records(),
        );
    };

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let edit_mode = move || form.with(|f| f.is_edit_mode());

    view! {
        <PageFrame page_id="a003_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory"</h1>
                    <Badge>{move || records.state.with(|s| s.items.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_lookups();
                            load_records();
                        }
                        disabled=Signal::derive(move || records.loading())
                    >
                        {icon("refresh")}
                        {move || if records.loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || records.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || {
                    stores
                        .error()
                        .or_else(|| products.error())
                        .map(|e| view! { <div class="alert alert--warning">{format!("Lookups unavailable: {}", e)}</div> })
                }}

                <div class="form-card">
                    <h2 class="form-card__title">
                        {move || if edit_mode() { "Edit Inventory" } else { "Add Inventory" }}
                    </h2>
                    <div class="form__row">
                        <SelectField
                            label="Store"
                            binding=bind(form, "store_id", |f| &f.store_id, |f, v| f.store_id = v)
                            options=store_options
                            placeholder="-- Select store --"
                            disabled=submitting
                        />
                        <SelectField
                            label="Product"
                            binding=bind(form, "product_id", |f| &f.product_id, |f, v| f.product_id = v)
                            options=product_options
                            placeholder="-- Select product --"
                            disabled=submitting
                        />
                    </div>
                    <div class="form__row">
                        <TextField
                            label="Quantity"
                            input_type="number"
                            binding=bind(form, "quantity", |f| &f.quantity, |f, v| f.quantity = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Shipping cost"
                            input_type="number"
                            binding=bind(form, "shippingcost", |f| &f.shippingcost, |f, v| f.shippingcost = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Purchase price"
                            input_type="number"
                            binding=bind(form, "purchaseprice", |f| &f.purchaseprice, |f, v| f.purchaseprice = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=submitting
                        >
                            {move || if edit_mode() { "Update Inventory" } else { "Add Inventory" }}
                        </Button>
                        <Show when=edit_mode>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| form.update(|f| f.cancel_edit())
                            >
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                </div>

                <Show
                    when=move || !records.offline()
                    fallback=|| view! { <div class="alert alert--warning">"No internet connection. Please check your network."</div> }
                >
                    <Show when=move || records.loading() && records.state.with(|s| !s.loaded)>
                        <Spinner />
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Store"</TableHeaderCell>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                    <TableHeaderCell>"Shipping Cost"</TableHeaderCell>
                                    <TableHeaderCell>"Purchase Price"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page.get().rows
                                    key=|r| r.id.clone()
                                    children=move |record| {
                                        let quantity = record.quantity.to_string();
                                        let shippingcost = format_money(record.shippingcost.value());
                                        let purchaseprice = format_money(record.purchaseprice.value());
                                        let for_edit = record.clone();
                                        let for_delete = record.clone();
                                        let for_store = record.clone();
                                        let store_name = move || stores.state.with(|s| for_store.store_label(&s.items));
                                        let product_name = move || products.state.with(|p| record.product_label(&p.items));
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{store_name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{product_name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{quantity}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {shippingcost}
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {purchaseprice}
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form.update(|f| f.start_edit(for_edit.id.clone(), InventoryForm::from(&for_edit)))
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
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

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
                </Show>
            </div>
        </PageFrame>
    }
}
