mod state;

use contracts::domain::a002_product::aggregate::{Product, ProductForm};
use contracts::shared::form::SubmitKind;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::components::form_field::{bind, TextField};
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
pub fn ProductList() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let products = CollectionResource::<Product>::new();
    let view_state = create_state();
    let form = create_form();

    let load_data = move || {
        let gateway = auth.gateway();
        products.load(online.online.get_untracked(), "products", move || async move {
            api::fetch_products(&gateway).await
        });
    };

    Effect::new(move |_| {
        online.online.track();
        load_data();
    });

    let page = Memo::new(move |_| view_state.with(|v| v.page_of(products.items())));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));

    let on_submit = move || {
        let gateway = auth.gateway();
        submit_form(
            form,
            notifications,
            "Product saved successfully",
            "Failed to save product",
            move |submission| async move {
                match submission.kind {
                    SubmitKind::Create => api::create_product(&gateway, &submission.payload).await,
                    SubmitKind::Update(id) => {
                        api::update_product(&gateway, &id, &submission.payload).await
                    }
                }
            },
            move || load_data(),
        );
    };

    let on_delete = move |product: Product| {
        let gateway = auth.gateway();
        confirm_delete(
            notifications,
            "Are you sure you want to delete this product?",
            "product",
            move || async move { api::delete_product(&gateway, &product.id).await },
            move || load_data(),
        );
    };

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let edit_mode = move || form.with(|f| f.is_edit_mode());

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || products.state.with(|s| s.items.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || products.loading())
                    >
                        {icon("refresh")}
                        {move || if products.loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || products.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form-card">
                    <h2 class="form-card__title">
                        {move || if edit_mode() { "Edit Product" } else { "Add Product" }}
                    </h2>
                    <div class="form__row">
                        <TextField
                            label="Product code"
                            binding=bind(form, "product_code", |f| &f.product_code, |f, v| f.product_code = v)
                            disabled=submitting
                        />
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
                    </div>
                    <div class="form__row">
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
                            label="Vendor name"
                            placeholder="Optional"
                            binding=bind(form, "vendor_name", |f| &f.vendor_name, |f, v| f.vendor_name = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=submitting
                        >
                            {move || if edit_mode() { "Update Product" } else { "Add Product" }}
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
                    when=move || !products.offline()
                    fallback=|| view! { <div class="alert alert--warning">"No internet connection. Please check your network."</div> }
                >
                    <Show when=move || products.loading() && products.state.with(|s| !s.loaded)>
                        <Spinner />
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Code"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"Texture"</TableHeaderCell>
                                    <TableHeaderCell>"Length"</TableHeaderCell>
                                    <TableHeaderCell>"Color"</TableHeaderCell>
                                    <TableHeaderCell>"Vendor"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page.get().rows
                                    key=|p| p.id.clone()
                                    children=move |product| {
                                        let for_edit = product.clone();
                                        let for_delete = product.clone();
                                        let vendor = product
                                            .vendor_name
                                            .as_ref()
                                            .map(|v| v.to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{product.product_code.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{product.product_type.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{product.texture.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{product.length.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{product.color.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{vendor}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form.update(|f| f.start_edit(for_edit.id.clone(), ProductForm::from(&for_edit)))
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
