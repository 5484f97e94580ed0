mod state;

use contracts::domain::a001_store::aggregate::{Store, StoreForm, StoreType};
use contracts::shared::form::SubmitKind;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_store::api;
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
pub fn StoreList() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let stores = CollectionResource::<Store>::new();
    let view_state = create_state();
    let form = create_form();

    let load_data = move || {
        let gateway = auth.gateway();
        stores.load(online.online.get_untracked(), "stores", move || async move {
            api::fetch_stores(&gateway).await
        });
    };

    // initial load, and again when the connection comes back
    Effect::new(move |_| {
        online.online.track();
        load_data();
    });

    let page = Memo::new(move |_| view_state.with(|v| v.page_of(stores.items())));
    keep_page_in_range(view_state, move || page.with(|p| p.total_pages));

    let on_submit = move || {
        let gateway = auth.gateway();
        submit_form(
            form,
            notifications,
            "Store saved successfully",
            "Failed to save store",
            move |submission| async move {
                match submission.kind {
                    SubmitKind::Create => api::create_store(&gateway, &submission.payload).await,
                    SubmitKind::Update(id) => {
                        api::update_store(&gateway, &id, &submission.payload).await
                    }
                }
            },
            move || load_data(),
        );
    };

    let on_delete = move |store: Store| {
        let gateway = auth.gateway();
        confirm_delete(
            notifications,
            "Are you sure you want to delete this store?",
            "store",
            move || async move { api::delete_store(&gateway, &store.id).await },
            move || load_data(),
        );
    };

    let store_type_options = Signal::derive(|| {
        StoreType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let edit_mode = move || form.with(|f| f.is_edit_mode());

    view! {
        <PageFrame page_id="a001_store--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stores"</h1>
                    <Badge>{move || stores.state.with(|s| s.items.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || stores.loading())
                    >
                        {icon("refresh")}
                        {move || if stores.loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || stores.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form-card">
                    <h2 class="form-card__title">
                        {move || if edit_mode() { "Edit Store" } else { "Add Store" }}
                    </h2>
                    <div class="form__row">
                        <TextField
                            label="Store code"
                            binding=bind(form, "store_code", |f| &f.store_code, |f, v| f.store_code = v)
                            disabled=submitting
                        />
                        <SelectField
                            label="Store type"
                            binding=bind(form, "store_type", |f| &f.store_type, |f, v| f.store_type = v)
                            options=store_type_options
                            disabled=submitting
                        />
                        <TextField
                            label="Store name"
                            binding=bind(form, "store_name", |f| &f.store_name, |f, v| f.store_name = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=submitting
                        >
                            {move || if edit_mode() { "Update Store" } else { "Add Store" }}
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
                    when=move || !stores.offline()
                    fallback=|| view! { <div class="alert alert--warning">"No internet connection. Please check your network."</div> }
                >
                    <Show when=move || stores.loading() && stores.state.with(|s| !s.loaded)>
                        <Spinner />
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Code"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page.get().rows
                                    key=|s| s.id.clone()
                                    children=move |store| {
                                        let for_edit = store.clone();
                                        let for_delete = store.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{store.store_code.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{store.store_type.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{store.store_name.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form.update(|f| f.start_edit(for_edit.id.clone(), StoreForm::from(&for_edit)))
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
