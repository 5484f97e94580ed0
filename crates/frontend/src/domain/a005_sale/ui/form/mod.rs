use contracts::domain::a004_stock_item::aggregate::StockItem;
use contracts::domain::a005_sale::aggregate::{sale_error_notification, SaleForm, SaleMode};
use contracts::shared::form::FormState;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_stock_item::api as stock_api;
use crate::domain::a005_sale::api;
use crate::shared::components::form_field::{bind, FieldBinding, SelectField, TextField};
use crate::shared::date_utils::today;
use crate::shared::fetcher::CollectionResource;
use crate::shared::icons::icon;
use crate::shared::mutation::submit_form_with;
use crate::shared::notification::use_notifications;
use crate::shared::online::use_online;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

fn fresh_form() -> FormState<SaleForm> {
    FormState {
        values: SaleForm::for_date(today()),
        ..FormState::new()
    }
}

#[component]
pub fn AddSalePage() -> impl IntoView {
    let auth = use_auth();
    let online = use_online();
    let notifications = use_notifications();

    let stock = CollectionResource::<StockItem>::new();
    let form = RwSignal::new(fresh_form());

    let load_stock = move || {
        let gateway = auth.gateway();
        stock.load(online.online.get_untracked(), "stock items", move || async move {
            stock_api::fetch_stock_items(&gateway).await
        });
    };

    Effect::new(move |_| {
        online.online.track();
        load_stock();
    });

    let stock_options = Signal::derive(move || {
        stock
            .items()
            .iter()
            .map(|i| (i.item_id.to_string(), i.option_label()))
            .collect::<Vec<_>>()
    });

    // picking an item copies its product fields and price into the form
    let stock_binding = FieldBinding {
        value: Signal::derive(move || form.with(|f| f.values.item_id.clone())),
        on_input: Callback::new(move |item_id: String| {
            let items = stock.items();
            form.update(|f| {
                f.values.select_stock_item(&items, &item_id);
            });
        }),
        error: Signal::derive(move || form.with(|f| f.field_error("item_id"))),
    };

    let on_submit = move || {
        let gateway = auth.gateway();
        submit_form_with(
            form,
            notifications,
            "Sale recorded successfully",
            move |submission| async move { api::create_sale(&gateway, &submission.payload).await },
            move || {
                form.set(fresh_form());
                load_stock();
            },
            move |e| {
                log::error!("Failed to record sale: {}", e);
                let (message, severity) = sale_error_notification(e);
                notifications.show(message, severity);
            },
        );
    };

    let mode = move || form.with(|f| f.values.mode);
    let set_mode = move |m: SaleMode| form.update(|f| f.values.set_mode(m));
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let read_only = Signal::derive(move || {
        submitting.get() || form.with(|f| f.values.product_fields_read_only())
    });

    view! {
        <PageFrame page_id="a005_sale--form" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add Sale"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=move || if mode() == SaleMode::Catalog { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        on_click=move |_| set_mode(SaleMode::Catalog)
                        disabled=submitting
                    >
                        "From stock"
                    </Button>
                    <Button
                        appearance=move || if mode() == SaleMode::Manual { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        on_click=move |_| set_mode(SaleMode::Manual)
                        disabled=submitting
                    >
                        "Manual price"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || stock.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || stock.offline() && mode() == SaleMode::Catalog>
                    <div class="alert alert--warning">"No internet connection. Please check your network."</div>
                </Show>

                <form
                    class="form-card"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <Show when=move || mode() == SaleMode::Catalog>
                        <div class="form__row">
                            <SelectField
                                label="Stock item"
                                binding=stock_binding
                                options=stock_options
                                placeholder="-- Select an item --"
                                disabled=submitting
                            />
                            <Show when=move || stock.loading()>
                                <Spinner />
                            </Show>
                        </div>
                    </Show>
                    <div class="form__row">
                        <TextField
                            label="Product type"
                            binding=bind(form, "product_type", |f| &f.product_type, |f, v| f.product_type = v)
                            disabled=read_only
                        />
                        <TextField
                            label="Texture"
                            binding=bind(form, "texture", |f| &f.texture, |f, v| f.texture = v)
                            disabled=read_only
                        />
                        <TextField
                            label="Length"
                            binding=bind(form, "length", |f| &f.length, |f, v| f.length = v)
                            disabled=read_only
                        />
                        <TextField
                            label="Color"
                            binding=bind(form, "color", |f| &f.color, |f, v| f.color = v)
                            disabled=read_only
                        />
                    </div>
                    <div class="form__row">
                        <Show
                            when=move || mode() == SaleMode::Catalog
                            fallback=move || view! {
                                <TextField
                                    label="Price per unit"
                                    input_type="number"
                                    binding=bind(form, "price_per_unit", |f| &f.price_per_unit, |f, v| f.price_per_unit = v)
                                    disabled=submitting
                                />
                            }
                        >
                            <TextField
                                label="Unit price"
                                input_type="number"
                                binding=bind(form, "unit_price", |f| &f.unit_price, |f, v| f.unit_price = v)
                                disabled=read_only
                            />
                        </Show>
                        <TextField
                            label="Unit"
                            binding=bind(form, "quantity_unit", |f| &f.quantity_unit, |f, v| f.quantity_unit = v)
                            disabled=read_only
                        />
                        <TextField
                            label="Quantity sold"
                            input_type="number"
                            binding=bind(form, "quantity_sold", |f| &f.quantity_sold, |f, v| f.quantity_sold = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__row">
                        <TextField
                            label="Customer name"
                            binding=bind(form, "customer_name", |f| &f.customer_name, |f, v| f.customer_name = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Payment method"
                            binding=bind(form, "payment_method", |f| &f.payment_method, |f, v| f.payment_method = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Sale date"
                            input_type="date"
                            binding=bind(form, "sale_date", |f| &f.sale_date, |f, v| f.sale_date = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=submitting
                        >
                            {icon("sales")}
                            {move || if submitting.get() { " Saving..." } else { " Submit" }}
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
