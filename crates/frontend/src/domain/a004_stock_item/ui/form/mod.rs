use contracts::domain::a004_stock_item::aggregate::StockItemForm;
use contracts::shared::form::FormState;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_stock_item::api;
use crate::shared::components::form_field::{bind, TextField};
use crate::shared::date_utils::today;
use crate::shared::mutation::submit_form;
use crate::shared::notification::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

#[component]
pub fn AddStockPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let form = RwSignal::new(FormState {
        values: StockItemForm::for_date(today()),
        ..FormState::new()
    });

    let on_submit = move || {
        let gateway = auth.gateway();
        submit_form(
            form,
            notifications,
            "Stock added successfully",
            "Failed to add stock",
            move |submission| async move {
                api::create_stock_item(&gateway, &submission.payload).await
            },
            move || form.update(|f| f.values = StockItemForm::for_date(today())),
        );
    };

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    view! {
        <PageFrame page_id="a004_stock_item--form" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add Stock"</h1>
                </div>
            </div>

            <div class="page__content">
                <form
                    class="form-card"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <div class="form__row">
                        <TextField
                            label="Product type"
                            binding=bind(form, "product_type", |f| &f.product_type, |f, v| f.product_type = v)
                            placeholder="Wig, Bundle, Closure..."
                            disabled=submitting
                        />
                        <TextField
                            label="Texture"
                            binding=bind(form, "texture", |f| &f.texture, |f, v| f.texture = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Length (inches)"
                            input_type="number"
                            binding=bind(form, "length", |f| &f.length, |f, v| f.length = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Color"
                            binding=bind(form, "color", |f| &f.color, |f, v| f.color = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__row">
                        <TextField
                            label="Quantity"
                            input_type="number"
                            binding=bind(form, "quantity_added", |f| &f.quantity_added, |f, v| f.quantity_added = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Unit"
                            binding=bind(form, "quantity_unit", |f| &f.quantity_unit, |f, v| f.quantity_unit = v)
                            placeholder="pcs"
                            disabled=submitting
                        />
                        <TextField
                            label="Unit price"
                            input_type="number"
                            binding=bind(form, "unit_price", |f| &f.unit_price, |f, v| f.unit_price = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__row">
                        <TextField
                            label="Purchase price"
                            input_type="number"
                            binding=bind(form, "purchaseprice", |f| &f.purchaseprice, |f, v| f.purchaseprice = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Shipping cost"
                            input_type="number"
                            binding=bind(form, "shippingcost", |f| &f.shippingcost, |f, v| f.shippingcost = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Vendor"
                            binding=bind(form, "vendor_name", |f| &f.vendor_name, |f, v| f.vendor_name = v)
                            disabled=submitting
                        />
                        <TextField
                            label="Added date"
                            input_type="date"
                            binding=bind(form, "added_date", |f| &f.added_date, |f, v| f.added_date = v)
                            disabled=submitting
                        />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=submitting
                        >
                            {move || if submitting.get() { "Saving..." } else { "Add Stock" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.set(FormState {
                                values: StockItemForm::for_date(today()),
                                ..FormState::new()
                            })
                            disabled=submitting
                        >
                            "Clear"
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
