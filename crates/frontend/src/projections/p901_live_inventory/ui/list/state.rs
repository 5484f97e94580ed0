use contracts::projections::p901_live_inventory::dto::LiveInventoryForm;
use contracts::shared::form::FormState;
use contracts::shared::list::ListView;
use leptos::prelude::*;

use crate::shared::config::config;

pub fn create_state() -> RwSignal<ListView> {
    RwSignal::new(ListView::new(config().ui.stock_page_size))
}

pub fn create_form() -> RwSignal<FormState<LiveInventoryForm>> {
    RwSignal::new(FormState::new())
}
