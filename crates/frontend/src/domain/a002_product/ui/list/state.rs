use contracts::domain::a002_product::aggregate::ProductForm;
use contracts::shared::form::FormState;
use contracts::shared::list::ListView;
use leptos::prelude::*;

use crate::shared::config::config;

pub fn create_state() -> RwSignal<ListView> {
    RwSignal::new(ListView::new(config().ui.lookup_page_size))
}

pub fn create_form() -> RwSignal<FormState<ProductForm>> {
    RwSignal::new(FormState::new())
}
