use contracts::domain::a001_store::aggregate::StoreForm;
use contracts::shared::form::FormState;
use contracts::shared::list::ListView;
use leptos::prelude::*;

use crate::shared::config::config;

pub fn create_state() -> RwSignal<ListView> {
    RwSignal::new(ListView::new(config().ui.lookup_page_size))
}

pub fn create_form() -> RwSignal<FormState<StoreForm>> {
    RwSignal::new(FormState::new())
}
