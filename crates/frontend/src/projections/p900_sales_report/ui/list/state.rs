use contracts::shared::list::ListView;
use leptos::prelude::*;

use crate::shared::config::config;

pub fn create_state() -> RwSignal<ListView> {
    RwSignal::new(ListView::new(config().ui.report_page_size))
}
