use leptos::prelude::*;

/// Product type select fed by the types present in the loaded collection.
///
/// `options` already starts with "All".
#[component]
pub fn ProductTypeFilter(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-field">
            <label class="filter-field__label">"Product type"</label>
            <select
                class="filter-field__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|t| {
                            let current = t.clone();
                            view! {
                                <option value=t.clone() selected=move || value.get() == current>
                                    {t.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
