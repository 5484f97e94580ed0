//! Labelled inputs bound to a field of a [`FormState`]

use contracts::shared::form::{FormModel, FormState};
use leptos::prelude::*;

/// Value, setter and error signal of one form field
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
    pub error: Signal<Option<String>>,
}

pub fn bind<F>(
    form: RwSignal<FormState<F>>,
    field: &'static str,
    get: fn(&F) -> &String,
    set: fn(&mut F, String),
) -> FieldBinding
where
    F: FormModel + Send + Sync + 'static,
{
    FieldBinding {
        value: Signal::derive(move || form.with(|f| get(&f.values).clone())),
        on_input: Callback::new(move |v: String| form.update(|f| set(&mut f.values, v))),
        error: Signal::derive(move || form.with(|f| f.field_error(field))),
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    binding: FieldBinding,
    /// HTML input type, "text" by default
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let value = binding.value;
    let on_input = binding.on_input;

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=binding.error />
        </div>
    }
}

/// Select with a leading empty "-- choose --" option
#[component]
pub fn SelectField(
    label: &'static str,
    binding: FieldBinding,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let value = binding.value;
    let on_input = binding.on_input;
    let placeholder = placeholder.unwrap_or("-- Select --");

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=value
                disabled=disabled
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(v, l)| {
                            let current = v.clone();
                            view! {
                                <option value=v selected=move || value.get() == current>
                                    {l}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=binding.error />
        </div>
    }
}
