use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use leptos::prelude::*;

/// Renders the single global notification, if any
#[component]
pub fn NotificationBar() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        {move || {
            notifications.slot.with(|slot| slot.current().cloned()).map(|n| {
                view! {
                    <div class=format!("{} notification-bar", n.severity.css_class()) role="alert">
                        <span class="notification-bar__message">{n.message.clone()}</span>
                        <button
                            class="notification-bar__close"
                            title="Dismiss"
                            on:click=move |_| notifications.dismiss()
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
