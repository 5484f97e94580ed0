//! Application top bar: sidebar toggle, title, user name and logout

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    let notifications = use_notifications();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        ctx.close_all();
        notifications.dismiss();
        auth.logout();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Stockroom"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{move || auth.user_name()}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
