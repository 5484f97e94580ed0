use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_labels::TAB_DASHBOARD;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    // Runs once per sign-in
    tabs_store.init_router_integration(TAB_DASHBOARD);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
