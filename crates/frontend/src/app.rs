use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::components::notification_bar::NotificationBar;
use crate::shared::notification::NotificationService;
use crate::shared::online::OnlineStatus;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(AuthContext::new());
    provide_context(NotificationService::new());
    provide_context(OnlineStatus::new());

    view! {
        <ConfigProvider>
            <NotificationBar />
            <AppRoutes />
        </ConfigProvider>
    }
}
