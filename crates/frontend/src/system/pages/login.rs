use contracts::shared::form::FormState;
use contracts::system::auth::{signin_error_message, LoginForm, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::form_field::{bind, TextField};
use crate::shared::notification::use_notifications;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(FormState::<LoginForm>::new());
    let auth = use_auth();
    let notifications = use_notifications();

    // a second trigger while in flight is ignored by begin_submit
    let submit = move || {
        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            match api::signin(&submission.payload).await {
                Ok(response) => {
                    form.update(|f| f.complete_success());
                    auth.login(Session::from(response));
                    notifications.success("Login successful");
                }
                Err(e) => {
                    log::error!("Sign-in failed: {}", e);
                    form.update(|f| f.complete_failure());
                    notifications.error(signin_error_message(&e));
                }
            }
        });
    };

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Stockroom"</h1>
                <h2>"Sign in"</h2>

                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="admin@example.com"
                        binding=bind(form, "email", |f| &f.email, |f, v| f.email = v)
                        disabled=submitting
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        binding=bind(form, "password", |f| &f.password, |f, v| f.password = v)
                        disabled=submitting
                    />

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submitting
                        on_click=move |_| submit()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
