//! Submit and delete flows shared by the entity pages

use super::notification::NotificationService;
use contracts::shared::api_error::ApiError;
use contracts::shared::form::{FormModel, FormState, Submission};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Validate the form and, if valid, send it with `send`.
///
/// Success resets the form (or leaves edit mode) and runs `on_success`;
/// failure keeps the typed values and shows `failure_message`.
pub fn submit_form<F, S, Fut>(
    form: RwSignal<FormState<F>>,
    notifications: NotificationService,
    success_message: &'static str,
    failure_message: &'static str,
    send: S,
    on_success: impl FnOnce() + 'static,
) where
    F: FormModel + Send + Sync + 'static,
    F::Payload: 'static,
    S: FnOnce(Submission<F::Payload>) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    submit_form_with(
        form,
        notifications,
        success_message,
        send,
        on_success,
        move |e| notifications.api_error(failure_message, e),
    );
}

/// Same as [`submit_form`], with the failure reported by `on_error`
pub fn submit_form_with<F, S, Fut>(
    form: RwSignal<FormState<F>>,
    notifications: NotificationService,
    success_message: &'static str,
    send: S,
    on_success: impl FnOnce() + 'static,
    on_error: impl FnOnce(&ApiError) + 'static,
) where
    F: FormModel + Send + Sync + 'static,
    F::Payload: 'static,
    S: FnOnce(Submission<F::Payload>) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
        return;
    };

    spawn_local(async move {
        match send(submission).await {
            Ok(()) => {
                log::info!("{}", success_message);
                let _ = form.try_update(|f| f.complete_success());
                notifications.success(success_message);
                on_success();
            }
            Err(e) => {
                let _ = form.try_update(|f| f.complete_failure());
                on_error(&e);
            }
        }
    });
}

/// Browser confirmation dialog; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask for confirmation, then run `delete` and `on_success`
pub fn confirm_delete<D, Fut>(
    notifications: NotificationService,
    prompt: &str,
    entity: &'static str,
    delete: D,
    on_success: impl FnOnce() + 'static,
) where
    D: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    if !confirm(prompt) {
        return;
    }

    spawn_local(async move {
        match delete().await {
            Ok(()) => {
                log::info!("Deleted {}", entity);
                notifications.success(format!("Deleted {}", entity));
                on_success();
            }
            Err(e) => notifications.api_error(&format!("Failed to delete {}", entity), &e),
        }
    });
}
