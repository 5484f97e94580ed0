//! Browser connectivity flag (`navigator.onLine` plus `online`/`offline` events)

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
pub struct OnlineStatus {
    pub online: RwSignal<bool>,
}

impl OnlineStatus {
    /// Reads the current state and subscribes to changes for the lifetime of the app
    pub fn new() -> Self {
        let initial = web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true);
        let online = RwSignal::new(initial);

        if let Some(window) = web_sys::window() {
            for (event, value) in [("online", true), ("offline", false)] {
                let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    log::info!("Connectivity changed: online={}", value);
                    online.set(value);
                }) as Box<dyn FnMut(_)>);
                let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        Self { online }
    }
}

impl Default for OnlineStatus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_online() -> OnlineStatus {
    expect_context::<OnlineStatus>()
}
