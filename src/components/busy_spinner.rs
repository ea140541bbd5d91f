//! Busy Spinner Component
//!
//! Blocking overlay shown while a transaction is in flight.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Wraps content and overlays a spinner while a transaction is pending
#[component]
pub fn BusySpinner(children: Children) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="busy-scope">
            <Show when=move || store.transaction_pending().get()>
                <div class="busy-overlay">
                    <div class="busy-spinner"></div>
                </div>
            </Show>
            {children()}
        </div>
    }
}
