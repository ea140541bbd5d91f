//! Task Entry Form Component
//!
//! Draft input and submit button for new tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::chain::ChainClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for adding a task to the connected account's list
#[component]
pub fn TaskEntryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let chain = expect_context::<ChainClient>();
    let config = expect_context::<AppConfig>();
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let chain = chain.clone();
        let config = config.clone();
        spawn_local(async move {
            actions::create_task(&chain, &config, ctx, store).await;
        });
    };

    view! {
        <form class="task-entry" on:submit=submit>
            <input
                type="text"
                placeholder="Add a Task"
                prop:value=move || store.new_task_draft().get()
                on:input=move |ev| store.new_task_draft().set(event_target_value(&ev))
            />
            <button type="submit" class="primary">"Add"</button>
        </form>
    }
}
