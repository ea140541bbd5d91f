//! Create List Prompt Component
//!
//! Shown while the connected account has no list resource.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::chain::ChainClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::use_app_store;

/// Single call-to-action for accounts without a list
#[component]
pub fn CreateListPrompt() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let chain = expect_context::<ChainClient>();
    let config = expect_context::<AppConfig>();
    let store = use_app_store();

    let create = move |_| {
        let chain = chain.clone();
        let config = config.clone();
        spawn_local(async move {
            actions::create_list(&chain, &config, ctx, store).await;
        });
    };

    view! {
        <div class="create-list">
            <button class="create-list-btn" on:click=create>"Create new list"</button>
        </div>
    }
}
