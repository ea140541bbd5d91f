//! Task List Component
//!
//! Renders the task snapshot: content, completion checkbox and an
//! explorer link for the owning address.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::address;
use crate::chain::ChainClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// List of tasks for the connected account
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let chain = expect_context::<ChainClient>();
    let config = expect_context::<AppConfig>();
    let store = use_app_store();

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                // completed is part of the key so a confirmed completion
                // re-renders its row
                key=|task| (task.task_id.clone(), task.completed)
                children=move |task| {
                    let link = config.explorer_account_url(&task.address);
                    let owner = address::short(&task.address);
                    let completed = task.completed;
                    let task_id = task.task_id.clone();
                    let toggle_chain = chain.clone();
                    let toggle_config = config.clone();

                    let toggle = move |ev: web_sys::Event| {
                        let checked = event_target_checked(&ev);
                        // the box tracks confirmed state only; a successful
                        // completion re-keys the row
                        if let Some(input) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        {
                            input.set_checked(completed);
                        }
                        let chain = toggle_chain.clone();
                        let config = toggle_config.clone();
                        let task_id = task_id.clone();
                        spawn_local(async move {
                            actions::complete_task(&chain, &config, ctx, store, task_id, checked)
                                .await;
                        });
                    };

                    view! {
                        <li class="task-item">
                            <input
                                type="checkbox"
                                checked=completed
                                disabled=completed
                                on:change=toggle
                            />
                            <div class="task-meta">
                                <span class="task-content">{task.content.clone()}</span>
                                <a
                                    class="task-owner"
                                    href=link
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    {owner}
                                </a>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
