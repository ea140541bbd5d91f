//! Action Handlers
//!
//! The four operations behind the UI: probe/refresh the list, create the
//! list, create a task, complete a task. Each one builds a payload,
//! submits through the wallet, waits for on-chain confirmation and only
//! then touches the view state. Failures are logged and leave the state
//! unchanged apart from the busy flag; the user re-triggers, nothing
//! retries on its own.

use leptos::prelude::*;
use thiserror::Error;

use crate::chain::{ChainClient, ChainError, ResourceLookup};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::contract;
use crate::models::{EntryFunctionPayload, Task};
use crate::store::{
    next_task_id, store_append_task, store_mark_completed, store_replace_tasks, AppStateStoreFields,
    AppStore,
};
use crate::wallet::{self, WalletError};

/// Failure of a submit-and-confirm round trip.
#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

fn log_error(operation: &str, err: &dyn std::error::Error) {
    web_sys::console::error_1(&format!("[APP] {} failed: {}", operation, err).into());
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Sign, submit and block until the chain confirms.
async fn submit_and_wait(
    chain: &ChainClient,
    payload: EntryFunctionPayload,
) -> Result<(), ActionError> {
    let pending = wallet::sign_and_submit(&payload).await?;
    web_sys::console::log_1(&format!("[APP] submitted {}", pending.hash).into());
    chain.wait_for_transaction(&pending.hash).await?;
    Ok(())
}

// ========================
// List Existence Probe
// ========================

/// Read the list resource and, when present, its tasks 1..=counter.
async fn probe_list(
    chain: &ChainClient,
    config: &AppConfig,
    address: &str,
) -> Result<Option<Vec<Task>>, ChainError> {
    let lookup = chain
        .account_resource(address, &contract::list_resource_type(config))
        .await?;
    let resource = match lookup {
        ResourceLookup::Found(resource) => resource,
        ResourceLookup::NotFound => return Ok(None),
    };
    let mut tasks = Vec::with_capacity(resource.task_count() as usize);
    for id in 1..=resource.task_count() {
        let task: Task = chain
            .table_item(&resource.tasks.handle, &contract::task_table_item(config, id))
            .await?;
        tasks.push(task);
    }
    Ok(Some(tasks))
}

/// Rebuild the view state from the chain. Runs on every account change;
/// always replaces the snapshot wholesale, never merges. A probe that is
/// superseded by a newer one drops its result.
pub async fn refresh_list(
    chain: &ChainClient,
    config: &AppConfig,
    ctx: AppContext,
    store: AppStore,
) {
    let epoch = ctx.begin_refresh();
    let outcome = match ctx.account_address() {
        Some(address) => {
            web_sys::console::log_1(&format!("[APP] probing list for {}", address).into());
            probe_list(chain, config, &address).await
        }
        // not connected: nothing on chain to show
        None => Ok(None),
    };
    if !ctx.is_current(epoch) {
        web_sys::console::log_1(&"[APP] dropping superseded list probe".into());
        return;
    }
    match outcome {
        Ok(Some(tasks)) => {
            store.account_has_list().set(true);
            store_replace_tasks(&store, tasks);
        }
        Ok(None) => {
            store.account_has_list().set(false);
            store_replace_tasks(&store, Vec::new());
        }
        Err(err) => {
            log_error("list probe", &err);
            store.account_has_list().set(false);
            store_replace_tasks(&store, Vec::new());
        }
    }
}

// ========================
// Create List
// ========================

pub async fn create_list(chain: &ChainClient, config: &AppConfig, ctx: AppContext, store: AppStore) {
    if ctx.account_address().is_none() {
        return;
    }
    store.transaction_pending().set(true);
    match submit_and_wait(chain, contract::create_list(config)).await {
        Ok(()) => store.account_has_list().set(true),
        Err(err) => {
            log_error("create list", &err);
            store.account_has_list().set(false);
        }
    }
    store.transaction_pending().set(false);
}

// ========================
// Create Task
// ========================

pub async fn create_task(chain: &ChainClient, config: &AppConfig, ctx: AppContext, store: AppStore) {
    let Some(address) = ctx.account_address() else {
        return;
    };
    let draft = store.new_task_draft().get_untracked();
    if draft.is_empty() {
        alert("Task cannot be empty");
        return;
    }
    store.transaction_pending().set(true);
    let task_id = store.tasks().with_untracked(|tasks| next_task_id(tasks));
    match submit_and_wait(chain, contract::create_task(config, &draft)).await {
        Ok(()) => {
            // authoritative on chain now; mirror it locally
            store_append_task(
                &store,
                Task {
                    address,
                    completed: false,
                    content: draft,
                    task_id: task_id.to_string(),
                },
            );
            store.new_task_draft().set(String::new());
        }
        Err(err) => log_error("create task", &err),
    }
    store.transaction_pending().set(false);
}

// ========================
// Complete Task
// ========================

pub async fn complete_task(
    chain: &ChainClient,
    config: &AppConfig,
    ctx: AppContext,
    store: AppStore,
    task_id: String,
    completed: bool,
) {
    if ctx.account_address().is_none() {
        return;
    }
    store.transaction_pending().set(true);
    match submit_and_wait(chain, contract::complete_task(config, &task_id)).await {
        Ok(()) => store_mark_completed(&store, &task_id, completed),
        Err(err) => log_error("complete task", &err),
    }
    store.transaction_pending().set(false);
}
