//! App Shell
//!
//! Wires config, chain client, store and context together and renders the
//! header plus the conditional list body.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::chain::ChainClient;
use crate::components::{BusySpinner, CreateListPrompt, TaskEntryForm, TaskList, WalletBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::WalletAccount;
use crate::store::{AppState, AppStateStoreFields};
use crate::wallet;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let chain = ChainClient::new(&config);
    let store = Store::new(AppState::default());

    let (account, set_account) = signal(None::<WalletAccount>);
    let (refresh_epoch, set_refresh_epoch) = signal(0u64);
    let ctx = AppContext::new((account, set_account), (refresh_epoch, set_refresh_epoch));

    provide_context(config.clone());
    provide_context(chain.clone());
    provide_context(store);
    provide_context(ctx);

    // Pick up an already-authorized session and follow wallet switches
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(account) = wallet::connected_account().await {
                ctx.set_account(Some(account));
            }
        });
        wallet::subscribe_account_change(move |account| ctx.set_account(account));
    });

    // Full re-probe whenever the connected account changes
    let probe_chain = chain.clone();
    let probe_config = config.clone();
    Effect::new(move |_| {
        let _ = ctx.account.get();
        let chain = probe_chain.clone();
        let config = probe_config.clone();
        spawn_local(async move {
            actions::refresh_list(&chain, &config, ctx, store).await;
        });
    });

    view! {
        <div class="app">
            <WalletBar />
            <BusySpinner>
                <Show
                    when=move || store.account_has_list().get()
                    fallback=|| view! { <CreateListPrompt /> }
                >
                    <main class="list-panel">
                        <TaskEntryForm />
                        <TaskList />
                    </main>
                </Show>
            </BusySpinner>
        </div>
    }
}
