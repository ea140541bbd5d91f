//! Wallet Bar Component
//!
//! Header with the app title and the connect/disconnect control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::address;
use crate::context::AppContext;
use crate::wallet;

/// Header bar with wallet connection state
#[component]
pub fn WalletBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let connect = move |_| {
        spawn_local(async move {
            match wallet::connect_wallet().await {
                Ok(account) => ctx.set_account(Some(account)),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] wallet connect failed: {}", err).into(),
                    );
                }
            }
        });
    };

    let disconnect = move |_| {
        spawn_local(async move {
            if let Err(err) = wallet::disconnect_wallet().await {
                web_sys::console::error_1(
                    &format!("[APP] wallet disconnect failed: {}", err).into(),
                );
            }
            ctx.set_account(None);
        });
    };

    view! {
        <header class="wallet-bar">
            <h1>"Aptos ToDo list"</h1>
            {move || match ctx.account.get() {
                Some(account) => view! {
                    <div class="wallet-connected">
                        <span class="wallet-address" title=account.address.clone()>
                            {address::short(&account.address)}
                        </span>
                        <button class="wallet-btn" on:click=disconnect>"Disconnect"</button>
                    </div>
                }.into_any(),
                None => view! {
                    <button class="wallet-btn primary" on:click=connect>"Connect Wallet"</button>
                }.into_any(),
            }}
        </header>
    }
}
