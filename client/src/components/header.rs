//! Page title and wallet connect control.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use contracts::Address;
use contracts::units::short_address;
use leptos::prelude::*;

use crate::state::wallet::WalletState;

pub fn connect_label(state: &WalletState) -> &'static str {
    if state.connecting {
        "Connecting..."
    } else if state.provider_available {
        "Connect Wallet"
    } else {
        "No Wallet Found"
    }
}

pub fn identity_label(identity: &Address) -> String {
    short_address(identity, 6, 4)
}

#[component]
pub fn Header(on_connect: Callback<()>) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    view! {
        <header class="page-header">
            <h1>"🎫 Ticket System"</h1>
            <div class="page-header__wallet">
                {move || match wallet.get().identity {
                    Some(identity) => {
                        view! {
                            <span class="page-header__identity" title=identity.to_string()>
                                {identity_label(&identity)}
                            </span>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || wallet.get().connecting || !wallet.get().provider_available
                                on:click=move |_| on_connect.run(())
                            >
                                {move || connect_label(&wallet.get())}
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
