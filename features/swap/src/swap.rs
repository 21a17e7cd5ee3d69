use crate::{SwapController, SwapDetails};
use dlmm_components::{SoonButton, TokenSelector};
use dlmm_core::{
    utils::{display_balance, display_fiat},
    Side, Token, TokenCatalog, TransactionDetails,
};
use leptos::prelude::*;
use lucide_leptos::{ArrowUpDown, RotateCcw, Settings};
use tracing::info;

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let controller = use_context::<SwapController>().expect("swap controller context missing!");
    let catalog = use_context::<TokenCatalog>().expect("token catalog context missing!");

    view! {
        <div class="p-6 rounded-lg shadow-sm bg-card text-card-foreground border border-solid border-border">
            <SwapSection side=Side::Sell controller catalog=catalog.clone() />

            <div class="flex justify-center my-4">
                <button
                    type="button"
                    aria-label="change swap direction"
                    class="inline-flex items-center justify-center h-8 w-8 p-0 rounded-full
                    bg-secondary hover:bg-secondary-hover border border-solid border-border"
                    on:click=move |_| controller.reverse()
                >
                    <ArrowUpDown size=16 />
                </button>
            </div>

            <SwapSection side=Side::Buy controller catalog />

            <SwapDetails details=TransactionDetails::default() />

            <SoonButton
                title="Swap"
                wrapper_class="w-full mt-6"
                button_class="w-full py-3 px-6 bg-primary text-primary-foreground font-medium rounded-md"
            >
                "Swap"
            </SoonButton>
        </div>
    }
}

/// One half of the swap card. The sell half also carries the settings, MAX and refresh buttons.
#[component]
fn SwapSection(side: Side, controller: SwapController, catalog: TokenCatalog) -> impl IntoView {
    let is_sell = side == Side::Sell;
    let input_id = format!("{}-amount", side.to_string().to_lowercase());

    let selected = Signal::derive(move || controller.token(side));

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <label class="text-sm font-medium text-muted-foreground" for=input_id.clone()>
                    {side.to_string()}
                </label>
                {is_sell
                    .then(|| {
                        view! {
                            <SoonButton
                                title="Settings"
                                button_class="h-6 p-1 border-none bg-transparent text-muted-foreground"
                            >
                                <Settings size=16 />
                            </SoonButton>
                        }
                    })}
            </div>

            <div class="flex items-center justify-between gap-4">
                <TokenSelector
                    selected
                    catalog
                    on_select=move |token: Token| controller.select_token(side, token)
                    title=format!("Select {side} token")
                />
                <input
                    id=input_id
                    type="text"
                    inputmode="decimal"
                    placeholder="0"
                    autocomplete="off"
                    class="w-full text-right text-2xl font-bold border-none bg-transparent p-0 h-auto"
                    prop:value=move || controller.amount(side)
                    on:input=move |ev| controller.set_amount(side, event_target_value(&ev))
                />
            </div>

            <div class="flex items-center justify-between text-sm">
                <div class="flex items-center gap-1 text-muted-foreground">
                    <span>"💰"</span>
                    <span>{move || display_balance(&selected.get())}</span>
                </div>
                <div class="flex items-center gap-2">
                    {is_sell
                        .then(|| {
                            view! {
                                <SoonButton
                                    title="Use maximum balance"
                                    button_class="h-6 px-2 py-1 text-xs border-none bg-secondary text-foreground rounded-md"
                                >
                                    "MAX"
                                </SoonButton>
                            }
                        })}
                    <span class="text-muted-foreground">
                        {move || display_fiat(controller.fiat_value(side))}
                    </span>
                    {is_sell
                        .then(|| {
                            view! {
                                <SoonButton
                                    title="Refresh"
                                    button_class="h-6 w-6 p-0 border-none bg-transparent"
                                >
                                    <RotateCcw size=12 />
                                </SoonButton>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
