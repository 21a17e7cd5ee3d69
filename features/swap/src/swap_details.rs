use dlmm_core::TransactionDetails;
use leptos::prelude::*;
use lucide_leptos::{ChevronDown, Clock, Pencil, Zap};
use tracing::info;

#[component]
pub fn SwapDetails(details: TransactionDetails) -> impl IntoView {
    info!("rendering <SwapDetails/>");

    let TransactionDetails {
        route,
        minimum_received,
        rate,
        network_fee,
    } = details;

    view! {
        <div class="mt-6 pt-4 border-0 border-t border-solid border-border space-y-3">
            <div class="flex items-center justify-between">
                <DetailLabel label="Route" />
                <div class="h-6 px-2 py-1 flex items-center gap-1 text-xs rounded-md bg-accent text-accent-foreground">
                    <Zap size=12 />
                    {route.name}
                    <span class="text-muted-foreground">{format!("- {}", route.eta)}</span>
                    <ChevronDown size=12 />
                </div>
            </div>

            <div class="flex items-center justify-between">
                <DetailLabel label="Minimum Received" />
                <EstimateValue value=minimum_received />
            </div>

            <div class="flex items-center justify-between">
                <DetailLabel label="Rate" />
                <EstimateValue value=rate />
            </div>

            <div class="flex items-center justify-between">
                <DetailLabel label="Network Fee" />
                <span class="text-sm text-muted-foreground">{network_fee}</span>
            </div>
        </div>
    }
}

#[component]
fn DetailLabel(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span class="text-sm text-muted-foreground">{label}</span>
            <div class="w-1 h-1 rounded-full bg-muted-foreground"></div>
        </div>
    }
}

#[component]
fn EstimateValue(value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1 text-sm text-muted-foreground">
            <Clock size=12 />
            <span>{value}</span>
            <Pencil size=12 />
        </div>
    }
}
