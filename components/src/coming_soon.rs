use leptos::prelude::*;
use tracing::info;

/// Body of a tab whose feature does not exist yet.
#[component]
pub fn ComingSoon(feature: &'static str) -> impl IntoView {
    info!("rendering <ComingSoon/> for {feature}");

    view! {
        <div class="p-6 rounded-lg bg-card text-card-foreground border border-solid border-border">
            <p class="m-0 text-center text-muted-foreground">
                {format!("{feature} functionality coming soon...")}
            </p>
        </div>
    }
}
