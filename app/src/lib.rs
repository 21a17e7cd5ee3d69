use dlmm_core::{TokenCatalog, BASE_URL, TOKEN_CATALOG};
use dlmm_swap::SwapRoutes;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router_macro::path;
use tracing::{debug, info};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(TOKEN_CATALOG.clone());

    let catalog = use_context::<TokenCatalog>().expect("token catalog context missing!");

    debug!("{} known tokens", catalog.len());
    debug!("{:#?}", catalog.symbols());

    view! {
        <Title text="DLMM Swap" />
        <Router>
            <main class="min-h-screen bg-background p-4 flex items-center justify-center">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=|| view! { <Redirect path=format!("{BASE_URL}/swap") /> } />
                    <SwapRoutes />
                </Routes>
            </main>
        </Router>
    }
}
