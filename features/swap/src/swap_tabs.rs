use crate::SwapController;
use dlmm_core::{SwapDefaults, SwapForm, TokenCatalog, BASE_URL};
use leptos::{either::Either, prelude::*};
use leptos_router::{components::A, nested_router::Outlet};
use tracing::{error, info};

const TAB_CLASS: &str = "w-full py-1.5 px-3 rounded-sm text-center no-underline leading-none
    text-muted-foreground aria-[current=page]:bg-background aria-[current=page]:text-foreground";

/// Swap / Send / Buy tab bar.
///
/// The swap form is created here rather than in `<Swap/>` so it survives switching to another
/// tab and back.
#[component]
pub fn SwapTabs() -> impl IntoView {
    info!("rendering <SwapTabs/>");

    on_cleanup(move || {
        info!("cleaning up <SwapTabs/>");
    });

    let catalog = use_context::<TokenCatalog>().expect("token catalog context missing!");

    let form = match SwapForm::from_catalog(&catalog, &SwapDefaults::default()) {
        Ok(form) => form,
        Err(error) => {
            error!("{error}");
            return Either::Right(view! {
                <div class="p-6 rounded-lg bg-card text-red-500 border border-solid border-border">
                    {error.to_string()}
                </div>
            });
        }
    };

    provide_context(SwapController::new(form));

    Either::Left(view! {
        <div class="w-full max-w-md space-y-4">
            <nav class="grid grid-cols-3 gap-0.5 p-[5px] bg-secondary rounded-md">
                <A href=format!("{BASE_URL}/swap") attr:class=TAB_CLASS>
                    "Swap"
                </A>
                <A href=format!("{BASE_URL}/send") attr:class=TAB_CLASS>
                    "Send"
                </A>
                <A href=format!("{BASE_URL}/buy") attr:class=TAB_CLASS>
                    "Buy"
                </A>
            </nav>
            <Outlet />
        </div>
    })
}
