use crate::TokenIcon;
use dlmm_core::{Token, TokenCatalog};
use leptos::{ev, html, prelude::*};
use leptos_use::on_click_outside;
use lucide_leptos::{ChevronDown, Wallet};
use tracing::{debug, info};

/// Dropdown for picking one token out of the catalog.
///
/// The chosen token is handed to `on_select` by value. The selector never changes its own
/// `selected` signal; the owner of the form decides what to do with the pick.
#[component]
pub fn TokenSelector(
    #[prop(into)] selected: Signal<Token>,
    catalog: TokenCatalog,
    on_select: impl Fn(Token) + Clone + Send + Sync + 'static,
    #[prop(optional, into)] title: String,
) -> impl IntoView {
    info!("rendering <TokenSelector/>");

    let (open, set_open) = signal(false);

    let selector_ref = NodeRef::<html::Div>::new();

    let _ = on_click_outside(selector_ref, move |_| set_open.set(false));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_open.set(false);
        }
    });

    on_cleanup(move || {
        info!("cleaning up <TokenSelector/>");
        handle.remove()
    });

    let toggle_menu = move |_: ev::MouseEvent| set_open.update(|open| *open = !*open);

    let rows = catalog
        .iter()
        .cloned()
        .map(|token| {
            let on_select = on_select.clone();
            let picked = token.clone();

            view! {
                <li>
                    <button
                        type="button"
                        class="w-full flex items-center gap-3 p-3 border-none bg-transparent cursor-pointer hover:bg-secondary"
                        on:click=move |_| {
                            debug!("picked {}", picked.symbol);
                            on_select(picked.clone());
                            set_open.set(false);
                        }
                    >
                        <TokenIcon icon=token.icon size="w-8 h-8 text-sm" />
                        <div class="flex-1 text-left">
                            <div class="font-medium text-foreground">{token.symbol}</div>
                            <div class="text-sm text-muted-foreground">{token.name}</div>
                        </div>
                        <div class="text-right text-sm text-muted-foreground flex items-center gap-1">
                            <Wallet size=12 />
                            {token.balance}
                        </div>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div node_ref=selector_ref class="relative">
            <button
                type="button"
                title=title
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                class="flex items-center gap-2 p-2 h-auto border-none bg-transparent rounded-md hover:bg-secondary"
                on:click=toggle_menu
            >
                <TokenIcon icon=Signal::derive(move || selected.get().icon) />
                <span class="font-medium text-foreground">{move || selected.get().symbol}</span>
                <ChevronDown size=16 />
            </button>
            <ul
                role="listbox"
                class="absolute left-0 z-50 mt-1 w-56 p-0 list-none overflow-hidden
                bg-popover text-popover-foreground rounded-md border border-solid border-border shadow-md
                transition-opacity duration-100 ease-in"
                class=(["opacity-0", "invisible"], move || !open.get())
                class=(["opacity-100", "visible"], move || open.get())
            >
                {rows}
            </ul>
        </div>
    }
}
