use leptos::prelude::*;

// A button for something the prototype doesn't do yet. It stays disabled and shows a "soon"
// tooltip on hover.
#[component]
pub fn SoonButton(
    #[prop(into)] title: String,
    #[prop(optional, into)] button_class: String,
    #[prop(optional, into)] wrapper_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("group relative inline-flex {wrapper_class}")>
            <button
                type="button"
                disabled
                title=title
                class=format!("!opacity-75 disabled:cursor-not-allowed {button_class}")
            >
                {children()}
            </button>
            <div class="w-[60px] text-center absolute bottom-full left-1/2 -translate-x-1/2 mb-2 px-2 py-1 z-50
            invisible group-hover:visible opacity-0 group-hover:opacity-100 transition-opacity duration-100 ease-in
            border border-solid border-border
            bg-popover text-popover-foreground text-xs font-semibold rounded-md whitespace-nowrap">
                "soon"
            </div>
        </div>
    }
}
