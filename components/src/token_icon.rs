use leptos::prelude::*;

#[component]
pub fn TokenIcon(
    #[prop(into)] icon: Signal<String>,
    #[prop(default = "w-6 h-6 text-xs")] size: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{size} shrink-0 rounded-full bg-primary text-primary-foreground font-bold flex items-center justify-center",
        )>{move || icon.get()}</div>
    }
}
