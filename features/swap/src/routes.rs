use crate::{Swap, SwapTabs};
use dlmm_components::ComingSoon;
use leptos::prelude::{component, view};
use leptos_router::{
    components::{ParentRoute, Redirect, Route},
    MatchNestedRoutes,
};
use leptos_router_macro::path;

#[component]
pub fn SwapRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("/dlmm") view=SwapTabs>
            <Route path=path!("") view=|| view! { <Redirect path="swap" /> } />
            <Route path=path!("swap") view=Swap />
            <Route path=path!("send") view=|| view! { <ComingSoon feature="Send" /> } />
            <Route path=path!("buy") view=|| view! { <ComingSoon feature="Buy" /> } />
        </ParentRoute>
    }
    .into_inner()
}
