mod controller;
mod routes;
mod swap;
mod swap_details;
mod swap_tabs;

pub use controller::SwapController;
pub use routes::SwapRoutes;
pub use swap::Swap;
pub use swap_details::SwapDetails;
pub use swap_tabs::SwapTabs;
