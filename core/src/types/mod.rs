mod details;
mod swap_form;
mod token;

pub use details::{RouteSummary, TransactionDetails};
pub use swap_form::{
    Side, SideDefaults, SwapDefaults, SwapForm, SwapFormStoreFields, SwapSide,
    SwapSideStoreFields,
};
pub use token::Token;
