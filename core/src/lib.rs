pub mod constants;
mod error;
pub mod state;
pub mod types;
pub mod utils;

pub use constants::TOKEN_CATALOG;
pub use error::Error;
pub use state::TokenCatalog;
pub use types::*;

pub const BASE_URL: &str = "/dlmm";
