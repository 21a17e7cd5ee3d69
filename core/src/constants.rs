use crate::state::TokenCatalog;
use std::sync::LazyLock;

// The catalog lives next to the other static assets so Trunk can serve it as well.
pub static TOKEN_CATALOG: LazyLock<TokenCatalog> = LazyLock::new(|| {
    let json = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/tokens.json"
    ));
    TokenCatalog::from_json(json).expect("Failed to deserialize token catalog")
});

pub mod defaults {
    pub const SELL_SYMBOL: &str = "ETH";
    pub const SELL_AMOUNT: &str = "10";
    pub const SELL_FIAT_VALUE: &str = "26,869.55";

    pub const BUY_SYMBOL: &str = "TRUMP";
    pub const BUY_AMOUNT: &str = "3424";
    pub const BUY_FIAT_VALUE: &str = "26,869.55";
}

// NOTE: Placeholders. There is no quoting or fee estimation behind these.
pub mod placeholders {
    pub const ROUTE: &str = "Best Rate";
    pub const ROUTE_ETA: &str = "1 min";
    pub const MINIMUM_RECEIVED: &str = "~ 1 min";
    pub const RATE: &str = "~ 1 min";
    pub const NETWORK_FEE: &str = "0.000518 SOL ($0.1066)";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SwapDefaults, SwapForm};

    #[test]
    fn bundled_catalog_loads() {
        assert_eq!(TOKEN_CATALOG.symbols(), vec!["ETH", "TRUMP", "BTC", "SOL"]);
        assert_eq!(TOKEN_CATALOG[1].icon, "🇺🇸");
        assert_eq!(TOKEN_CATALOG[0].balance, "3,42,343.564");
    }

    #[test]
    fn bundled_catalog_has_default_tokens() {
        let form = SwapForm::from_catalog(&TOKEN_CATALOG, &SwapDefaults::default()).unwrap();

        assert_eq!(form.sell.token.symbol, "ETH");
        assert_eq!(form.sell.amount, "10");
        assert_eq!(form.sell.fiat_value, "26,869.55");
        assert_eq!(form.buy.token.symbol, "TRUMP");
        assert_eq!(form.buy.amount, "3424");
        assert_eq!(form.buy.fiat_value, "26,869.55");
    }
}
