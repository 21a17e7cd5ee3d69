use crate::{state::TokenCatalog, Error, Token};
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which half of the form an input event targets.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Sell,
    Buy,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Sell, Side::Buy];

    pub fn opposite(self) -> Self {
        match self {
            Side::Sell => Side::Buy,
            Side::Buy => Side::Sell,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Sell => write!(f, "SELL"),
            Side::Buy => write!(f, "BUY"),
        }
    }
}

/// One half of the swap form.
///
/// `amount` is whatever the user typed and `fiat_value` is a display string. Neither is
/// derived from the other or from the token.
#[derive(Store, Debug, Clone, PartialEq, Eq)]
pub struct SwapSide {
    pub token: Token,
    pub amount: String,
    pub fiat_value: String,
}

impl SwapSide {
    pub fn new(token: Token, amount: impl Into<String>, fiat_value: impl Into<String>) -> Self {
        Self {
            token,
            amount: amount.into(),
            fiat_value: fiat_value.into(),
        }
    }
}

/// The whole state of the swap widget.
///
/// Every mutation is a plain field assignment. Nothing is recomputed when a token or an amount
/// changes.
#[derive(Store, Debug, Clone, PartialEq, Eq)]
pub struct SwapForm {
    pub sell: SwapSide,
    pub buy: SwapSide,
}

impl SwapForm {
    pub fn new(sell: SwapSide, buy: SwapSide) -> Self {
        Self { sell, buy }
    }

    /// Builds the initial form by looking up the default symbols in `catalog`.
    pub fn from_catalog(catalog: &TokenCatalog, defaults: &SwapDefaults) -> Result<Self, Error> {
        let sell = defaults.sell.resolve(catalog)?;
        let buy = defaults.buy.resolve(catalog)?;

        Ok(Self { sell, buy })
    }

    pub fn side(&self, side: Side) -> &SwapSide {
        match side {
            Side::Sell => &self.sell,
            Side::Buy => &self.buy,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SwapSide {
        match side {
            Side::Sell => &mut self.sell,
            Side::Buy => &mut self.buy,
        }
    }

    /// Exchanges the sell and buy halves: token, amount and fiat value move together.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.sell, &mut self.buy);
        trace!("reversed pair, now {} -> {}", self.sell.token.symbol, self.buy.token.symbol);
    }

    /// Replaces the token on one side. Amount and fiat value on that side are left alone.
    pub fn select_token(&mut self, side: Side, token: Token) {
        self.side_mut(side).token = token;
    }

    /// Stores `amount` verbatim.
    pub fn set_amount(&mut self, side: Side, amount: impl Into<String>) {
        self.side_mut(side).amount = amount.into();
    }
}

/// Initial contents of one side, with the token named by symbol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SideDefaults {
    pub symbol: String,
    pub amount: String,
    pub fiat_value: String,
}

impl SideDefaults {
    pub fn new(
        symbol: impl Into<String>,
        amount: impl Into<String>,
        fiat_value: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount: amount.into(),
            fiat_value: fiat_value.into(),
        }
    }

    fn resolve(&self, catalog: &TokenCatalog) -> Result<SwapSide, Error> {
        let token = catalog
            .get(&self.symbol)
            .cloned()
            .ok_or_else(|| Error::UnknownToken(self.symbol.clone()))?;

        Ok(SwapSide::new(token, &self.amount, &self.fiat_value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SwapDefaults {
    pub sell: SideDefaults,
    pub buy: SideDefaults,
}

impl Default for SwapDefaults {
    fn default() -> Self {
        use crate::constants::defaults::*;

        Self {
            sell: SideDefaults::new(SELL_SYMBOL, SELL_AMOUNT, SELL_FIAT_VALUE),
            buy: SideDefaults::new(BUY_SYMBOL, BUY_AMOUNT, BUY_FIAT_VALUE),
        }
    }
}
