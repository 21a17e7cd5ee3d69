use dlmm_core::{Side, SwapForm, SwapFormStoreFields, SwapSideStoreFields, Token};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

/// Owns the swap form for the lifetime of the tab container and is the only thing that mutates
/// it.
///
/// Writes go through the root of the store so one event produces one notification. Reads go
/// through the per-field subfields, which also track writes made to the root.
#[derive(Copy, Clone)]
pub struct SwapController {
    form: Store<SwapForm>,
}

impl SwapController {
    pub fn new(form: SwapForm) -> Self {
        Self {
            form: Store::new(form),
        }
    }

    pub fn reverse(&self) {
        self.form.update(|form| form.reverse());
        debug!("reversed swap direction");
    }

    pub fn select_token(&self, side: Side, token: Token) {
        debug!("selecting {} for {side}", token.symbol);
        self.form.update(|form| form.select_token(side, token));
    }

    pub fn set_amount(&self, side: Side, amount: impl Into<String>) {
        let amount = amount.into();
        debug!("{side} amount set to {amount:?}");
        self.form.update(|form| form.set_amount(side, amount));
    }

    pub fn token(&self, side: Side) -> Token {
        match side {
            Side::Sell => self.form.sell().token().get(),
            Side::Buy => self.form.buy().token().get(),
        }
    }

    pub fn amount(&self, side: Side) -> String {
        match side {
            Side::Sell => self.form.sell().amount().get(),
            Side::Buy => self.form.buy().amount().get(),
        }
    }

    pub fn fiat_value(&self, side: Side) -> String {
        match side {
            Side::Sell => self.form.sell().fiat_value().get(),
            Side::Buy => self.form.buy().fiat_value().get(),
        }
    }

    /// Current form contents, without subscribing the caller.
    pub fn snapshot(&self) -> SwapForm {
        self.form.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlmm_core::{SwapDefaults, SwapSide, TokenCatalog};

    fn catalog() -> TokenCatalog {
        TokenCatalog::new(vec![
            Token::new("ETH", "Ethereum", "Ξ", "3,42,343.564"),
            Token::new("TRUMP", "TRUMP Token", "🇺🇸", "224.32"),
            Token::new("BTC", "Bitcoin", "₿", "12.5"),
        ])
        .unwrap()
    }

    fn controller() -> (Owner, SwapController) {
        let owner = Owner::new();
        owner.set();

        let form = SwapForm::from_catalog(&catalog(), &SwapDefaults::default()).unwrap();
        (owner, SwapController::new(form))
    }

    #[test]
    fn reverse_swaps_all_three_pairs() {
        let (_owner, controller) = controller();
        controller.reverse();

        let form = controller.snapshot();
        assert_eq!(form.sell.token.symbol, "TRUMP");
        assert_eq!(form.sell.amount, "3424");
        assert_eq!(form.sell.fiat_value, "26,869.55");
        assert_eq!(form.buy.token.symbol, "ETH");
        assert_eq!(form.buy.amount, "10");
        assert_eq!(form.buy.fiat_value, "26,869.55");
    }

    #[test]
    fn reverse_twice_restores_the_form() {
        let (_owner, controller) = controller();
        let before = controller.snapshot();

        controller.reverse();
        controller.reverse();

        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn select_token_only_changes_the_token() {
        let (_owner, controller) = controller();
        let btc = catalog().get("BTC").cloned().unwrap();

        controller.select_token(Side::Buy, btc.clone());

        let form = controller.snapshot();
        assert_eq!(form.buy, SwapSide::new(btc, "3424", "26,869.55"));
        assert_eq!(form.sell.token.symbol, "ETH");
        assert_eq!(form.sell.amount, "10");
    }

    #[test]
    fn set_amount_accepts_any_text() {
        let (_owner, controller) = controller();
        let before = controller.snapshot();

        controller.set_amount(Side::Sell, "0");
        assert_eq!(controller.snapshot().sell.amount, "0");
        assert_eq!(controller.snapshot().buy, before.buy);

        controller.set_amount(Side::Buy, "abc");
        assert_eq!(controller.snapshot().buy.amount, "abc");
    }

    #[test]
    fn field_reads_follow_the_form() {
        let (_owner, controller) = controller();

        assert_eq!(controller.token(Side::Sell).symbol, "ETH");
        assert_eq!(controller.amount(Side::Buy), "3424");

        controller.reverse();

        assert_eq!(controller.token(Side::Sell).symbol, "TRUMP");
        assert_eq!(controller.amount(Side::Sell), "3424");
        assert_eq!(controller.fiat_value(Side::Buy), "26,869.55");
    }

    #[test]
    fn subfield_reads_rerun_after_reverse() {
        let (_owner, controller) = controller();

        let sell_symbol = Memo::new(move |_| controller.token(Side::Sell).symbol);
        assert_eq!(sell_symbol.get_untracked(), "ETH");

        controller.reverse();
        assert_eq!(sell_symbol.get_untracked(), "TRUMP");
    }
}
