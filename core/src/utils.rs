use crate::Token;

/// `"<balance> <symbol>"`, e.g. `"12.5 BTC"`.
pub fn display_balance(token: &Token) -> String {
    format!("{} {}", token.balance, token.symbol)
}

pub fn display_fiat(value: impl AsRef<str>) -> String {
    format!("~ ${}", value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_line() {
        let token = Token::new("BTC", "Bitcoin", "₿", "12.5");
        assert_eq!(display_balance(&token), "12.5 BTC");
    }

    #[test]
    fn fiat_line() {
        assert_eq!(display_fiat("26,869.55"), "~ $26,869.55");
        assert_eq!(display_fiat(""), "~ $");
    }
}
