use crate::{Error, Token};
use std::{collections::HashSet, ops::Deref, sync::Arc};
use tracing::debug;

/// The ordered, read-only list of tokens the user can pick from.
///
/// Cheap to clone. Provided once at the root of the app as context; nothing mutates it
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenCatalog(pub Arc<Vec<Token>>);

impl TokenCatalog {
    /// Wraps `tokens`, rejecting an empty list or a repeated symbol.
    pub fn new(tokens: Vec<Token>) -> Result<Self, Error> {
        if tokens.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(token.symbol.as_str()) {
                return Err(Error::DuplicateToken(token.symbol.clone()));
            }
        }

        debug!("{} tokens in catalog", tokens.len());

        Ok(Self(Arc::new(tokens)))
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        Self::new(tokens)
    }

    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.0.iter().find(|token| token.symbol == symbol)
    }

    pub fn symbols(&self) -> Vec<String> {
        self.0.iter().map(|token| token.symbol.clone()).collect()
    }
}

impl Deref for TokenCatalog {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Token]> for TokenCatalog {
    fn as_ref(&self) -> &[Token] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_catalog_order() {
        let catalog = TokenCatalog::new(vec![
            Token::new("SOL", "Solana", "◎", "1,250.0"),
            Token::new("BTC", "Bitcoin", "₿", "12.5"),
        ])
        .unwrap();

        assert_eq!(catalog.symbols(), vec!["SOL", "BTC"]);
        assert_eq!(catalog[0].name, "Solana");
        assert_eq!(catalog.get("BTC").map(|t| t.balance.as_str()), Some("12.5"));
        assert!(catalog.get("ETH").is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(TokenCatalog::new(vec![]), Err(Error::EmptyCatalog));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let result = TokenCatalog::new(vec![
            Token::new("ETH", "Ethereum", "Ξ", "1"),
            Token::new("ETH", "Ether Again", "Ξ", "2"),
        ]);

        assert_eq!(result, Err(Error::DuplicateToken("ETH".to_string())));
    }

    #[test]
    fn parses_json() {
        let json = r#"[
            { "symbol": "ETH", "name": "Ethereum", "icon": "Ξ", "balance": "3,42,343.564" }
        ]"#;

        let catalog = TokenCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0], Token::new("ETH", "Ethereum", "Ξ", "3,42,343.564"));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let result = TokenCatalog::from_json(r#"[{ "symbol": "ETH" }]"#);
        assert!(matches!(result, Err(Error::Serde(_))));
    }
}
