use serde::{Deserialize, Serialize};

/// One entry of the token catalog.
///
/// `balance` is already formatted for display and is never parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub icon: String,
    pub balance: String,
}

impl Token {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            icon: icon.into(),
            balance: balance.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}
