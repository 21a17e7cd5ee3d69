use crate::constants::placeholders;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub name: String,
    pub eta: String,
}

/// The rows shown under the swap form.
///
/// These are static strings. Nothing here reacts to the selected pair or amounts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetails {
    pub route: RouteSummary,
    pub minimum_received: String,
    pub rate: String,
    pub network_fee: String,
}

impl Default for TransactionDetails {
    fn default() -> Self {
        Self {
            route: RouteSummary {
                name: placeholders::ROUTE.to_string(),
                eta: placeholders::ROUTE_ETA.to_string(),
            },
            minimum_received: placeholders::MINIMUM_RECEIVED.to_string(),
            rate: placeholders::RATE.to_string(),
            network_fee: placeholders::NETWORK_FEE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows() {
        let details = TransactionDetails::default();

        assert_eq!(details.route.name, "Best Rate");
        assert_eq!(details.route.eta, "1 min");
        assert_eq!(details.minimum_received, "~ 1 min");
        assert_eq!(details.rate, "~ 1 min");
        assert_eq!(details.network_fee, "0.000518 SOL ($0.1066)");
    }
}
