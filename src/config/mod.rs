use serde::{Deserialize, Serialize};

use crate::ledger::SortOrder;

/// Display and session preferences supplied by the embedding UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    /// Display currency code; the tracker is single-currency.
    pub currency: String,
    pub default_sort_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_sort_order: SortOrder::Descending,
        }
    }
}
