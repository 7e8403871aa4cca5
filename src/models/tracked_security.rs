use crate::types::{CompanyName, IndexName, TickerSymbol};
use std::collections::BTreeSet;

/// A single security in the tracked universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedSecurity {
    pub ticker_symbol: TickerSymbol,
    pub company_name: CompanyName,
    pub indices: BTreeSet<IndexName>,
}

impl TrackedSecurity {
    pub fn new<I, S>(ticker_symbol: &str, company_name: &str, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<IndexName>,
    {
        TrackedSecurity {
            ticker_symbol: ticker_symbol.trim().to_uppercase(),
            company_name: company_name.trim().to_string(),
            indices: indices.into_iter().map(Into::into).collect(),
        }
    }
}
