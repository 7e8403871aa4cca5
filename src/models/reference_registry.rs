use crate::models::TrackedSecurity;
use crate::types::{IndexName, TickerSymbol, TickerSymbolSet};
use crate::utils::is_valid_ticker_symbol;
use crate::Error;
use log::info;
use std::collections::{BTreeMap, BTreeSet};

/// The fixed universe of tracked securities, indexed by ticker symbol.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct ReferenceRegistry {
    securities: BTreeMap<TickerSymbol, TrackedSecurity>,
}

impl ReferenceRegistry {
    /// Registers the given securities.
    ///
    /// Fails on the first malformed or duplicate ticker symbol.
    pub fn new(securities: &[TrackedSecurity]) -> Result<Self, Error> {
        info!("Registering {} tracked securities...", securities.len());

        let mut registered = BTreeMap::new();

        for security in securities {
            let ticker_symbol = security.ticker_symbol.trim().to_uppercase();

            if !is_valid_ticker_symbol(&ticker_symbol) {
                return Err(Error::InvalidTickerSymbol(security.ticker_symbol.clone()));
            }

            if registered.contains_key(&ticker_symbol) {
                return Err(Error::DuplicateTickerSymbol(ticker_symbol));
            }

            registered.insert(
                ticker_symbol.clone(),
                TrackedSecurity {
                    ticker_symbol,
                    ..security.clone()
                },
            );
        }

        Ok(ReferenceRegistry {
            securities: registered,
        })
    }

    /// Case-insensitive exact match against the tracked universe.
    pub fn is_tracked(&self, ticker_symbol: &str) -> bool {
        self.securities
            .contains_key(&ticker_symbol.trim().to_uppercase())
    }

    pub fn all_tickers(&self) -> TickerSymbolSet {
        self.securities.keys().cloned().collect()
    }

    pub fn get(&self, ticker_symbol: &str) -> Option<&TrackedSecurity> {
        self.securities.get(&ticker_symbol.trim().to_uppercase())
    }

    /// Iterates the tracked securities in ticker symbol order.
    pub fn securities(&self) -> impl Iterator<Item = &TrackedSecurity> {
        self.securities.values()
    }

    pub fn securities_by_index(&self, index_name: &str) -> Vec<&TrackedSecurity> {
        self.securities
            .values()
            .filter(|security| security.indices.contains(index_name))
            .collect()
    }

    /// All index names referenced by any tracked security.
    pub fn indices(&self) -> BTreeSet<IndexName> {
        self.securities
            .values()
            .flat_map(|security| security.indices.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_securities() -> Vec<TrackedSecurity> {
        vec![
            TrackedSecurity::new("AAPL", "Apple Inc.", ["NASDAQ-100", "Dow Jones"]),
            TrackedSecurity::new("fn", "Fabrinet", ["NYSE"]),
            TrackedSecurity::new("IBM", "IBM Corporation", ["Dow Jones"]),
        ]
    }

    #[test]
    fn test_is_tracked_is_case_insensitive() {
        let registry = ReferenceRegistry::new(&sample_securities()).unwrap();

        assert!(registry.is_tracked("AAPL"));
        assert!(registry.is_tracked("aapl"));
        assert!(registry.is_tracked("FN"));
        assert!(!registry.is_tracked("MSFT"));
    }

    #[test]
    fn test_all_tickers_are_sorted() {
        let registry = ReferenceRegistry::new(&sample_securities()).unwrap();

        let tickers: Vec<_> = registry.all_tickers().into_iter().collect();
        assert_eq!(tickers, vec!["AAPL", "FN", "IBM"]);
    }

    #[test]
    fn test_duplicate_ticker_fails() {
        let mut securities = sample_securities();
        securities.push(TrackedSecurity::new("aapl", "Apple Duplicate", Vec::<String>::new()));

        match ReferenceRegistry::new(&securities) {
            Err(Error::DuplicateTickerSymbol(ticker_symbol)) => assert_eq!(ticker_symbol, "AAPL"),
            other => panic!("Expected duplicate ticker error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_ticker_fails() {
        let securities = vec![TrackedSecurity::new("BRK.B", "Berkshire", Vec::<String>::new())];

        assert!(matches!(
            ReferenceRegistry::new(&securities),
            Err(Error::InvalidTickerSymbol(_))
        ));
    }

    #[test]
    fn test_index_lookups() {
        let registry = ReferenceRegistry::new(&sample_securities()).unwrap();

        let dow: Vec<_> = registry
            .securities_by_index("Dow Jones")
            .iter()
            .map(|security| security.ticker_symbol.as_str())
            .collect();
        assert_eq!(dow, vec!["AAPL", "IBM"]);

        let indices: Vec<_> = registry.indices().into_iter().collect();
        assert_eq!(indices, vec!["Dow Jones", "NASDAQ-100", "NYSE"]);
    }
}
