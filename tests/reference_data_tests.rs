#[path = "../test_utils/lib.rs"]
mod test_utils;

use test_utils::load_reference_data;
use ticker_resolver::{
    AliasIndex, AliasKind, Error, ReferenceData, ReferenceRegistry, TickerExtractor,
    DEFAULT_EXTRACTOR_CONFIG,
};

const SECURITIES_CSV: &str = "Symbol,Company Name,Indices\n\
    AAPL,Apple Inc.,NASDAQ-100;S&P 500\n\
    MSFT,Microsoft Corporation,NASDAQ-100\n";

const ALIASES_CSV: &str = "Symbol,Alias,Kind\n\
    AAPL,iphone,product\n\
    MSFT,xbox,product\n";

const EXECUTIVES_CSV: &str = "Name,Symbol\n\
    tim cook,AAPL\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_reference_data_is_consistent() {
        let reference_data = load_reference_data();

        let registry = ReferenceRegistry::new(&reference_data.securities).unwrap();
        let alias_index = AliasIndex::build(&registry, &reference_data.manual_aliases).unwrap();

        assert!(registry.is_tracked("aapl"));
        assert!(!registry.is_tracked("ZZZZ"));

        // Every phrase resolves only to tracked tickers
        for entry in alias_index.entries() {
            assert!(!entry.ticker_symbols.is_empty(), "{:?}", entry.phrase);
            for ticker_symbol in &entry.ticker_symbols {
                assert!(registry.is_tracked(ticker_symbol), "{}", ticker_symbol);
            }
        }

        assert!(TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG).is_ok());
    }

    #[test]
    fn test_bundled_person_aliases_are_full_names() {
        let reference_data = load_reference_data();

        // Person aliases are full names; surnames alone go through the executive table
        for manual_alias in &reference_data.manual_aliases {
            if manual_alias.kind == AliasKind::Person {
                assert!(
                    manual_alias.alias.split_whitespace().count() >= 2,
                    "{:?}",
                    manual_alias.alias
                );
            }
        }
    }

    #[cfg(feature = "embed-bytes")]
    #[test]
    fn test_embedded_reference_data_matches_files() {
        assert_eq!(ReferenceData::embedded().unwrap(), load_reference_data());
    }

    #[test]
    fn test_registry_index_lookups() {
        let reference_data =
            ReferenceData::from_csv_strings(SECURITIES_CSV, ALIASES_CSV, EXECUTIVES_CSV).unwrap();
        let registry = ReferenceRegistry::new(&reference_data.securities).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .securities_by_index("S&P 500")
                .iter()
                .map(|security| security.ticker_symbol.as_str())
                .collect::<Vec<_>>(),
            vec!["AAPL"]
        );
        assert_eq!(
            registry.get("msft").map(|security| security.company_name.as_str()),
            Some("Microsoft Corporation")
        );
    }

    #[test]
    fn test_duplicate_ticker_fails_fast() {
        let securities_csv = format!("{}AAPL,Apple Computer,\n", SECURITIES_CSV);
        let reference_data =
            ReferenceData::from_csv_strings(&securities_csv, ALIASES_CSV, EXECUTIVES_CSV).unwrap();

        assert!(matches!(
            TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG),
            Err(Error::DuplicateTickerSymbol(ticker_symbol)) if ticker_symbol == "AAPL"
        ));
    }

    #[test]
    fn test_alias_for_untracked_ticker_fails_fast() {
        let aliases_csv = format!("{}ZZZZ,zed,name\n", ALIASES_CSV);
        let reference_data =
            ReferenceData::from_csv_strings(SECURITIES_CSV, &aliases_csv, EXECUTIVES_CSV).unwrap();

        assert!(matches!(
            TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG),
            Err(Error::UntrackedTickerSymbol { ticker_symbol, .. }) if ticker_symbol == "ZZZZ"
        ));
    }

    #[test]
    fn test_executive_for_untracked_ticker_fails_fast() {
        let executives_csv = format!("{}elon musk,TSLA\n", EXECUTIVES_CSV);
        let reference_data =
            ReferenceData::from_csv_strings(SECURITIES_CSV, ALIASES_CSV, &executives_csv).unwrap();

        assert!(matches!(
            TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG),
            Err(Error::UntrackedTickerSymbol { .. })
        ));
    }

    #[test]
    fn test_malformed_ticker_is_rejected() {
        let securities_csv = format!("{}BRK.B,Berkshire Hathaway,\n", SECURITIES_CSV);
        let reference_data =
            ReferenceData::from_csv_strings(&securities_csv, ALIASES_CSV, EXECUTIVES_CSV).unwrap();

        assert!(matches!(
            ReferenceRegistry::new(&reference_data.securities),
            Err(Error::InvalidTickerSymbol(_))
        ));
    }

    #[test]
    fn test_unknown_alias_kind_is_a_parse_error() {
        let aliases_csv = format!("{}AAPL,apple,fruit\n", ALIASES_CSV);

        assert!(matches!(
            ReferenceData::from_csv_strings(SECURITIES_CSV, &aliases_csv, EXECUTIVES_CSV),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        assert!(matches!(
            ReferenceData::from_csv_strings("Ticker,Name\nAAPL,Apple\n", ALIASES_CSV, EXECUTIVES_CSV),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_custom_reference_data_drives_extraction() {
        let reference_data =
            ReferenceData::from_csv_strings(SECURITIES_CSV, ALIASES_CSV, EXECUTIVES_CSV).unwrap();
        let extractor = TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG).unwrap();

        assert_eq!(
            extractor.extract_tickers_from_text("the new xbox has millions of users"),
            vec!["MSFT"]
        );
        // Not part of this universe
        assert!(extractor.extract_tickers_from_text("$NVDA soared").is_empty());
    }
}
