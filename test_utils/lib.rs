use std::{fs, path::Path};
use ticker_resolver::{
    ExtractorConfig, ReferenceData, TickerExtractor, TickerSymbol, DEFAULT_EXTRACTOR_CONFIG,
};

#[path = "../shared/constants.rs"]
pub mod constants;
use constants::{
    EXECUTIVES_CSV_FILE_PATH, MANUAL_ALIASES_CSV_FILE_PATH, TRACKED_SECURITIES_CSV_FILE_PATH,
};

/// Loads the reference data straight from the CSV files under `data/`, so
/// tests do not depend on the `embed-bytes` feature.
pub fn load_reference_data() -> ReferenceData {
    let securities_csv = fs::read_to_string(TRACKED_SECURITIES_CSV_FILE_PATH.as_path())
        .expect("Failed to read tracked securities");
    let manual_aliases_csv = fs::read_to_string(MANUAL_ALIASES_CSV_FILE_PATH.as_path())
        .expect("Failed to read manual aliases");
    let executives_csv = fs::read_to_string(EXECUTIVES_CSV_FILE_PATH.as_path())
        .expect("Failed to read executives");

    ReferenceData::from_csv_strings(&securities_csv, &manual_aliases_csv, &executives_csv)
        .expect("Failed to parse reference data")
}

pub fn build_extractor() -> TickerExtractor {
    build_extractor_with_config(DEFAULT_EXTRACTOR_CONFIG)
}

pub fn build_extractor_with_config(config: ExtractorConfig) -> TickerExtractor {
    TickerExtractor::new(&load_reference_data(), config).expect("Failed to build extractor")
}

// Helper function to get the expected tickers from the text file
pub fn get_expected_tickers(file_path: &Path) -> Vec<TickerSymbol> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Extract tickers from lines starting with EXPECTED:
    let mut expected_tickers: Vec<TickerSymbol> = content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:")
                .map(|ticker_symbol| ticker_symbol.trim().to_string())
        })
        .collect();

    expected_tickers.sort();
    expected_tickers
}

// Strips the EXPECTED: and COMMENT: annotation lines from a test file
pub fn get_document_text(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for a single fixture file
pub fn run_test_for_file(
    extractor: &TickerExtractor,
    test_file_path: &Path,
) -> (Vec<TickerSymbol>, Vec<TickerSymbol>, Vec<TickerSymbol>) {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let document_text = get_document_text(&raw_text);

    let actual_tickers = extractor.extract_tickers_from_text(&document_text);
    let expected_tickers = get_expected_tickers(test_file_path);

    // Determine unexpected and missing tickers
    let unexpected_tickers: Vec<TickerSymbol> = actual_tickers
        .iter()
        .filter(|ticker| !expected_tickers.contains(ticker))
        .cloned()
        .collect();

    let missing_tickers: Vec<TickerSymbol> = expected_tickers
        .iter()
        .filter(|ticker| !actual_tickers.contains(ticker))
        .cloned()
        .collect();

    assert_eq!(
        actual_tickers,
        expected_tickers,
        "{} - Missing: {:?}, Unexpected: {:?}",
        test_file_path.display(),
        missing_tickers,
        unexpected_tickers
    );

    (actual_tickers, unexpected_tickers, missing_tickers)
}
