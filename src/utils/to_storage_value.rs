use crate::types::TickerSymbol;

/// Maps an extraction result to the value stored alongside a document: an
/// empty result is stored as no value at all.
pub fn to_storage_value(ticker_symbols: Vec<TickerSymbol>) -> Option<Vec<TickerSymbol>> {
    if ticker_symbols.is_empty() {
        None
    } else {
        Some(ticker_symbols)
    }
}
