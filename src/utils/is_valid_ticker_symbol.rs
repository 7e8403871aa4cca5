/// A ticker symbol is 1 to 5 uppercase ASCII letters.
pub fn is_valid_ticker_symbol(ticker_symbol: &str) -> bool {
    (1..=5).contains(&ticker_symbol.len())
        && ticker_symbol.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conventional_symbols() {
        assert!(is_valid_ticker_symbol("F"));
        assert!(is_valid_ticker_symbol("GOOGL"));
    }

    #[test]
    fn test_rejects_malformed_symbols() {
        assert!(!is_valid_ticker_symbol(""));
        assert!(!is_valid_ticker_symbol("GOOGLE"));
        assert!(!is_valid_ticker_symbol("aapl"));
        assert!(!is_valid_ticker_symbol("BRK.B"));
    }
}
