use crate::types::TickerSymbolSet;

/// One independent strategy for finding tracked ticker symbols in text.
///
/// Matchers hold only immutable reference data, so a single instance may be
/// shared across threads and called concurrently.
pub trait TickerMatcher: Send + Sync {
    /// Short label used in logs and diagnostic breakdowns.
    fn name(&self) -> &'static str;

    /// Returns every tracked ticker symbol this strategy finds in `text`.
    ///
    /// Never fails; anything that cannot be resolved is dropped.
    fn match_tickers(&self, text: &str) -> TickerSymbolSet;
}
