use std::collections::BTreeSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the canonical name of a tracked company as an owned `String`.
pub type CompanyName = String;

/// Represents the name of a market index (e.g., "S&P 500") a security belongs to.
pub type IndexName = String;

/// A normalized (lowercased, trimmed) phrase which resolves to one or more ticker symbols.
pub type AliasPhrase = String;

/// A normalized (lowercased, trimmed) executive or founder name.
pub type ExecutiveName = String;

/// An ordered, deduplicated set of ticker symbols.
///
/// Ordering is lexicographic, so iterating the set directly yields the sorted
/// output expected by callers.
pub type TickerSymbolSet = BTreeSet<TickerSymbol>;
