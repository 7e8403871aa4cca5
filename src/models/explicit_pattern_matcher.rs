use crate::constants::{
    EXCHANGES, FALSE_POSITIVE_SYMBOLS, PARENTHETICAL_EXCHANGES, TICKER_ADJACENT_KEYWORDS,
};
use crate::models::{ReferenceRegistry, TickerMatcher};
use crate::types::TickerSymbolSet;
use crate::Error;
use log::{debug, trace};
use regex::Regex;
use std::sync::Arc;

struct ExplicitPattern {
    label: &'static str,
    regex: Regex,
    apply_blocklist: bool,
}

/// Tier 1: conventional ticker notations such as `$AAPL`, `(NASDAQ:AAPL)`,
/// `NYSE:IBM`, `"MSFT"` and `NVDA shares`.
///
/// A candidate is only reported if it is part of the tracked universe.
pub struct ExplicitPatternMatcher {
    registry: Arc<ReferenceRegistry>,
    patterns: Vec<ExplicitPattern>,
}

impl ExplicitPatternMatcher {
    pub fn new(registry: Arc<ReferenceRegistry>) -> Result<Self, Error> {
        let quotes = r#"["'“”‘’]"#;

        let patterns = vec![
            ExplicitPattern {
                label: "dollar",
                regex: Regex::new(r"\$([A-Z]{1,5})\b")?,
                apply_blocklist: false,
            },
            ExplicitPattern {
                label: "parenthetical",
                regex: Regex::new(&format!(
                    r"\((?:(?:{}):\s*)?([A-Z]{{1,5}})\)",
                    PARENTHETICAL_EXCHANGES.join("|")
                ))?,
                apply_blocklist: false,
            },
            ExplicitPattern {
                label: "exchange",
                regex: Regex::new(&format!(
                    r"\b(?:{}):\s*([A-Z]{{1,5}})\b",
                    EXCHANGES.join("|")
                ))?,
                apply_blocklist: false,
            },
            ExplicitPattern {
                label: "quoted",
                regex: Regex::new(&format!(r"{}([A-Z]{{1,5}}){}", quotes, quotes))?,
                apply_blocklist: true,
            },
            ExplicitPattern {
                label: "keyword",
                regex: Regex::new(&format!(
                    r"(?i)\b([A-Z]{{2,5}})\s+(?:{})\b",
                    TICKER_ADJACENT_KEYWORDS.join("|")
                ))?,
                apply_blocklist: true,
            },
        ];

        Ok(ExplicitPatternMatcher { registry, patterns })
    }

    pub fn match_explicit(&self, text: &str) -> TickerSymbolSet {
        let mut ticker_symbols = TickerSymbolSet::new();

        for pattern in &self.patterns {
            for captures in pattern.regex.captures_iter(text) {
                let Some(candidate) = captures.get(1) else {
                    continue;
                };

                let candidate = candidate.as_str().to_uppercase();

                if pattern.apply_blocklist && FALSE_POSITIVE_SYMBOLS.contains(&candidate.as_str())
                {
                    trace!("Skipping blocklisted {} candidate {}", pattern.label, candidate);
                    continue;
                }

                if self.registry.is_tracked(&candidate) {
                    trace!("Accepted {} candidate {}", pattern.label, candidate);
                    ticker_symbols.insert(candidate);
                }
            }
        }

        debug!("Explicit patterns found: {:?}", ticker_symbols);

        ticker_symbols
    }
}

impl TickerMatcher for ExplicitPatternMatcher {
    fn name(&self) -> &'static str {
        "explicit"
    }

    fn match_tickers(&self, text: &str) -> TickerSymbolSet {
        self.match_explicit(text)
    }
}
