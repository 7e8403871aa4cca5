use crate::models::{
    AliasIndex, ContextClassifier, ExtractionContext, ExtractorConfig, TickerMatcher,
};
use crate::types::{AliasPhrase, TickerSymbolSet};
use crate::utils::{char_window, word_boundary_pattern};
use crate::Error;
use log::{debug, info, trace};
use regex::{Regex, RegexBuilder};

struct CompiledAlias {
    phrase: AliasPhrase,
    regex: Regex,
    ticker_symbols: TickerSymbolSet,
    is_brand: bool,
}

/// Tier 2: company, product and executive names from the alias index, accepted
/// only when the surrounding text reads like a reference to the company.
pub struct ContextNameMatcher {
    aliases: Vec<CompiledAlias>,
    classifier: ContextClassifier,
    context_radius: usize,
}

impl ContextNameMatcher {
    pub fn new(alias_index: &AliasIndex, config: &ExtractorConfig) -> Result<Self, Error> {
        info!("Compiling {} alias patterns...", alias_index.len());

        let aliases = alias_index
            .entries()
            .map(|entry| {
                let regex = RegexBuilder::new(&word_boundary_pattern(&entry.phrase))
                    .case_insensitive(true)
                    .build()?;

                Ok(CompiledAlias {
                    phrase: entry.phrase.clone(),
                    regex,
                    ticker_symbols: entry.ticker_symbols.clone(),
                    is_brand: entry.is_brand(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(ContextNameMatcher {
            aliases,
            classifier: ContextClassifier::new(&config.context_keywords)?,
            context_radius: config.context_radius,
        })
    }

    pub fn match_by_name(&self, text: &str) -> TickerSymbolSet {
        let lowercase_text = text.to_lowercase();
        let mut ticker_symbols = TickerSymbolSet::new();

        for alias in &self.aliases {
            if !lowercase_text.contains(alias.phrase.as_str()) {
                continue;
            }

            // Positions are taken from `text`, not `lowercase_text`, so the capitalization
            // check and window offsets refer to the same string.
            let accepted = alias.regex.find_iter(text).any(|found| {
                let (window_start, window_end) =
                    char_window(text, found.start(), found.end(), self.context_radius);

                let context = ExtractionContext {
                    window: &text[window_start..window_end],
                    is_capitalized: found.as_str().starts_with(char::is_uppercase),
                    is_brand: alias.is_brand,
                    signals: self.classifier.classify(&text[window_start..window_end]),
                };

                trace!("Alias {:?} at {}: {:?}", alias.phrase, found.start(), context);

                context.is_accepted()
            });

            if accepted {
                ticker_symbols.extend(alias.ticker_symbols.iter().cloned());
            }
        }

        debug!("Context names found: {:?}", ticker_symbols);

        ticker_symbols
    }
}

impl TickerMatcher for ContextNameMatcher {
    fn name(&self) -> &'static str {
        "context"
    }

    fn match_tickers(&self, text: &str) -> TickerSymbolSet {
        self.match_by_name(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXTRACTOR_CONFIG;
    use crate::models::{AliasKind, ManualAlias, ReferenceRegistry, TrackedSecurity};

    fn matcher() -> ContextNameMatcher {
        let registry = ReferenceRegistry::new(&[
            TrackedSecurity::new("AAPL", "Apple Inc.", Vec::<String>::new()),
            TrackedSecurity::new("TSLA", "Tesla Inc.", Vec::<String>::new()),
            TrackedSecurity::new("GOOGL", "Alphabet Inc. Class A", Vec::<String>::new()),
            TrackedSecurity::new("GOOG", "Alphabet Inc. Class C", Vec::<String>::new()),
        ])
        .unwrap();

        let alias_index = AliasIndex::build(
            &registry,
            &[
                ManualAlias::new("AAPL", "iphone", AliasKind::Product),
                ManualAlias::new("GOOGL", "google", AliasKind::Name),
                ManualAlias::new("GOOG", "google", AliasKind::Name),
            ],
        )
        .unwrap();

        ContextNameMatcher::new(&alias_index, &DEFAULT_EXTRACTOR_CONFIG).unwrap()
    }

    fn tickers(ticker_symbols: &[&str]) -> TickerSymbolSet {
        ticker_symbols.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_strong_context_accepts_lowercase() {
        assert_eq!(
            matcher().match_by_name("tesla stock surges on strong earnings"),
            tickers(&["TSLA"])
        );
    }

    #[test]
    fn test_weak_context_requires_capitalization() {
        let matcher = matcher();

        assert_eq!(
            matcher.match_by_name("Apple announces new policy"),
            tickers(&["AAPL"])
        );
        assert!(matcher.match_by_name("apple announces new policy").is_empty());
    }

    #[test]
    fn test_no_context_rejects() {
        let matcher = matcher();

        assert!(matcher.match_by_name("I ate an apple for lunch").is_empty());
        assert!(matcher.match_by_name("My favorite apple pie recipe").is_empty());
    }

    #[test]
    fn test_brand_alias_accepted_in_product_context() {
        assert_eq!(
            matcher().match_by_name("the new iphone has millions of users"),
            tickers(&["AAPL"])
        );
    }

    #[test]
    fn test_any_accepted_position_is_enough() {
        let text = "An apple a day. Later, Apple announced a partnership.";
        assert_eq!(matcher().match_by_name(text), tickers(&["AAPL"]));
    }

    #[test]
    fn test_shared_alias_reports_all_tickers() {
        assert_eq!(
            matcher().match_by_name("Google shares rose"),
            tickers(&["GOOG", "GOOGL"])
        );
    }

    #[test]
    fn test_aliases_do_not_match_inside_words() {
        assert!(matcher().match_by_name("pineapple stock is low").is_empty());
    }

    #[test]
    fn test_window_is_limited_to_radius() {
        let padding = "x".repeat(80);
        let text = format!("Apple {} shares", padding);
        assert!(matcher().match_by_name(&text).is_empty());
    }
}
