use crate::models::ContextKeywords;
use crate::utils::word_boundary_pattern;
use crate::Error;
use regex::{RegexSet, RegexSetBuilder};

/// Which keyword tiers are present in a context window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextSignals {
    pub strong: bool,
    pub weak: bool,
    pub product: bool,
}

/// Detects strong, weak and product keywords in a context window.
///
/// Keywords match as whole words, ignoring case, so "app" is not found in
/// "apple" and "ai" is not found in "airline".
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    strong: RegexSet,
    weak: RegexSet,
    product: RegexSet,
}

impl ContextClassifier {
    pub fn new(context_keywords: &ContextKeywords) -> Result<Self, Error> {
        Ok(ContextClassifier {
            strong: keyword_set(context_keywords.strong)?,
            weak: keyword_set(context_keywords.weak)?,
            product: keyword_set(context_keywords.product)?,
        })
    }

    pub fn classify(&self, window: &str) -> ContextSignals {
        ContextSignals {
            strong: self.strong.is_match(window),
            weak: self.weak.is_match(window),
            product: self.product.is_match(window),
        }
    }
}

/// Compiles a case-insensitive, whole-word `RegexSet` for `keywords`.
pub(crate) fn keyword_set(keywords: &[&str]) -> Result<RegexSet, Error> {
    if keywords.is_empty() {
        return Ok(RegexSet::empty());
    }

    let patterns = keywords.iter().map(|keyword| word_boundary_pattern(keyword));

    let regex_set = RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()?;

    Ok(regex_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONTEXT_KEYWORDS;

    #[test]
    fn test_classifies_each_tier() {
        let classifier = ContextClassifier::new(&DEFAULT_CONTEXT_KEYWORDS).unwrap();

        assert_eq!(
            classifier.classify("Tesla Stock Surges"),
            ContextSignals {
                strong: true,
                weak: false,
                product: false
            }
        );
        assert!(classifier.classify("Apple announces new policy").weak);
        assert!(classifier.classify("millions of iphone users").product);
    }

    #[test]
    fn test_keywords_do_not_match_inside_words() {
        let classifier = ContextClassifier::new(&DEFAULT_CONTEXT_KEYWORDS).unwrap();

        // "app" is a product keyword; "stockings" contains "stock"
        assert_eq!(
            classifier.classify("My favorite apple pie recipe, with stockings"),
            ContextSignals::default()
        );
    }

    #[test]
    fn test_punctuated_keywords() {
        let classifier = ContextClassifier::new(&DEFAULT_CONTEXT_KEYWORDS).unwrap();

        assert!(classifier.classify("shares of Apple Inc. were").weak);
        assert!(classifier.classify("(NASDAQ:AAPL)").strong);
    }

    #[test]
    fn test_empty_keyword_lists_never_match() {
        let classifier = ContextClassifier::new(&ContextKeywords {
            strong: &[],
            weak: &[],
            product: &[],
            executive_roles: &[],
        })
        .unwrap();

        assert_eq!(classifier.classify("AAPL stock surged"), ContextSignals::default());
    }
}
