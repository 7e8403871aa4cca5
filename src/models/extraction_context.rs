use crate::models::ContextSignals;

/// The text surrounding one alias match, and what is known about the match.
///
/// Built and discarded per candidate position.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub window: &'a str,
    pub is_capitalized: bool,
    pub is_brand: bool,
    pub signals: ContextSignals,
}

impl ExtractionContext<'_> {
    /// Strong context always accepts. Weak context needs a capitalized
    /// mention. Product context needs a capitalized mention or a brand alias.
    pub fn is_accepted(&self) -> bool {
        self.signals.strong
            || (self.signals.weak && self.is_capitalized)
            || (self.signals.product && (self.is_capitalized || self.is_brand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(signals: ContextSignals, is_capitalized: bool, is_brand: bool) -> bool {
        ExtractionContext {
            window: "",
            is_capitalized,
            is_brand,
            signals,
        }
        .is_accepted()
    }

    const STRONG: ContextSignals = ContextSignals {
        strong: true,
        weak: false,
        product: false,
    };

    const WEAK: ContextSignals = ContextSignals {
        strong: false,
        weak: true,
        product: false,
    };

    const PRODUCT: ContextSignals = ContextSignals {
        strong: false,
        weak: false,
        product: true,
    };

    #[test]
    fn test_strong_is_unconditional() {
        assert!(context(STRONG, false, false));
    }

    #[test]
    fn test_weak_requires_capitalization() {
        assert!(context(WEAK, true, false));
        assert!(!context(WEAK, false, true));
    }

    #[test]
    fn test_product_accepts_capitalized_or_brand() {
        assert!(context(PRODUCT, true, false));
        assert!(context(PRODUCT, false, true));
        assert!(!context(PRODUCT, false, false));
    }

    #[test]
    fn test_no_context_rejects() {
        assert!(!context(ContextSignals::default(), true, true));
    }
}
