use crate::constants::{
    EXECUTIVE_ROLE_KEYWORDS, PRODUCT_CONTEXT_KEYWORDS, STRONG_CONTEXT_KEYWORDS,
    WEAK_CONTEXT_KEYWORDS,
};
use crate::models::{ContextKeywords, ExtractorConfig};

pub const DEFAULT_CONTEXT_KEYWORDS: ContextKeywords = ContextKeywords {
    strong: STRONG_CONTEXT_KEYWORDS,
    weak: WEAK_CONTEXT_KEYWORDS,
    product: PRODUCT_CONTEXT_KEYWORDS,
    executive_roles: EXECUTIVE_ROLE_KEYWORDS,
};

pub const DEFAULT_EXTRACTOR_CONFIG: ExtractorConfig = ExtractorConfig {
    context_radius: 50,
    executive_context_radius: 30,
    min_entity_text_length: 10,
    min_proper_noun_length: 2,
    max_proper_noun_length: 30,
    max_tagger_input_chars: 200_000,
    context_keywords: DEFAULT_CONTEXT_KEYWORDS,
};
