/// Keyword tables used to judge the text surrounding a candidate mention.
///
/// Matching against these is whole-word and case-insensitive.
#[derive(Debug, Clone, Copy)]
pub struct ContextKeywords {
    /// Accept unconditionally.
    pub strong: &'static [&'static str],
    /// Accept when the mention is capitalized.
    pub weak: &'static [&'static str],
    /// Accept when the mention is capitalized or a brand-style alias.
    pub product: &'static [&'static str],
    /// Confirms a surname-only executive mention.
    pub executive_roles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractorConfig {
    /// Characters inspected on either side of a name match.
    pub context_radius: usize,
    /// Characters inspected on either side of a surname-only executive mention.
    pub executive_context_radius: usize,
    /// Documents shorter than this (in characters) skip entity tagging.
    pub min_entity_text_length: usize,
    pub min_proper_noun_length: usize,
    pub max_proper_noun_length: usize,
    /// Upper bound on the input accepted by the default entity tagger.
    pub max_tagger_input_chars: usize,
    pub context_keywords: ContextKeywords,
}
