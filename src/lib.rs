#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{DEFAULT_CONTEXT_KEYWORDS, DEFAULT_EXTRACTOR_CONFIG};
mod constants;
pub mod models;
pub use models::{
    AliasIndex, AliasKind, Article, ContextKeywords, EntityMention, EntityTagger, Error,
    ExecutiveEntry, ExtractorConfig, HeuristicEntityTagger, ManualAlias, MentionConfidence,
    MentionKind, ReferenceData, ReferenceRegistry, TaggedEntities, TickerExtractor,
    TickerMatcher, TrackedSecurity,
};
pub mod types;
pub use types::{
    AliasPhrase, CompanyName, ExecutiveName, IndexName, TickerSymbol, TickerSymbolSet,
};
mod utils;
pub use utils::{join_article_text, to_storage_value};
