pub mod alias_index;
pub use alias_index::{AliasEntry, AliasIndex};

pub mod article;
pub use article::Article;

pub mod config;
pub use config::{ContextKeywords, ExtractorConfig};

pub mod context_classifier;
pub use context_classifier::{ContextClassifier, ContextSignals};

pub mod context_name_matcher;
pub use context_name_matcher::ContextNameMatcher;

pub mod entity_matcher;
pub use entity_matcher::EntityMatcher;

pub mod entity_mention;
pub use entity_mention::{EntityMention, MentionConfidence, MentionKind};

pub mod entity_tagger;
pub use entity_tagger::{EntityTagger, TaggedEntities};

pub mod error;
pub use error::Error;

pub mod executive_table;
pub use executive_table::{ExecutiveEntry, ExecutiveTable};

pub mod explicit_pattern_matcher;
pub use explicit_pattern_matcher::ExplicitPatternMatcher;

pub mod extraction_context;
pub use extraction_context::ExtractionContext;

pub mod heuristic_entity_tagger;
pub use heuristic_entity_tagger::HeuristicEntityTagger;

pub mod manual_alias;
pub use manual_alias::{AliasKind, ManualAlias};

pub mod reference_data;
pub use reference_data::ReferenceData;

pub mod reference_data_preprocessor;
pub use reference_data_preprocessor::ReferenceDataPreprocessor;

pub mod reference_registry;
pub use reference_registry::ReferenceRegistry;

pub mod ticker_extractor;
pub use ticker_extractor::TickerExtractor;

pub mod ticker_matcher;
pub use ticker_matcher::TickerMatcher;

pub mod tracked_security;
pub use tracked_security::TrackedSecurity;
