use crate::models::{
    AliasIndex, Article, ContextNameMatcher, EntityMatcher, EntityMention, EntityTagger,
    ExecutiveTable, ExplicitPatternMatcher, ExtractorConfig, HeuristicEntityTagger,
    ReferenceData, ReferenceRegistry, TickerMatcher,
};
use crate::types::{TickerSymbol, TickerSymbolSet};
use crate::utils::join_article_text;
use crate::Error;
use log::{debug, info};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Resolves the tracked ticker symbols a document is about by running an
/// ordered list of matchers and taking the union of what they find.
///
/// Immutable after construction; one instance can serve concurrent callers.
pub struct TickerExtractor {
    matchers: Vec<Arc<dyn TickerMatcher>>,
    entity_matcher: Option<Arc<EntityMatcher>>,
}

impl TickerExtractor {
    /// Builds the explicit pattern, context name and entity tiers from
    /// `reference_data`, using the built-in heuristic entity tagger.
    ///
    /// Fails if the reference data is inconsistent (duplicate tickers, aliases
    /// or executives pointing at untracked tickers, ...).
    pub fn new(reference_data: &ReferenceData, config: ExtractorConfig) -> Result<Self, Error> {
        Self::with_entity_tagger(
            reference_data,
            config,
            Box::new(HeuristicEntityTagger::new(&config)),
        )
    }

    pub fn with_entity_tagger(
        reference_data: &ReferenceData,
        config: ExtractorConfig,
        entity_tagger: Box<dyn EntityTagger>,
    ) -> Result<Self, Error> {
        let registry = Arc::new(ReferenceRegistry::new(&reference_data.securities)?);

        let alias_index = Arc::new(AliasIndex::build(
            &registry,
            &reference_data.manual_aliases,
        )?);

        info!("Building executive table...");
        let executive_table = Arc::new(ExecutiveTable::new(
            &registry,
            &reference_data.executives,
        )?);

        let explicit_pattern_matcher = ExplicitPatternMatcher::new(Arc::clone(&registry))?;
        let context_name_matcher = ContextNameMatcher::new(&alias_index, &config)?;
        let entity_matcher = Arc::new(EntityMatcher::new(
            entity_tagger,
            Arc::clone(&alias_index),
            executive_table,
            &config,
        )?);

        info!(
            "Ticker extractor ready: {} tracked securities, {} alias phrases",
            registry.len(),
            alias_index.len()
        );

        let matchers: Vec<Arc<dyn TickerMatcher>> = vec![
            Arc::new(explicit_pattern_matcher),
            Arc::new(context_name_matcher),
            entity_matcher.clone(),
        ];

        Ok(TickerExtractor {
            matchers,
            entity_matcher: Some(entity_matcher),
        })
    }

    /// Builds an extractor over an arbitrary, ordered set of matchers.
    pub fn from_matchers(matchers: Vec<Box<dyn TickerMatcher>>) -> Self {
        TickerExtractor {
            matchers: matchers.into_iter().map(Arc::from).collect(),
            entity_matcher: None,
        }
    }

    /// Builds an extractor over the reference data compiled into the library.
    #[cfg(feature = "embed-bytes")]
    pub fn with_embedded_data(config: ExtractorConfig) -> Result<Self, Error> {
        let reference_data = ReferenceData::embedded()?;

        Self::new(&reference_data, config)
    }

    /// Returns the sorted, de-duplicated tickers for a document.
    ///
    /// Missing or empty fields are skipped; a document with no usable text
    /// yields an empty list.
    pub fn extract_tickers(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> Vec<TickerSymbol> {
        self.extract_tickers_from_text(&join_article_text(&[title, description, content]))
    }

    pub fn extract_tickers_from_text(&self, text: &str) -> Vec<TickerSymbol> {
        if text.trim().is_empty() {
            return vec![];
        }

        let mut ticker_symbols = TickerSymbolSet::new();

        for matcher in &self.matchers {
            ticker_symbols.extend(matcher.match_tickers(text));
        }

        debug!("Extracted tickers: {:?}", ticker_symbols);

        ticker_symbols.into_iter().collect()
    }

    /// What each matcher found on its own, in matcher order.
    pub fn extract_by_matcher(&self, text: &str) -> Vec<(&'static str, TickerSymbolSet)> {
        self.matchers
            .iter()
            .map(|matcher| (matcher.name(), matcher.match_tickers(text)))
            .collect()
    }

    /// The entity mention report for `text`; empty when the extractor was
    /// built without an entity tier.
    pub fn entity_mentions(&self, text: &str) -> Vec<EntityMention> {
        self.entity_matcher
            .as_ref()
            .map(|entity_matcher| entity_matcher.mentions(text))
            .unwrap_or_default()
    }

    pub fn extract_article(&self, article: &Article) -> Vec<TickerSymbol> {
        self.extract_tickers(
            article.title.as_deref(),
            article.description.as_deref(),
            article.content.as_deref(),
        )
    }

    /// Extracts every article independently. Results are in input order.
    pub fn extract_batch(&self, articles: &[Article]) -> Vec<Vec<TickerSymbol>> {
        #[cfg(feature = "parallel")]
        let articles = articles.par_iter();

        #[cfg(not(feature = "parallel"))]
        let articles = articles.iter();

        articles
            .map(|article| self.extract_article(article))
            .collect()
    }
}
