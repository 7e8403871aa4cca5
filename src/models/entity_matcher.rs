use crate::models::context_classifier::keyword_set;
use crate::models::{
    AliasIndex, EntityMention, EntityTagger, ExecutiveTable, ExtractorConfig, MentionKind,
    TaggedEntities, TickerMatcher,
};
use crate::types::TickerSymbolSet;
use crate::utils::{char_window, normalize_phrase, strip_corporate_suffix, word_boundary_pattern};
use crate::Error;
use log::{debug, trace, warn};
use regex::{Regex, RegexSet};
use std::collections::HashSet;
use std::sync::Arc;

/// Tier 3: organizations, people and proper nouns found by an [`EntityTagger`],
/// resolved through the alias index and the executive table.
pub struct EntityMatcher {
    tagger: Box<dyn EntityTagger>,
    alias_index: Arc<AliasIndex>,
    executive_table: Arc<ExecutiveTable>,
    executive_roles: RegexSet,
    executive_context_radius: usize,
    min_text_length: usize,
    min_proper_noun_length: usize,
    max_proper_noun_length: usize,
}

impl EntityMatcher {
    pub fn new(
        tagger: Box<dyn EntityTagger>,
        alias_index: Arc<AliasIndex>,
        executive_table: Arc<ExecutiveTable>,
        config: &ExtractorConfig,
    ) -> Result<Self, Error> {
        Ok(EntityMatcher {
            tagger,
            alias_index,
            executive_table,
            executive_roles: keyword_set(config.context_keywords.executive_roles)?,
            executive_context_radius: config.executive_context_radius,
            min_text_length: config.min_entity_text_length,
            min_proper_noun_length: config.min_proper_noun_length,
            max_proper_noun_length: config.max_proper_noun_length,
        })
    }

    pub fn match_by_entities(&self, text: &str) -> TickerSymbolSet {
        let mut ticker_symbols = TickerSymbolSet::new();

        let Some(entities) = self.tag(text) else {
            return ticker_symbols;
        };

        for organization in &entities.organizations {
            ticker_symbols.extend(self.lookup_organization(organization));
        }

        for person in &entities.people {
            ticker_symbols.extend(self.lookup_person(text, person));
        }

        for proper_noun in self.eligible_proper_nouns(&entities) {
            ticker_symbols.extend(self.alias_index.lookup(proper_noun));
        }

        debug!("Entities found: {:?}", ticker_symbols);

        ticker_symbols
    }

    /// Lists the tagged entities with what they resolved to.
    ///
    /// Organizations are always listed, people only when they name a known
    /// executive exactly, and proper nouns only when they resolve.
    pub fn mentions(&self, text: &str) -> Vec<EntityMention> {
        let mut mentions = Vec::new();

        let Some(entities) = self.tag(text) else {
            return mentions;
        };

        for organization in &entities.organizations {
            mentions.push(EntityMention::new(
                organization,
                self.lookup_organization(organization),
                MentionKind::Organization,
            ));
        }

        for person in &entities.people {
            if let Some(ticker_symbol) = self.executive_table.lookup(person) {
                mentions.push(EntityMention::new(
                    person,
                    [ticker_symbol.clone()],
                    MentionKind::Person,
                ));
            }
        }

        for proper_noun in self.eligible_proper_nouns(&entities) {
            let ticker_symbols = self.alias_index.lookup(proper_noun);

            if !ticker_symbols.is_empty() {
                mentions.push(EntityMention::new(
                    proper_noun,
                    ticker_symbols,
                    MentionKind::ProperNoun,
                ));
            }
        }

        mentions
    }

    fn tag(&self, text: &str) -> Option<TaggedEntities> {
        if text.chars().count() < self.min_text_length {
            return None;
        }

        match self.tagger.tag_entities(text) {
            Ok(entities) => {
                trace!("Tagged entities: {:?}", entities);
                Some(entities)
            }
            Err(err) => {
                warn!("Entity tagging failed; skipping entity matching: {}", err);
                None
            }
        }
    }

    fn lookup_organization(&self, organization: &str) -> TickerSymbolSet {
        let ticker_symbols = self.alias_index.lookup(organization);

        if ticker_symbols.is_empty() {
            // Taggers drop punctuation, so "Apple Inc." may arrive as "Apple Inc"
            self.alias_index
                .lookup(&strip_corporate_suffix(&normalize_phrase(organization)))
        } else {
            ticker_symbols
        }
    }

    fn lookup_person(&self, text: &str, person: &str) -> TickerSymbolSet {
        if let Some(ticker_symbol) = self.executive_table.lookup(person) {
            return TickerSymbolSet::from([ticker_symbol.clone()]);
        }

        let last_name_matches = self.executive_table.last_name_matches(person);
        if last_name_matches.is_empty() || !self.has_role_nearby(text, person) {
            return TickerSymbolSet::new();
        }

        last_name_matches
            .into_iter()
            .map(|(name, ticker_symbol)| {
                trace!("{:?} confirmed as {:?} by role context", person, name);
                ticker_symbol.clone()
            })
            .collect()
    }

    /// Whether any whole-word occurrence of `person` (or, failing that, of its
    /// last word) has a role keyword within the executive context radius.
    fn has_role_nearby(&self, text: &str, person: &str) -> bool {
        let last_name = person.split_whitespace().last().unwrap_or(person);

        for name in [person, last_name] {
            let name_pattern = match Regex::new(&word_boundary_pattern(name)) {
                Ok(name_pattern) => name_pattern,
                Err(err) => {
                    warn!("Could not search for {:?}: {}", name, err);
                    return false;
                }
            };

            let mut occurrences = name_pattern.find_iter(text).peekable();
            if occurrences.peek().is_none() {
                continue;
            }

            return occurrences.any(|occurrence| {
                let (window_start, window_end) = char_window(
                    text,
                    occurrence.start(),
                    occurrence.end(),
                    self.executive_context_radius,
                );

                self.executive_roles
                    .is_match(&text[window_start..window_end])
            });
        }

        false
    }

    fn eligible_proper_nouns<'e>(
        &self,
        entities: &'e TaggedEntities,
    ) -> impl Iterator<Item = &'e String> + 'e {
        let captured: HashSet<String> = entities
            .organizations
            .iter()
            .chain(entities.people.iter())
            .map(|entity| entity.to_lowercase())
            .collect();

        let min_length = self.min_proper_noun_length;
        let max_length = self.max_proper_noun_length;

        entities.proper_nouns.iter().filter(move |proper_noun| {
            let length = proper_noun.chars().count();

            length >= min_length
                && length <= max_length
                && !captured.contains(&proper_noun.to_lowercase())
        })
    }
}

impl TickerMatcher for EntityMatcher {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn match_tickers(&self, text: &str) -> TickerSymbolSet {
        self.match_by_entities(text)
    }
}
