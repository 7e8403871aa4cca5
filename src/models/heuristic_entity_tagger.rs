use crate::constants::{
    ORGANIZATION_SUFFIXES, PERSON_PREFIXES, SENTENCE_STARTERS, SKIP_WORDS, SPAN_CONNECTORS,
};
use crate::models::{EntityTagger, ExtractorConfig, TaggedEntities};
use crate::Error;
use std::collections::HashSet;

const SPAN_OPENERS: &[char] = &['(', '[', '"', '“', '\'', '‘'];
const SPAN_CLOSERS: &[char] = &[',', ';', ':', ')', ']', '.', '!', '?', '"', '”', '’'];
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SpanKind {
    Organization,
    Person,
    ProperNoun,
}

#[derive(Debug, Default)]
struct Span {
    words: Vec<String>,
    is_person: bool,
    opens_sentence: bool,
}

/// Capitalization-driven entity tagger.
///
/// Groups runs of capitalized words into spans and classifies each span by its
/// shape: a corporate suffix or an `X of Y` construction makes an
/// organization, an honorific or a two-word span makes a person, and a lone
/// word is a plain proper noun. A lone word opening a sentence is dropped,
/// since capitalization says nothing about it there.
#[derive(Debug, Clone)]
pub struct HeuristicEntityTagger {
    max_input_chars: usize,
}

impl HeuristicEntityTagger {
    pub fn new(config: &ExtractorConfig) -> Self {
        HeuristicEntityTagger {
            max_input_chars: config.max_tagger_input_chars,
        }
    }

    fn scan(&self, text: &str) -> Result<TaggedEntities, Error> {
        let char_count = text.chars().count();
        if char_count > self.max_input_chars {
            return Err(Error::TaggerError(format!(
                "Input of {} characters exceeds the {} character limit",
                char_count, self.max_input_chars
            )));
        }

        let raw_words: Vec<&str> = text.split_whitespace().collect();
        let mut collector = SpanCollector::default();
        let mut span = Span::default();
        let mut is_person_pending = false;
        let mut is_sentence_opening = false;

        for (idx, raw_word) in raw_words.iter().enumerate() {
            if idx == 0 || ends_sentence(raw_words[idx - 1]) {
                is_sentence_opening = true;
            }

            if raw_word.starts_with(SPAN_OPENERS) {
                collector.flush(&mut span);
            }

            let word = clean_word(raw_word);
            if word.is_empty() {
                collector.flush(&mut span);
                continue;
            }

            let lowercase_word = word.to_lowercase();
            let is_capitalized = word.starts_with(char::is_uppercase);

            if is_capitalized && PERSON_PREFIXES.contains(&lowercase_word.as_str()) {
                collector.flush(&mut span);
                is_person_pending = true;
                continue;
            }

            if SKIP_WORDS.contains(&lowercase_word.as_str()) {
                collector.flush(&mut span);
                continue;
            }

            if span.words.is_empty() {
                if SENTENCE_STARTERS.contains(&lowercase_word.as_str()) {
                    is_person_pending = false;
                    continue;
                }

                if !is_capitalized {
                    is_person_pending = false;
                    is_sentence_opening = false;
                    continue;
                }

                span.is_person = is_person_pending;
                span.opens_sentence = is_sentence_opening;
                is_person_pending = false;
                is_sentence_opening = false;
                span.words.push(word);
            } else if SPAN_CONNECTORS.contains(&lowercase_word.as_str()) {
                let continues = !span.is_person
                    && !ends_span(raw_word)
                    && raw_words
                        .get(idx + 1)
                        .is_some_and(|next| clean_word(next).starts_with(char::is_uppercase));

                if continues {
                    span.words.push(word);
                    continue;
                }

                collector.flush(&mut span);
                continue;
            } else if is_capitalized {
                span.words.push(word);
            } else {
                collector.flush(&mut span);
                continue;
            }

            if ends_span(raw_word) || is_possessive(raw_word) {
                collector.flush(&mut span);
            }
        }

        collector.flush(&mut span);

        Ok(collector.entities)
    }
}

impl EntityTagger for HeuristicEntityTagger {
    fn tag_organizations(&self, text: &str) -> Result<Vec<String>, Error> {
        self.scan(text).map(|entities| entities.organizations)
    }

    fn tag_people(&self, text: &str) -> Result<Vec<String>, Error> {
        self.scan(text).map(|entities| entities.people)
    }

    fn tag_proper_nouns(&self, text: &str) -> Result<Vec<String>, Error> {
        self.scan(text).map(|entities| entities.proper_nouns)
    }

    fn tag_entities(&self, text: &str) -> Result<TaggedEntities, Error> {
        self.scan(text)
    }
}

#[derive(Debug, Default)]
struct SpanCollector {
    entities: TaggedEntities,
    seen: HashSet<(SpanKind, String)>,
}

impl SpanCollector {
    fn flush(&mut self, span: &mut Span) {
        let mut finished = std::mem::take(span);

        // A connector is only kept when a capitalized word follows it
        while finished
            .words
            .last()
            .is_some_and(|word| SPAN_CONNECTORS.contains(&word.to_lowercase().as_str()))
        {
            finished.words.pop();
        }

        if finished.words.is_empty() {
            return;
        }

        let has_connector = finished
            .words
            .iter()
            .any(|word| SPAN_CONNECTORS.contains(&word.to_lowercase().as_str()));

        let kind = classify_span(&finished.words, has_connector, finished.is_person);
        if kind == SpanKind::ProperNoun && finished.opens_sentence {
            return;
        }

        self.push(kind, finished.words.join(" "));
    }

    fn push(&mut self, kind: SpanKind, text: String) {
        if !self.seen.insert((kind, text.clone())) {
            return;
        }

        match kind {
            SpanKind::Organization => self.entities.organizations.push(text),
            SpanKind::Person => self.entities.people.push(text),
            SpanKind::ProperNoun => self.entities.proper_nouns.push(text),
        }
    }
}

fn classify_span(words: &[String], has_connector: bool, is_person: bool) -> SpanKind {
    if is_person {
        return SpanKind::Person;
    }

    let has_organization_suffix = words.len() >= 2
        && words
            .last()
            .is_some_and(|word| ORGANIZATION_SUFFIXES.contains(&word.to_lowercase().as_str()));

    if has_organization_suffix || has_connector || words.len() >= 3 {
        SpanKind::Organization
    } else if words.len() == 2 {
        SpanKind::Person
    } else {
        SpanKind::ProperNoun
    }
}

/// Strips surrounding punctuation and a trailing possessive.
fn clean_word(raw_word: &str) -> String {
    if raw_word == "&" {
        return raw_word.to_string();
    }

    let word = raw_word.trim_matches(|c: char| !c.is_alphanumeric());

    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
        .to_string()
}

fn ends_span(raw_word: &str) -> bool {
    raw_word
        .chars()
        .rev()
        .take_while(|c| !c.is_alphanumeric())
        .any(|c| SPAN_CLOSERS.contains(&c))
}

fn ends_sentence(raw_word: &str) -> bool {
    raw_word
        .chars()
        .rev()
        .take_while(|c| !c.is_alphanumeric())
        .any(|c| SENTENCE_TERMINATORS.contains(&c))
}

fn is_possessive(raw_word: &str) -> bool {
    let word = raw_word.trim_end_matches(|c: char| !c.is_alphanumeric());
    word.ends_with("'s") || word.ends_with("’s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXTRACTOR_CONFIG;

    fn tag(text: &str) -> TaggedEntities {
        HeuristicEntityTagger::new(&DEFAULT_EXTRACTOR_CONFIG)
            .tag_entities(text)
            .unwrap()
    }

    #[test]
    fn test_organization_with_suffix() {
        let entities = tag("Jensen Huang, speaking as CEO, said Nvidia Corporation will grow.");

        assert_eq!(entities.organizations, vec!["Nvidia Corporation"]);
        assert_eq!(entities.people, vec!["Jensen Huang"]);
        assert!(entities.proper_nouns.is_empty());
    }

    #[test]
    fn test_connector_joins_organization() {
        let entities = tag("He joined Bank of America last year.");

        assert_eq!(entities.organizations, vec!["Bank of America"]);
        assert!(entities.people.is_empty());
        assert!(entities.proper_nouns.is_empty());
    }

    #[test]
    fn test_honorific_marks_person() {
        let entities = tag("Analysts expect Dr. Lisa Su to speak.");

        assert_eq!(entities.people, vec!["Lisa Su"]);
        assert!(entities.proper_nouns.is_empty());
    }

    #[test]
    fn test_sentence_starters_and_titles_are_skipped() {
        let entities = tag("The company said Tesla would hire a new CFO soon.");

        assert!(entities.organizations.is_empty());
        assert!(entities.people.is_empty());
        assert_eq!(entities.proper_nouns, vec!["Tesla"]);
    }

    #[test]
    fn test_punctuation_breaks_spans() {
        let entities = tag("Apple (AAPL) and Microsoft, Oracle's rival.");

        assert_eq!(entities.proper_nouns, vec!["AAPL", "Microsoft", "Oracle"]);
    }

    #[test]
    fn test_each_kind_is_reported_once() {
        let entities = tag("Traders bought Tesla, then sold Tesla.");
        assert_eq!(entities.proper_nouns, vec!["Tesla"]);
    }

    #[test]
    fn test_lone_word_opening_a_sentence_is_dropped() {
        let entities = tag("Apple pie is great. Later, bakers said Apple tastes best.");
        assert_eq!(entities.proper_nouns, vec!["Apple"]);

        assert!(tag("Apple pie is great.").proper_nouns.is_empty());
        assert!(tag("The Apple harvest was late.").proper_nouns.is_empty());
    }

    #[test]
    fn test_title_case_span_is_not_split_into_words() {
        let entities = tag("My Favorite Apple Pie Recipe");

        assert_eq!(entities.organizations, vec!["Favorite Apple Pie Recipe"]);
        assert!(entities.proper_nouns.is_empty());
    }

    #[test]
    fn test_honorific_survives_sentence_opening() {
        let entities = tag("Shares moved. Mr. Huang spoke.");
        assert_eq!(entities.people, vec!["Huang"]);
    }

    #[test]
    fn test_individual_methods_agree_with_combined_scan() {
        let tagger = HeuristicEntityTagger::new(&DEFAULT_EXTRACTOR_CONFIG);
        let text = "Mr. Huang of Nvidia Corporation met Sundar Pichai.";

        let entities = tagger.tag_entities(text).unwrap();

        assert_eq!(tagger.tag_organizations(text).unwrap(), entities.organizations);
        assert_eq!(tagger.tag_people(text).unwrap(), entities.people);
        assert_eq!(tagger.tag_proper_nouns(text).unwrap(), entities.proper_nouns);
    }

    #[test]
    fn test_oversized_input_is_an_error() {
        let tagger = HeuristicEntityTagger::new(&ExtractorConfig {
            max_tagger_input_chars: 10,
            ..DEFAULT_EXTRACTOR_CONFIG
        });

        assert!(matches!(
            tagger.tag_entities("Apple Inc. is a company"),
            Err(Error::TaggerError(_))
        ));
    }
}
