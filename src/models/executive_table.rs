use crate::models::ReferenceRegistry;
use crate::types::{ExecutiveName, TickerSymbol};
use crate::utils::normalize_phrase;
use crate::Error;
use std::collections::BTreeMap;

/// One row of the curated executive table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutiveEntry {
    pub name: ExecutiveName,
    pub ticker_symbol: TickerSymbol,
}

impl ExecutiveEntry {
    pub fn new(name: &str, ticker_symbol: &str) -> Self {
        ExecutiveEntry {
            name: normalize_phrase(name),
            ticker_symbol: ticker_symbol.trim().to_uppercase(),
        }
    }
}

/// Maps executive and founder names to the ticker of the company they are associated with.
#[derive(Debug, Clone)]
pub struct ExecutiveTable {
    executives: BTreeMap<ExecutiveName, TickerSymbol>,
}

impl ExecutiveTable {
    pub fn new(registry: &ReferenceRegistry, entries: &[ExecutiveEntry]) -> Result<Self, Error> {
        let mut executives: BTreeMap<ExecutiveName, TickerSymbol> = BTreeMap::new();

        for entry in entries {
            let name = normalize_phrase(&entry.name);
            let ticker_symbol = entry.ticker_symbol.trim().to_uppercase();

            if name.is_empty() {
                return Err(Error::InvalidAlias {
                    ticker_symbol,
                    alias: entry.name.clone(),
                });
            }

            if !registry.is_tracked(&ticker_symbol) {
                return Err(Error::UntrackedTickerSymbol {
                    source_name: "Executive",
                    entry: name,
                    ticker_symbol,
                });
            }

            match executives.get(&name) {
                Some(existing) if *existing != ticker_symbol => {
                    return Err(Error::ConflictingExecutive {
                        name,
                        first: existing.clone(),
                        second: ticker_symbol,
                    });
                }
                Some(_) => {}
                None => {
                    executives.insert(name, ticker_symbol);
                }
            }
        }

        Ok(ExecutiveTable { executives })
    }

    /// Exact lookup of a (normalized) person name.
    pub fn lookup(&self, name: &str) -> Option<&TickerSymbol> {
        self.executives.get(&normalize_phrase(name))
    }

    /// Executives whose last name appears as a whole word in `person`.
    pub fn last_name_matches(&self, person: &str) -> Vec<(&ExecutiveName, &TickerSymbol)> {
        let person = normalize_phrase(person);
        let person_tokens: Vec<&str> = person.split_whitespace().collect();

        self.executives
            .iter()
            .filter(|(name, _)| {
                name.split_whitespace()
                    .last()
                    .is_some_and(|surname| person_tokens.contains(&surname))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.executives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executives.is_empty()
    }
}
