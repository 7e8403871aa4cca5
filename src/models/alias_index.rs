use crate::models::{AliasKind, ManualAlias, ReferenceRegistry};
use crate::types::{AliasPhrase, TickerSymbol, TickerSymbolSet};
use crate::utils::{normalize_phrase, strip_corporate_suffix};
use crate::Error;
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};

/// A normalized phrase and every ticker symbol it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub phrase: AliasPhrase,
    pub ticker_symbols: TickerSymbolSet,
    pub kinds: BTreeSet<AliasKind>,
}

impl AliasEntry {
    /// Brand-style phrases (product names) may be accepted in product context
    /// without being capitalized.
    pub fn is_brand(&self) -> bool {
        self.kinds.iter().any(AliasKind::is_brand)
    }
}

/// Case-insensitive, exact-phrase lookup from alias phrase to ticker symbols.
///
/// Every ticker referenced by an entry is guaranteed to be tracked by the
/// registry the index was built from.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: BTreeMap<AliasPhrase, AliasEntry>,
}

impl AliasIndex {
    /// Compiles every textual representation of each tracked security: the
    /// ticker symbol itself, the canonical name, the suffix-stripped short
    /// name, and the curated aliases.
    pub fn build(
        registry: &ReferenceRegistry,
        manual_aliases: &[ManualAlias],
    ) -> Result<Self, Error> {
        info!("Building alias index...");

        let mut alias_index = AliasIndex::default();

        for security in registry.securities() {
            let ticker_symbol = &security.ticker_symbol;

            alias_index.insert(
                &security.ticker_symbol.to_lowercase(),
                ticker_symbol,
                AliasKind::TickerSymbol,
            );

            let company_name = normalize_phrase(&security.company_name);
            if !company_name.is_empty() {
                alias_index.insert(
                    &strip_corporate_suffix(&company_name),
                    ticker_symbol,
                    AliasKind::ShortName,
                );
                alias_index.insert(&company_name, ticker_symbol, AliasKind::CompanyName);
            }
        }

        for manual_alias in manual_aliases {
            let ticker_symbol = manual_alias.ticker_symbol.trim().to_uppercase();
            let phrase = normalize_phrase(&manual_alias.alias);

            if !registry.is_tracked(&ticker_symbol) {
                return Err(Error::UntrackedTickerSymbol {
                    source_name: "Alias",
                    entry: manual_alias.alias.clone(),
                    ticker_symbol,
                });
            }

            if phrase.is_empty() {
                return Err(Error::InvalidAlias {
                    ticker_symbol,
                    alias: manual_alias.alias.clone(),
                });
            }

            alias_index.insert(&phrase, &ticker_symbol, manual_alias.kind);
        }

        debug!(
            "Alias index holds {} phrases for {} tracked securities",
            alias_index.len(),
            registry.len()
        );

        Ok(alias_index)
    }

    fn insert(&mut self, phrase: &str, ticker_symbol: &TickerSymbol, kind: AliasKind) {
        let entry = self
            .entries
            .entry(phrase.to_string())
            .or_insert_with(|| AliasEntry {
                phrase: phrase.to_string(),
                ticker_symbols: TickerSymbolSet::new(),
                kinds: BTreeSet::new(),
            });

        entry.ticker_symbols.insert(ticker_symbol.clone());
        entry.kinds.insert(kind);
    }

    /// Returns the tickers for `phrase`, or an empty set if it is unknown.
    ///
    /// The phrase is lowercased and trimmed; no fuzzy matching is performed.
    pub fn lookup(&self, phrase: &str) -> TickerSymbolSet {
        self.get(phrase)
            .map(|entry| entry.ticker_symbols.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, phrase: &str) -> Option<&AliasEntry> {
        self.entries.get(&normalize_phrase(phrase))
    }

    /// Iterates all entries in phrase order.
    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
