use crate::types::TickerSymbol;
use crate::Error;
use std::str::FromStr;

/// Where an alias phrase came from.
///
/// Only `Product` phrases are brand-style: they may be accepted in product
/// context even when written in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AliasKind {
    /// The ticker symbol itself.
    TickerSymbol,
    /// The canonical company name.
    CompanyName,
    /// The canonical company name with its corporate suffix removed.
    ShortName,
    /// A curated variant of the company name.
    Name,
    /// A curated product, brand or subsidiary name.
    Product,
    /// A curated executive or founder name.
    Person,
}

impl AliasKind {
    pub fn is_brand(&self) -> bool {
        matches!(self, AliasKind::Product)
    }
}

impl FromStr for AliasKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.trim().to_lowercase().as_str() {
            "name" => Ok(AliasKind::Name),
            "product" => Ok(AliasKind::Product),
            "person" => Ok(AliasKind::Person),
            other => Err(Error::ParserError(format!(
                "Unknown alias kind {:?} (expected one of: name, product, person)",
                other
            ))),
        }
    }
}

/// A curated alias supplied alongside the tracked universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualAlias {
    pub ticker_symbol: TickerSymbol,
    pub alias: String,
    pub kind: AliasKind,
}

impl ManualAlias {
    pub fn new(ticker_symbol: &str, alias: &str, kind: AliasKind) -> Self {
        ManualAlias {
            ticker_symbol: ticker_symbol.trim().to_uppercase(),
            alias: alias.to_string(),
            kind,
        }
    }
}
