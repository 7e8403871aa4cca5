use crate::types::TickerSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MentionKind {
    Organization,
    Person,
    ProperNoun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MentionConfidence {
    High,
    Medium,
    Low,
}

impl MentionKind {
    pub fn confidence(&self) -> MentionConfidence {
        match self {
            MentionKind::Organization => MentionConfidence::High,
            MentionKind::Person => MentionConfidence::Medium,
            MentionKind::ProperNoun => MentionConfidence::Low,
        }
    }
}

/// A tagged entity and the tickers it resolved to, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    pub name: String,
    pub tickers: Vec<TickerSymbol>,
    pub kind: MentionKind,
    pub confidence: MentionConfidence,
}

impl EntityMention {
    pub fn new<I>(name: &str, tickers: I, kind: MentionKind) -> Self
    where
        I: IntoIterator<Item = TickerSymbol>,
    {
        EntityMention {
            name: name.to_string(),
            tickers: tickers.into_iter().collect(),
            kind,
            confidence: kind.confidence(),
        }
    }
}
