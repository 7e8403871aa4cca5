/// Exchanges recognized in `EXCHANGE:TICK` notation.
pub const EXCHANGES: &[&str] = &[
    "NYSE", "NASDAQ", "AMEX", "TSX", "LSE", "HKEX", "SSE", "SZSE", "JPX", "BSE", "NSE",
];

/// Exchanges recognized inside a parenthetical, e.g. `(NASDAQ:AAPL)`.
pub const PARENTHETICAL_EXCHANGES: &[&str] = &["NYSE", "NASDAQ", "AMEX"];

/// Words which, directly following a short uppercase word, mark it as a ticker reference.
pub const TICKER_ADJACENT_KEYWORDS: &[&str] = &[
    "stock", "stocks", "shares", "ticker", "traded", "trading", "market", "price", "earnings",
    "revenue", "profit", "loss", "gained", "rose", "fell", "dropped", "climbed", "plunged",
    "surged",
];

/// Short words and abbreviations that look like ticker symbols but almost never are.
///
/// Only applied to the quoted and keyword-adjacent notations.
pub const FALSE_POSITIVE_SYMBOLS: &[&str] = &[
    "A", "I", "THE", "AND", "OR", "BUT", "FOR", "AT", "BY", "TO", "IN", "ON", "IS", "IT", "BE",
    "AS", "OF", "AN", "US", "UK", "EU", "UN", "CEO", "CFO", "CTO", "IPO", "SEC", "FDA", "FTC",
    "DOJ", "FBI", "CIA", "IRS", "LLC", "INC", "LTD", "CORP", "CO", "PLC", "SA", "AG", "NV", "AB",
    "ASA", "ETF", "REIT", "SPV", "LP", "LLP", "ESG", "AI", "ML", "AR", "VR", "API", "SDK", "UI",
    "UX", "HR", "PR", "IR", "RD", "QA", "AM", "PM", "ET", "PT", "MT", "CT", "GMT", "UTC", "EST",
    "PST", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN", "USA", "UAE", "GDP", "CPI", "PPI", "PCE",
    "NFP", "FED", "ECB", "BOE", "BOJ", "PBOC", "IMF", "OECD", "WTO", "WHO", "COVID", "SARS",
    "HIV", "AIDS", "DNA", "RNA", "MRI", "XRAY",
];

/// Corporate suffixes stripped from canonical names to derive a short name.
pub const CORPORATE_SUFFIXES: &[&str] = &[
    "inc.", "inc", "corp.", "corp", "corporation", "company", "co.", "co", "ltd.", "ltd", "llc",
    "plc",
];

/// Stock-related context; a mention within reach of any of these is accepted unconditionally.
pub const STRONG_CONTEXT_KEYWORDS: &[&str] = &[
    "stock", "stocks", "shares", "share", "traded", "trading", "ticker", "equity", "equities",
    "earnings", "revenue", "profit", "loss", "reported", "reports", "rose", "fell", "gained",
    "lost", "jumped", "plunged", "surged", "surges", "dropped", "climbed", "tumbled", "rallied",
    "declined", "soared", "slumped", "market cap", "valuation", "ipo", "nasdaq:", "nyse:", "dow",
    "s&p", "quarterly", "financial", "investors", "investment", "forecast", "guidance",
];

/// Corporate-news context; requires the mention to be capitalized.
pub const WEAK_CONTEXT_KEYWORDS: &[&str] = &[
    "announces", "announced", "announce", "ceo", "cfo", "founder", "chief", "inc.", "inc",
    "corp.", "corp", "corporation", "partnership", "deal", "merger", "acquisition", "acquires",
    "compete", "competes", "launches", "launched", "unveils", "unveiled", "releases", "released",
    "debuts", "debuted", "introduces", "introduced",
];

/// Product/brand context; requires the mention to be capitalized or a brand-style alias.
pub const PRODUCT_CONTEXT_KEYWORDS: &[&str] = &[
    "users", "customers", "platform", "device", "software", "hardware", "app", "service",
    "sales", "sells", "selling", "sold", "buy", "buying", "bought", "upgrade", "update",
    "version", "release", "beta", "features",
];

/// Role words which confirm a surname-only executive mention.
pub const EXECUTIVE_ROLE_KEYWORDS: &[&str] = &[
    "ceo", "chief", "executive", "founder", "president", "chairman", "boss", "head", "leader",
];

/// Suffixes which mark a capitalized span as an organization.
pub const ORGANIZATION_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "incorporated", "co", "company", "ltd", "limited", "llc",
    "plc", "group", "holding", "holdings", "technologies", "systems", "platforms", "bank",
    "motors", "labs", "n.v", "nv", "ag", "sa", "gmbh",
];

/// Honorifics which mark the following capitalized span as a person.
pub const PERSON_PREFIXES: &[&str] = &["mr", "ms", "mrs", "dr", "prof", "sir"];

/// Capitalized words that begin sentences but never name anything.
pub const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "it", "he", "she", "we", "they", "i",
    "you", "my", "our", "your", "his", "her", "their", "its", "in", "on", "at", "to", "for",
    "from", "by", "with", "and", "but", "or", "so", "yet", "if", "because", "as", "after",
    "before", "while", "when", "where", "what", "who", "why", "how", "today", "yesterday",
    "tomorrow", "now", "then", "is", "are", "was", "were", "be", "been", "have", "has", "had",
    "there", "here", "please", "see", "note", "also", "however", "meanwhile",
];

/// Job titles and similar capitalized words which are never entities on their own.
pub const SKIP_WORDS: &[&str] = &[
    "ceo", "cto", "cfo", "coo", "vp", "president", "chairman", "director", "founder", "chief",
];

/// Words allowed to join two capitalized words into a single span (e.g. "Bank of America").
pub const SPAN_CONNECTORS: &[&str] = &["of", "the", "&"];
