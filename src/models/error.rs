use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid ticker symbol: {0:?} (expected 1-5 ASCII letters)")]
    InvalidTickerSymbol(String),

    #[error("Duplicate ticker symbol: {0}")]
    DuplicateTickerSymbol(String),

    #[error("{source_name} {entry:?} references untracked ticker symbol {ticker_symbol}")]
    UntrackedTickerSymbol {
        source_name: &'static str,
        entry: String,
        ticker_symbol: String,
    },

    #[error("Invalid alias for {ticker_symbol}: {alias:?}")]
    InvalidAlias {
        ticker_symbol: String,
        alias: String,
    },

    #[error("Executive {name:?} is mapped to both {first} and {second}")]
    ConflictingExecutive {
        name: String,
        first: String,
        second: String,
    },

    #[error("Pattern Error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Tagger Error: {0}")]
    TaggerError(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
