pub mod char_window;
pub use char_window::char_window;

pub mod is_valid_ticker_symbol;
pub use is_valid_ticker_symbol::is_valid_ticker_symbol;

pub mod join_article_text;
pub use join_article_text::join_article_text;

pub mod normalize_phrase;
pub use normalize_phrase::normalize_phrase;

pub mod strip_corporate_suffix;
pub use strip_corporate_suffix::strip_corporate_suffix;

pub mod word_boundary_pattern;
pub use word_boundary_pattern::word_boundary_pattern;

pub mod to_storage_value;
pub use to_storage_value::to_storage_value;
