use crate::constants::CORPORATE_SUFFIXES;

/// Removes a single trailing corporate suffix ("Inc.", "Corp.", "LLC", ...)
/// from an already-normalized company name.
///
/// Returns the name unchanged if it carries no suffix, or if the suffix is the
/// whole name.
pub fn strip_corporate_suffix(normalized_name: &str) -> String {
    for suffix in CORPORATE_SUFFIXES {
        if let Some(base) = normalized_name.strip_suffix(suffix) {
            // The suffix must be its own word
            if base.ends_with(char::is_whitespace) {
                let base = base.trim_end();

                if !base.is_empty() {
                    return base.to_string();
                }
            }
        }
    }

    normalized_name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_known_suffixes() {
        assert_eq!(strip_corporate_suffix("apple inc."), "apple");
        assert_eq!(strip_corporate_suffix("nvidia corporation"), "nvidia");
        assert_eq!(strip_corporate_suffix("amazon.com inc."), "amazon.com");
    }

    #[test]
    fn test_requires_word_boundary() {
        assert_eq!(strip_corporate_suffix("fabrinet"), "fabrinet");
        assert_eq!(strip_corporate_suffix("costco"), "costco");
    }

    #[test]
    fn test_strips_only_trailing_suffix() {
        assert_eq!(
            strip_corporate_suffix("alphabet inc. class a"),
            "alphabet inc. class a"
        );
    }
}
