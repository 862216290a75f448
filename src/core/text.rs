//! Text normalisation shared by the scoring rules.
//!
//! Record values that are not text never reach these helpers: the field
//! resolver already turned them into empty strings. Tokenisation is
//! ASCII-oriented, so anything outside `[a-z0-9+]` separates words and `c++`
//! survives as a single token.

#[inline]
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Split a multi-valued field such as `"Python, SQL; R"` into trimmed terms.
#[inline]
pub fn split_list(text: &str) -> Vec<&str> {
    text.split(is_list_delimiter)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}

/// Lowercase and split free text into word tokens.
#[inline]
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_list_delimiter(c: char) -> bool {
    matches!(c, ';' | ',' | '/' | '|' | '\n')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keeps_plus() {
        assert_eq!(words("c++ developer"), vec!["c++", "developer"]);
    }

    #[test]
    fn test_words_splits_punctuation() {
        assert_eq!(words("Data-Analyst (Intern), 2024!"), vec!["data", "analyst", "intern", "2024"]);
        assert!(words("  --  ").is_empty());
    }

    #[test]
    fn test_words_drops_non_ascii_letters() {
        assert_eq!(words("café"), vec!["caf"]);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Python, SQL; R"), vec!["Python", "SQL", "R"]);
        assert_eq!(split_list("a||b / c\n\nd,,"), vec!["a", "b", "c", "d"]);
        assert!(split_list(" ; , ").is_empty());
    }

    #[test]
    fn test_lower() {
        assert_eq!(lower("MiXeD Case"), "mixed case");
        assert_eq!(lower(""), "");
    }
}
