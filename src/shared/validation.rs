use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating URL slugs (categories, articles, writers)
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "politics", "local-news", "elections2024"
    /// - Invalid: "-news", "news-", "local--news", "News", "local_news"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for badge colors: `#RGB` or `#RRGGBB`
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();

    /// Special page routes must be absolute paths, e.g. "/elections"
    pub static ref ROUTE_REGEX: Regex = Regex::new(r"^/[A-Za-z0-9/_-]*$").unwrap();

    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

/// Derive a slug from a display name. Anything outside ASCII letters, digits,
/// whitespace and hyphens is dropped (Thaana included), whitespace runs become
/// a single hyphen. Non-empty output always matches `SLUG_REGEX`.
pub fn generate_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    HYPHEN_RUN
        .replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("politics"));
        assert!(SLUG_REGEX.is_match("local-news"));
        assert!(SLUG_REGEX.is_match("elections2024"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-news")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("news-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("local--news")); // double hyphen
        assert!(!SLUG_REGEX.is_match("News")); // uppercase
        assert!(!SLUG_REGEX.is_match("local_news")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#0F8A2F"));
        assert!(HEX_COLOR_REGEX.is_match("#fff"));
        assert!(!HEX_COLOR_REGEX.is_match("0F8A2F"));
        assert!(!HEX_COLOR_REGEX.is_match("#12345"));
    }

    #[test]
    fn test_route_regex() {
        assert!(ROUTE_REGEX.is_match("/elections"));
        assert!(ROUTE_REGEX.is_match("/elections/2024"));
        assert!(!ROUTE_REGEX.is_match("elections"));
        assert!(!ROUTE_REGEX.is_match("/has space"));
    }

    #[test]
    fn test_generate_slug() {
        assert_eq!(generate_slug("World News"), "world-news");
        assert_eq!(generate_slug("  Sports & Games  "), "sports-games");
        assert_eq!(generate_slug("Tech -- AI"), "tech-ai");
        assert_eq!(generate_slug("Politics!"), "politics");
    }

    #[test]
    fn test_generate_slug_drops_thaana() {
        let slug = generate_slug("ސިޔާސީ News");
        assert_eq!(slug, "news");
        assert!(SLUG_REGEX.is_match(&slug));

        assert_eq!(generate_slug("Local ރަށު Council"), "local-council");
        assert_eq!(generate_slug("ސިޔާސީ"), "");
        assert_eq!(generate_slug("local_news"), "localnews");
    }
}
