const SEARCH_TERMS: [(&str, &str); 9] = [
    ("laptop", "laptop-computer"),
    ("phone", "smartphone-mobile"),
    ("mouse", "computer-mouse"),
    ("macbook", "macbook-laptop"),
    ("iphone", "iphone-smartphone"),
    ("business", "business-person"),
    ("professional", "professional-headshot"),
    ("monitor", "computer-monitor"),
    ("keyboard", "computer-keyboard"),
];

const DEFAULT_SEARCH_TERM: &str = "technology";

/// Maps free-text query to a stock photo search term. The first keyword of the
/// table contained in the lowercased query wins.
pub fn select_search_term(query: &str) -> &'static str {
    let query = query.to_lowercase();

    SEARCH_TERMS
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, term)| *term)
        .unwrap_or(DEFAULT_SEARCH_TERM)
}
