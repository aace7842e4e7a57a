//! Integration-scope extraction

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// A scope token: lowercase namespace, colon, identifier
/// (dots, dashes, underscores, digits, and `*` allowed)
static SCOPE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z][a-z0-9_]*:[a-z0-9_.\-*]+").expect("Invalid regex"));

/// Extract scope tokens like `auth:legacy` or `billing:invoices.v2` from
/// free text. The text is lowercased first; duplicates keep their first
/// occurrence.
pub fn extract_scopes(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut scopes = Vec::new();

    for token in SCOPE_TOKEN.find_iter(&lowered) {
        let token = token.as_str().to_string();
        if seen.insert(token.clone()) {
            scopes.push(token);
        }
    }

    scopes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_scope_tokens_from_prose() {
        let scopes = extract_scopes(
            "Tokens issued under auth:legacy stop working; switch to auth:oauth2 now.",
        );
        assert_eq!(scopes, vec!["auth:legacy".to_string(), "auth:oauth2".to_string()]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let scopes = extract_scopes("auth:legacy then billing:invoices then auth:legacy again");
        assert_eq!(
            scopes,
            vec!["auth:legacy".to_string(), "billing:invoices".to_string()]
        );
    }

    #[test]
    fn uppercase_text_is_lowered_before_matching() {
        let scopes = extract_scopes("Deprecating AUTH:LEGACY for all tenants");
        assert_eq!(scopes, vec!["auth:legacy".to_string()]);
    }

    #[test]
    fn wildcard_and_dotted_identifiers_match() {
        let scopes = extract_scopes("grants under api:* and exports:bulk.v2");
        assert_eq!(scopes, vec!["api:*".to_string(), "exports:bulk.v2".to_string()]);
    }

    #[test]
    fn urls_and_plain_colons_are_not_scopes() {
        assert!(extract_scopes("see https://example.com for details").is_empty());
        assert!(extract_scopes("Fixed: login crash").is_empty());
    }

    #[test]
    fn no_tokens_in_plain_text() {
        assert!(extract_scopes("Updated the billing export job").is_empty());
    }
}
