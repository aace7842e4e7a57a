//! Keyword-driven change classification
//!
//! Classification is substring matching against fixed keyword tables.
//! Table order is part of the contract: the first matching entry wins,
//! so reordering entries changes classification results.

use regex::Regex;
use std::sync::LazyLock;

use herald_core::types::ChangeType;

/// Ordered change-type table; first match wins
const CHANGE_TYPE_KEYWORDS: &[(ChangeType, &[&str])] = &[
    (ChangeType::Added, &["added", "introduce", "new feature"]),
    (ChangeType::Changed, &["changed", "updated", "modified"]),
    (ChangeType::Fixed, &["fixed", "resolved", "bugfix"]),
    (ChangeType::Deprecated, &["deprecated", "sunset", "removed"]),
    (ChangeType::Security, &["security", "vulnerability", "patched"]),
];

/// Ordered product-area table; first match wins
const AREA_KEYWORDS: &[(&str, &[&str])] = &[
    ("Auth", &["auth", "oauth", "token", "login", "sso"]),
    (
        "Billing",
        &["billing", "invoice", "subscription", "payment", "checkout"],
    ),
    ("API", &["api", "endpoint", "version", "v1", "v2", "schema"]),
    ("Permissions", &["permission", "role", "rbac", "access"]),
    ("UI", &["ui", "dashboard", "page", "button", "modal"]),
    ("Performance", &["latency", "performance", "timeout", "slow"]),
    ("Security", &["security", "vulnerability", "cve", "patched"]),
];

/// Area assigned when no keyword matches
pub const GENERAL_AREA: &str = "General";

/// Leading category marker, e.g. "Fixed:" or "breaking change:"
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(added|fixed|changed|deprecated|security|breaking change)\s*:?\s*")
        .expect("Invalid regex")
});

/// Classify a statement into a change type; unmatched statements are `Changed`
pub fn classify_change_type(statement: &str) -> ChangeType {
    let lowered = statement.to_lowercase();
    for (change_type, keywords) in CHANGE_TYPE_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *change_type;
        }
    }
    ChangeType::Changed
}

/// Classify a statement into a product area; unmatched statements are General
pub fn classify_area(statement: &str) -> &'static str {
    let lowered = statement.to_lowercase();
    for (area, keywords) in AREA_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return area;
        }
    }
    GENERAL_AREA
}

/// Strip a leading category marker from a statement.
///
/// A statement that consists of nothing but a marker keeps its original
/// text, so descriptions are never empty.
pub fn strip_marker(statement: &str) -> String {
    let stripped = MARKER.replace(statement, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        statement.to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_change_type() {
        assert_eq!(classify_change_type("Added new export"), ChangeType::Added);
        assert_eq!(classify_change_type("Updated the docs"), ChangeType::Changed);
        assert_eq!(classify_change_type("Resolved a crash"), ChangeType::Fixed);
        assert_eq!(
            classify_change_type("Sunset the v1 uploads"),
            ChangeType::Deprecated
        );
        assert_eq!(
            classify_change_type("Patched a vulnerability"),
            ChangeType::Security
        );
    }

    #[test]
    fn unmatched_statement_defaults_to_changed() {
        assert_eq!(
            classify_change_type("Polished the onboarding copy"),
            ChangeType::Changed
        );
    }

    #[test]
    fn change_type_table_order_breaks_ties() {
        // "updated" (changed) appears before the security row in the table
        assert_eq!(
            classify_change_type("Updated security token handling"),
            ChangeType::Changed
        );
    }

    #[test]
    fn classifies_areas() {
        assert_eq!(classify_area("OAuth login flow"), "Auth");
        assert_eq!(classify_area("invoice rounding"), "Billing");
        assert_eq!(classify_area("new endpoint schema"), "API");
        assert_eq!(classify_area("role based access"), "Permissions");
        assert_eq!(classify_area("dashboard modal"), "UI");
        assert_eq!(classify_area("latency regression"), "Performance");
        assert_eq!(classify_area("CVE remediation"), "Security");
        assert_eq!(classify_area("general cleanup"), GENERAL_AREA);
    }

    #[test]
    fn area_table_order_breaks_ties() {
        // Auth sits before Security, so "token" wins over "security"
        assert_eq!(classify_area("security token rotation"), "Auth");
    }

    #[test]
    fn strips_leading_markers() {
        assert_eq!(strip_marker("Fixed: login crash"), "login crash");
        assert_eq!(strip_marker("fixed login crash"), "login crash");
        assert_eq!(strip_marker("Breaking change: new auth"), "new auth");
        assert_eq!(strip_marker("Security patched the parser"), "patched the parser");
    }

    #[test]
    fn marker_only_statement_keeps_its_text() {
        assert_eq!(strip_marker("Deprecated"), "Deprecated");
        assert_eq!(strip_marker("fixed:"), "fixed:");
    }

    #[test]
    fn marker_in_midsentence_is_untouched() {
        assert_eq!(
            strip_marker("The importer fixed itself"),
            "The importer fixed itself"
        );
    }
}
