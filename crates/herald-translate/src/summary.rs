//! Audience-facing summary lines

use herald_core::types::{ChangeType, ExtractedChange};

/// Line for customer-success and engineering readers
pub fn cs_line(change: &ExtractedChange) -> String {
    format!(
        "{} — {}: {}",
        change.change_type.title(),
        change.area,
        change.description
    )
}

/// Awareness note for support teams
pub fn support_line(change: &ExtractedChange) -> String {
    format!("Support awareness — {}", change.description)
}

/// Customer-facing line.
///
/// Fixes lead with "Fix:", security changes collapse to a constant notice
/// that leaks no detail, and everything else reads as an update.
pub fn customer_line(change: &ExtractedChange) -> String {
    match change.change_type {
        ChangeType::Fixed => format!("Fix: {}", change.description),
        ChangeType::Security => "Security improvements applied.".to_string(),
        _ => format!("Update: {}", change.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(change_type: ChangeType, area: &str, description: &str) -> ExtractedChange {
        ExtractedChange::new(change_type, area, description)
    }

    #[test]
    fn cs_line_leads_with_type_and_area() {
        let line = cs_line(&change(ChangeType::Added, "Auth", "new OAuth login flow"));
        assert_eq!(line, "Added — Auth: new OAuth login flow");
    }

    #[test]
    fn support_line_carries_description() {
        let line = support_line(&change(ChangeType::Fixed, "Billing", "invoice rounding bug"));
        assert_eq!(line, "Support awareness — invoice rounding bug");
    }

    #[test]
    fn customer_line_varies_by_type() {
        assert_eq!(
            customer_line(&change(ChangeType::Fixed, "Billing", "invoice rounding bug")),
            "Fix: invoice rounding bug"
        );
        assert_eq!(
            customer_line(&change(ChangeType::Security, "Security", "patched parser")),
            "Security improvements applied."
        );
        assert_eq!(
            customer_line(&change(ChangeType::Deprecated, "API", "v1 uploads")),
            "Update: v1 uploads"
        );
    }
}
