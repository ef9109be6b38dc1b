//! Advisory rules over present header values.
//!
//! Rules are a fixed ordered list. A rule only ever looks at the header it
//! names, inside the category it names; a matching rule overwrites status and
//! recommendation of the entry.

use crate::analysis::report::HeaderStatus;

/// One escalation check.
#[derive(Debug)]
pub struct AdvisoryRule {
    pub category: &'static str,
    pub header: &'static str,
    pub predicate: fn(&str) -> bool,
    pub status: HeaderStatus,
    pub recommendation: Option<&'static str>,
}

impl AdvisoryRule {
    /// Whether this rule targets `header` within `category`.
    pub fn applies_to(&self, category: &str, header: &str) -> bool {
        self.category == category && self.header == header
    }

    pub fn matches(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

fn lacks_max_age(value: &str) -> bool {
    !value.contains("max-age")
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn forbids_storage(value: &str) -> bool {
    value.contains("no-store")
}

/// Rules applied to outgoing response headers, in evaluation order.
pub const RESPONSE_RULES: &[AdvisoryRule] = &[
    AdvisoryRule {
        category: "security",
        header: "strict-transport-security",
        predicate: lacks_max_age,
        status: HeaderStatus::Attention,
        recommendation: Some("set an appropriate max-age (e.g., 31536000)"),
    },
    AdvisoryRule {
        category: "security",
        header: "content-security-policy",
        predicate: is_blank,
        status: HeaderStatus::Alert,
        recommendation: Some("define a restrictive CSP policy"),
    },
    AdvisoryRule {
        category: "cache",
        header: "cache-control",
        predicate: forbids_storage,
        status: HeaderStatus::Secure,
        recommendation: None,
    },
];

/// Inbound headers are only checked for presence.
pub const REQUEST_RULES: &[AdvisoryRule] = &[];
