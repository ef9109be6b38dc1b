//! Category reports.
//!
//! # Responsibilities
//! - Classify a header map against a direction's category set
//! - Mark declared headers present or absent
//! - Apply the direction's advisory rules to present headers
//!
//! # Design Decisions
//! - Reports are plain values rebuilt per exchange, never cached
//! - Sorted maps keep serialized output byte-identical for identical input
//! - Header values keep their case; only names are normalized

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::categories::{CategorySet, HEADER_CATEGORIES, REQUEST_CATEGORIES};
use crate::analysis::fields::HeaderFields;

/// Recommendation prefix for declared headers missing from the map.
pub const ABSENT_RECOMMENDATION_PREFIX: &str = "add this header to improve security: ";

/// Outcome for one declared header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStatus {
    Present,
    Attention,
    Alert,
    Secure,
    Absent,
}

impl HeaderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStatus::Present => "present",
            HeaderStatus::Attention => "attention",
            HeaderStatus::Alert => "alert",
            HeaderStatus::Secure => "secure",
            HeaderStatus::Absent => "absent",
        }
    }

    /// Statuses that call for operator attention.
    pub fn is_finding(&self) -> bool {
        matches!(self, HeaderStatus::Attention | HeaderStatus::Alert)
    }
}

/// Report entry for one declared header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntryReport {
    pub name: &'static str,
    pub value: Option<String>,
    pub status: HeaderStatus,
    pub recommendation: Option<String>,
    pub description: &'static str,
}

/// Category name → header name → entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryReport(BTreeMap<&'static str, BTreeMap<&'static str, HeaderEntryReport>>);

impl CategoryReport {
    pub fn get(&self, category: &str, header: &str) -> Option<&HeaderEntryReport> {
        self.0.get(category).and_then(|entries| entries.get(header))
    }

    pub fn category(&self, category: &str) -> Option<&BTreeMap<&'static str, HeaderEntryReport>> {
        self.0.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Every entry with its category.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &HeaderEntryReport)> {
        self.0
            .iter()
            .flat_map(|(category, entries)| entries.values().map(move |e| (*category, e)))
    }

    /// Entries whose status is `attention` or `alert`.
    pub fn findings(&self) -> impl Iterator<Item = (&'static str, &HeaderEntryReport)> {
        self.entries().filter(|(_, e)| e.status.is_finding())
    }
}

/// Classify `fields` against every header declared in `set`.
pub fn classify_by_category(fields: &HeaderFields, set: &CategorySet) -> CategoryReport {
    let normalized = fields.normalized();
    let mut report = BTreeMap::new();

    for category in set.categories {
        let mut entries = BTreeMap::new();

        for &(name, description) in category.headers {
            let entry = match normalized.get(name) {
                Some(&value) => {
                    let mut entry = HeaderEntryReport {
                        name,
                        value: Some(value.to_string()),
                        status: HeaderStatus::Present,
                        recommendation: None,
                        description,
                    };
                    for rule in set.rules_for(category.name, name) {
                        if rule.matches(value) {
                            entry.status = rule.status;
                            entry.recommendation = rule.recommendation.map(str::to_string);
                        }
                    }
                    entry
                }
                None => HeaderEntryReport {
                    name,
                    value: None,
                    status: HeaderStatus::Absent,
                    recommendation: Some(format!("{}{}", ABSENT_RECOMMENDATION_PREFIX, description)),
                    description,
                },
            };
            entries.insert(name, entry);
        }

        report.insert(category.name, entries);
    }

    CategoryReport(report)
}

/// Classify inbound headers. Presence only, no advisory rules.
pub fn analyze_request(fields: &HeaderFields) -> CategoryReport {
    classify_by_category(fields, &REQUEST_CATEGORIES)
}

/// Classify outgoing headers with the response advisory rules.
pub fn analyze_response(fields: &HeaderFields) -> CategoryReport {
    classify_by_category(fields, &HEADER_CATEGORIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HeaderFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_absent_headers_get_recommendation() {
        let report = analyze_response(&HeaderFields::default());

        for (_, entry) in report.entries() {
            assert_eq!(entry.status, HeaderStatus::Absent);
            assert!(entry.value.is_none());
            let recommendation = entry.recommendation.as_deref().unwrap();
            assert!(recommendation.starts_with(ABSENT_RECOMMENDATION_PREFIX));
            assert!(recommendation.len() > ABSENT_RECOMMENDATION_PREFIX.len());
        }

        let hsts = report.get("security", "strict-transport-security").unwrap();
        assert_eq!(
            hsts.recommendation.as_deref(),
            Some("add this header to improve security: Forces HTTPS (HSTS)")
        );
    }

    #[test]
    fn test_present_value_preserved() {
        let report = analyze_response(&fields(&[
            ("X-Frame-Options", "SAMEORIGIN"),
            ("Content-Type", "Text/HTML; Charset=UTF-8"),
        ]));

        let xfo = report.get("security", "x-frame-options").unwrap();
        assert_eq!(xfo.status, HeaderStatus::Present);
        assert_eq!(xfo.value.as_deref(), Some("SAMEORIGIN"));
        assert!(xfo.recommendation.is_none());

        let ct = report.get("content", "content-type").unwrap();
        assert_eq!(ct.value.as_deref(), Some("Text/HTML; Charset=UTF-8"));
    }

    #[test]
    fn test_hsts_max_age_zero_does_not_escalate() {
        // Only the literal substring is checked, not the number.
        let report = analyze_response(&fields(&[("strict-transport-security", "max-age=0")]));
        let hsts = report.get("security", "strict-transport-security").unwrap();
        assert_eq!(hsts.status, HeaderStatus::Present);
        assert!(hsts.recommendation.is_none());
    }

    #[test]
    fn test_hsts_without_max_age() {
        let report = analyze_response(&fields(&[("Strict-Transport-Security", "includeSubDomains")]));
        let hsts = report.get("security", "strict-transport-security").unwrap();
        assert_eq!(hsts.status, HeaderStatus::Attention);
        assert_eq!(
            hsts.recommendation.as_deref(),
            Some("set an appropriate max-age (e.g., 31536000)")
        );
    }

    #[test]
    fn test_blank_csp_is_alert() {
        let report = analyze_response(&fields(&[("content-security-policy", "   ")]));
        let csp = report.get("security", "content-security-policy").unwrap();
        assert_eq!(csp.status, HeaderStatus::Alert);
        assert_eq!(csp.value.as_deref(), Some("   "));
        assert_eq!(csp.recommendation.as_deref(), Some("define a restrictive CSP policy"));
    }

    #[test]
    fn test_no_store_is_secure() {
        let report = analyze_response(&fields(&[("cache-control", "no-store, max-age=0")]));
        let cc = report.get("cache", "cache-control").unwrap();
        assert_eq!(cc.status, HeaderStatus::Secure);
        assert!(cc.recommendation.is_none());
    }

    #[test]
    fn test_request_side_ignores_response_rules() {
        let input = fields(&[("cache-control", "no-store"), ("content-type", "application/json")]);
        let report = analyze_request(&input);

        // cache-control is not declared on the request side at all
        assert!(report.entries().all(|(_, e)| e.name != "cache-control"));
        assert!(report.entries().all(|(_, e)| !matches!(
            e.status,
            HeaderStatus::Secure | HeaderStatus::Attention | HeaderStatus::Alert
        )));
        assert_eq!(
            report.get("content", "content-type").unwrap().status,
            HeaderStatus::Present
        );
    }

    #[test]
    fn test_request_report_shape() {
        let report = analyze_request(&fields(&[("Host", "localhost:3000"), ("DNT", "1")]));
        let categories: Vec<_> = report.categories().collect();
        assert_eq!(
            categories,
            ["authentication", "caching", "client", "content", "networking", "security"]
        );

        let host = report.get("networking", "host").unwrap();
        assert_eq!(host.status, HeaderStatus::Present);
        assert_eq!(host.description, "Domain name and port of the target server");
        assert_eq!(report.get("security", "dnt").unwrap().value.as_deref(), Some("1"));
        assert_eq!(
            report.get("authentication", "authorization").unwrap().status,
            HeaderStatus::Absent
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let input = fields(&[
            ("Strict-Transport-Security", "preload"),
            ("Cache-Control", "no-store"),
            ("Server", "header-lab"),
        ]);
        let first = analyze_response(&input);
        let second = analyze_response(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_findings() {
        let report = analyze_response(&fields(&[
            ("strict-transport-security", "preload"),
            ("content-security-policy", ""),
            ("cache-control", "no-store"),
        ]));
        let findings: Vec<_> = report.findings().map(|(c, e)| (c, e.name)).collect();
        assert_eq!(
            findings,
            [
                ("security", "content-security-policy"),
                ("security", "strict-transport-security"),
            ]
        );
    }

    #[test]
    fn test_serialized_entry() {
        let report = analyze_response(&fields(&[("cache-control", "no-store")]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cache"]["cache-control"]["status"], "secure");
        assert_eq!(json["cache"]["cache-control"]["value"], "no-store");
        assert!(json["cache"]["cache-control"]["recommendation"].is_null());
        assert_eq!(json["cors"]["access-control-max-age"]["status"], "absent");
    }
}
