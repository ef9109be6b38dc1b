//! Header explanation catalogue.
//!
//! # Responsibilities
//! - Hold the static per-header explanations
//! - Resolve value-specific meanings (e.g. `connection: close`)
//! - Explain every header of an inbound request in iteration order
//!
//! # Design Decisions
//! - Catalogue is `static` data; the name index is built once on first use
//! - Only the first comma-separated token of a value selects a specific meaning
//! - Unknown headers degrade to a fixed fallback string, never an error

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::analysis::fields::HeaderFields;

/// Explanation returned for headers missing from the catalogue.
pub const NO_EXPLANATION: &str = "no explanation available for this header.";

/// Static explanation data for one header.
#[derive(Debug)]
pub struct HeaderSpec {
    /// Lower-case header name.
    pub name: &'static str,
    /// Default explanation.
    pub description: &'static str,
    /// Lower-case value token → specific explanation. Empty when the
    /// header's meaning does not depend on its value.
    pub value_meanings: &'static [(&'static str, &'static str)],
}

impl HeaderSpec {
    /// Meaning of this header for the given raw value.
    pub fn meaning_for(&self, value: &str) -> &'static str {
        if self.value_meanings.is_empty() {
            return self.description;
        }

        let token = value
            .split(',')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let token = token.trim();

        self.value_meanings
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, meaning)| *meaning)
            .unwrap_or(self.description)
    }
}

/// One explained header of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
    pub name: String,
    pub value: String,
    pub meaning: &'static str,
}

pub static HEADER_SPECS: &[HeaderSpec] = &[
    // TCP connection
    HeaderSpec {
        name: "connection",
        description: "Controls whether the TCP connection stays open.",
        value_meanings: &[
            (
                "keep-alive",
                "The connection stays open for further requests without a new TCP handshake.",
            ),
            ("close", "The connection is closed once this exchange completes."),
        ],
    },
    // Cache / validation
    HeaderSpec {
        name: "cache-control",
        description: "Caching policy for clients and proxies.",
        value_meanings: &[
            (
                "no-cache",
                "The client must revalidate with the origin before using a cached copy.",
            ),
            ("no-store", "The resource must not be stored in any cache."),
            ("max-age", "Maximum age in seconds for which the resource is fresh."),
            ("must-revalidate", "Caches must revalidate once the resource expires."),
        ],
    },
    HeaderSpec {
        name: "pragma",
        description: "Legacy HTTP/1.0 cache control.",
        value_meanings: &[(
            "no-cache",
            "Asks caches not to serve content without revalidation.",
        )],
    },
    HeaderSpec {
        name: "if-none-match",
        description: "ETag validation; the server answers 304 if unchanged.",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "if-modified-since",
        description: "Date validation; the server answers 304 if unchanged since the given date.",
        value_meanings: &[],
    },
    // Authentication & security
    HeaderSpec {
        name: "authorization",
        description: "Authentication credentials (e.g. Bearer <token>, Basic <creds>).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "cookie",
        description: "Cookies sent by the client (session, tracking, preferences).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "x-forwarded-for",
        description: "Originating client IP address behind a proxy or load balancer.",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "origin",
        description: "Origin (URL) that initiated the request; central to CORS.",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "referer",
        description: "Page from which the request was initiated.",
        value_meanings: &[],
    },
    // Client hints
    HeaderSpec {
        name: "sec-ch-ua",
        description: "Client hint: browser brand and version.",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "sec-ch-ua-mobile",
        description: "Client hint: mobile device or not (?0 = no, ?1 = yes).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "sec-ch-ua-platform",
        description: "Client hint: platform (Windows, macOS, Android...).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "sec-fetch-site",
        description: "Relationship between request initiator and target (same-origin, same-site, cross-site, none).",
        value_meanings: &[
            ("same-origin", "Same origin (identical scheme, host and port)."),
            ("same-site", "Same site, possibly a different subdomain."),
            ("cross-site", "Entirely different origin (riskier)."),
            ("none", "Direct navigation with no initiating context."),
        ],
    },
    HeaderSpec {
        name: "sec-fetch-mode",
        description: "Request mode (navigate, cors, no-cors, same-origin).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "sec-fetch-user",
        description: "Whether a user action triggered the request (?1 = user activation).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "sec-fetch-dest",
        description: "Expected destination of the resource (document, script, style...).",
        value_meanings: &[],
    },
    // Content negotiation
    HeaderSpec {
        name: "content-type",
        description: "MIME type of the request body (application/json, multipart/form-data...).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "accept",
        description: "MIME types the client accepts (JSON, HTML, images...).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "accept-language",
        description: "Preferred response languages (fr-FR, en-US...).",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "accept-encoding",
        description: "Compression methods the client accepts (gzip, br, deflate).",
        value_meanings: &[],
    },
    // Misc
    HeaderSpec {
        name: "host",
        description: "Host name or IP the request is addressed to.",
        value_meanings: &[],
    },
    HeaderSpec {
        name: "upgrade-insecure-requests",
        description: "Client preference for HTTPS (1 = yes).",
        value_meanings: &[("1", "The client asks to upgrade this request from HTTP to HTTPS.")],
    },
    HeaderSpec {
        name: "user-agent",
        description: "Browser, operating system and rendering engine information.",
        value_meanings: &[],
    },
];

static SPEC_INDEX: LazyLock<HashMap<&'static str, &'static HeaderSpec>> =
    LazyLock::new(|| HEADER_SPECS.iter().map(|spec| (spec.name, spec)).collect());

/// Look up the catalogue entry for a header name in any case.
pub fn lookup(name: &str) -> Option<&'static HeaderSpec> {
    SPEC_INDEX.get(name.to_lowercase().as_str()).copied()
}

/// Explain a single header.
pub fn explain_header(name: &str, value: &str) -> &'static str {
    match lookup(name) {
        Some(spec) => spec.meaning_for(value),
        None => NO_EXPLANATION,
    }
}

/// Explain every header present on a request, preserving iteration order.
pub fn explain_headers(fields: &HeaderFields) -> Vec<ParsedHeader> {
    fields
        .iter()
        .map(|(name, value)| ParsedHeader {
            name: name.to_lowercase(),
            value: value.to_string(),
            meaning: explain_header(name, value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_specific_meaning() {
        let meaning = explain_header("Connection", "keep-alive");
        assert_eq!(
            meaning,
            "The connection stays open for further requests without a new TCP handshake."
        );
        assert_ne!(meaning, lookup("connection").unwrap().description);
    }

    #[test]
    fn test_unknown_header_falls_back() {
        assert_eq!(explain_header("X-Unknown-Header", "foo"), NO_EXPLANATION);
    }

    #[test]
    fn test_first_token_only() {
        // "no-store" is the second token, so the first one decides
        assert_eq!(
            explain_header("cache-control", " No-Cache , no-store"),
            "The client must revalidate with the origin before using a cached copy."
        );
    }

    #[test]
    fn test_unmatched_value_uses_description() {
        assert_eq!(
            explain_header("cache-control", "max-age=3600"),
            "Caching policy for clients and proxies."
        );
        assert_eq!(
            explain_header("USER-AGENT", "curl/8.0"),
            "Browser, operating system and rendering engine information."
        );
    }

    #[test]
    fn test_explain_headers_keeps_order() {
        let fields: HeaderFields = vec![
            ("Host", "example.com"),
            ("X-Custom", "1"),
            ("Upgrade-Insecure-Requests", "1"),
        ]
        .into_iter()
        .collect();

        let parsed = explain_headers(&fields);
        let names: Vec<_> = parsed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["host", "x-custom", "upgrade-insecure-requests"]);
        assert_eq!(parsed[0].value, "example.com");
        assert_eq!(parsed[1].meaning, NO_EXPLANATION);
        assert_eq!(
            parsed[2].meaning,
            "The client asks to upgrade this request from HTTP to HTTPS."
        );
    }

    #[test]
    fn test_catalogue_names_are_lowercase_and_unique() {
        for spec in HEADER_SPECS {
            assert_eq!(spec.name, spec.name.to_lowercase());
        }
        assert_eq!(SPEC_INDEX.len(), HEADER_SPECS.len());
    }
}
