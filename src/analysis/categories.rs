//! Header category tables for each direction.
//!
//! Request and response sides have distinct tables and distinct rule sets.
//! Each table entry pairs a lower-case header name with the hint used when
//! the header is missing.

use crate::analysis::rules::{AdvisoryRule, REQUEST_RULES, RESPONSE_RULES};

/// Which side of the exchange a category set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Request,
    Response,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Request => "request",
            Direction::Response => "response",
        }
    }
}

/// A named group of related headers.
#[derive(Debug)]
pub struct HeaderCategory {
    pub name: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
}

/// The categories and advisory rules used to classify one direction.
#[derive(Debug)]
pub struct CategorySet {
    pub direction: Direction,
    pub categories: &'static [HeaderCategory],
    pub rules: &'static [AdvisoryRule],
}

impl CategorySet {
    /// Rules targeting `header` in `category`, in evaluation order.
    pub fn rules_for<'a>(
        &'a self,
        category: &'a str,
        header: &'a str,
    ) -> impl Iterator<Item = &'static AdvisoryRule> + 'a {
        self.rules.iter().filter(move |r| r.applies_to(category, header))
    }
}

/// Outgoing response headers.
pub static HEADER_CATEGORIES: CategorySet = CategorySet {
    direction: Direction::Response,
    categories: &[
        HeaderCategory {
            name: "security",
            headers: &[
                ("strict-transport-security", "Forces HTTPS (HSTS)"),
                ("content-security-policy", "Content Security Policy (CSP)"),
                ("x-content-type-options", "Prevents MIME sniffing"),
                ("x-frame-options", "Clickjacking protection"),
                ("referrer-policy", "Controls what the Referer header discloses"),
                ("permissions-policy", "Per-feature permissions (camera, microphone, etc.)"),
                ("expect-ct", "Certificate Transparency expectation"),
                ("feature-policy", "Feature policy (legacy)"),
            ],
        },
        HeaderCategory {
            name: "cache",
            headers: &[
                ("cache-control", "Cache control"),
                ("expires", "Expiration"),
                ("pragma", "HTTP/1.0 cache control"),
                ("etag", "Conditional validation"),
                ("last-modified", "Last modification date"),
            ],
        },
        HeaderCategory {
            name: "cors",
            headers: &[
                ("access-control-allow-origin", "Allowed origins (CORS)"),
                ("access-control-allow-methods", "Allowed methods (CORS)"),
                ("access-control-allow-headers", "Allowed headers (CORS)"),
                ("access-control-max-age", "CORS preflight cache duration"),
            ],
        },
        HeaderCategory {
            name: "content",
            headers: &[
                ("content-type", "MIME type"),
                ("content-length", "Content length"),
                ("content-encoding", "Content encoding"),
            ],
        },
        HeaderCategory {
            name: "others",
            headers: &[
                ("server", "Server software information"),
                ("via", "Proxy or intermediary"),
                ("x-powered-by", "Technology in use"),
            ],
        },
    ],
    rules: RESPONSE_RULES,
};

/// Incoming request headers.
pub static REQUEST_CATEGORIES: CategorySet = CategorySet {
    direction: Direction::Request,
    categories: &[
        HeaderCategory {
            name: "authentication",
            headers: &[
                (
                    "authorization",
                    "Carries authentication credentials (e.g. Bearer token, Basic auth)",
                ),
                ("proxy-authorization", "Authentication for an intermediate proxy"),
            ],
        },
        HeaderCategory {
            name: "client",
            headers: &[
                ("user-agent", "Identifies the browser or HTTP client"),
                ("from", "User e-mail address (rarely used)"),
                ("referer", "Page that triggered the request"),
                ("origin", "Origin of the request (relevant to CORS)"),
            ],
        },
        HeaderCategory {
            name: "content",
            headers: &[
                ("content-type", "MIME type of the data sent in the request"),
                ("content-length", "Length in bytes of the request body"),
                ("content-encoding", "Encoding applied to the request body"),
            ],
        },
        HeaderCategory {
            name: "caching",
            headers: &[
                ("if-modified-since", "Validates the cache against the modification date"),
                ("if-none-match", "Validates the cache against the ETag"),
            ],
        },
        HeaderCategory {
            name: "security",
            headers: &[
                ("cookie", "Sends the cookies associated with the domain"),
                ("x-csrf-token", "Protection against CSRF attacks (if defined)"),
                ("dnt", "Signals that the user does not want to be tracked (Do Not Track)"),
            ],
        },
        HeaderCategory {
            name: "networking",
            headers: &[
                ("host", "Domain name and port of the target server"),
                ("x-forwarded-for", "Originating client IP address when proxied"),
                ("connection", "Controls TCP connection handling (e.g. keep-alive)"),
            ],
        },
    ],
    rules: REQUEST_RULES,
};
