//! Cross-origin allow-list policy.
//!
//! Requests without an `Origin` header come from non-browser clients and are
//! always let through. Browser requests are let through only when their
//! origin matches an allow-list entry exactly.

/// Origins trusted when no `CORS_ORIGINS` override is configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://127.0.0.1:5500",
    "http://localhost:5500",
    "https://movies.com",
];

/// Decide whether a request declaring `origin` may be served.
pub fn is_origin_allowed<S: AsRef<str>>(origin: Option<&str>, allowed: &[S]) -> bool {
    match origin {
        None => true,
        Some(origin) => allowed.iter().any(|a| a.as_ref() == origin),
    }
}
