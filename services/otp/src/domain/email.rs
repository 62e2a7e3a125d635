use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The part before the first `@`, or the whole input when there is none.
pub fn username_of(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
