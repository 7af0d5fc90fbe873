use once_cell::sync::Lazy;
use regex::Regex;

// local-part@domain.tld: no whitespace, a single '@', a dot after it.
// The pattern is a literal, so the expect can only fire if it is edited badly.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Checks an address against the simple `local@domain.tld` shape.
pub fn is_simple_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
