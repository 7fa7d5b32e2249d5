use std::sync::LazyLock;

use regex::Regex;

/// Any character except `@` and ECMAScript `\s` whitespace. Unlike Unicode
/// `White_Space`, that set includes U+FEFF and excludes U+0085.
const NOT_SPACE_OR_AT: &str = r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{NOT_SPACE_OR_AT}+@{NOT_SPACE_OR_AT}+\.{NOT_SPACE_OR_AT}+$"
    ))
    .expect("email shape regex is valid")
});

/// Check an email address against a deliberately permissive shape:
/// `local@domain.tld`, no whitespace, a single `@`.
///
/// The empty string is accepted so that an untouched field shows no error.
/// This is not RFC 5322 validation.
pub fn validate_email(email: &str) -> bool {
    email.is_empty() || EMAIL_SHAPE.is_match(email)
}

/// Subscriber email, trimmed and guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Parse subscriber email
    pub fn parse(email: &str) -> Result<Self, String> {
        let email = email.trim();
        if email.is_empty() {
            Err("The subscriber email cannot be empty".into())
        } else {
            Ok(Self(email.to_owned()))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
