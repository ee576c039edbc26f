use std::sync::OnceLock;

use regex::Regex;
use url::Url;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// RFC-shaped address check: dot-atom local part, dotted domain with
/// alphanumeric labels. Deliberately rejects the exotic corners (quoted
/// local parts, address literals) the schema has no use for.
pub fn is_email(s: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"(?x)^
            [A-Za-z0-9.!\#$%&'*+/=?^_`{|}~-]+
            @
            [A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?
            (\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+
            $",
        )
        .expect("email pattern is valid")
    });
    re.is_match(s)
}

/// Well-formed absolute URL with a host. Relative references and host-less
/// schemes like `mailto:` fail.
pub fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(is_email("ada@example.com"));
    }

    #[test]
    fn test_email_accepts_plus_tag() {
        assert!(is_email("ada+resume@mail.example.co.uk"));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(!is_email("not-an-email"));
    }

    #[test]
    fn test_email_rejects_missing_tld() {
        assert!(!is_email("ada@localhost"));
    }

    #[test]
    fn test_email_rejects_spaces() {
        assert!(!is_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_url_accepts_https() {
        assert!(is_url("https://example.com/resume"));
    }

    #[test]
    fn test_url_rejects_relative() {
        assert!(!is_url("example.com/resume"));
    }

    #[test]
    fn test_url_rejects_hostless_scheme() {
        assert!(!is_url("mailto:ada@example.com"));
    }

    #[test]
    fn test_url_rejects_garbage() {
        assert!(!is_url("ht!tp://"));
    }
}
