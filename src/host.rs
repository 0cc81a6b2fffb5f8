use std::borrow::Cow;
use url::Url;

/// Prefixes `http://` unless the site already names a scheme.
pub fn with_scheme(site: &str) -> Cow<'_, str> {
    if has_scheme(site) {
        Cow::Borrowed(site)
    } else {
        Cow::Owned(format!("http://{}", site))
    }
}

/// True when the text before the first `://` is a valid URL scheme, so a URL
/// carried in a path or query string does not count.
fn has_scheme(site: &str) -> bool {
    let Some((scheme, _)) = site.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub fn site_url(site: &str) -> Option<Url> {
    let url = Url::parse(&with_scheme(site)).ok()?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Some(url),
        _ => None,
    }
}

/// Bare, lowercased hostname of a site, or `None` if there is none to query.
pub fn extract_hostname(site: &str) -> Option<String> {
    site_url(site)?.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("example.com"), "http://example.com");
        assert_eq!(with_scheme("https://example.com"), "https://example.com");
        assert_eq!(with_scheme(""), "http://");
        assert_eq!(with_scheme("svn+ssh://example.com"), "svn+ssh://example.com");
    }

    #[test]
    fn test_with_scheme_ignores_url_in_query() {
        assert_eq!(
            with_scheme("evil.example/login?next=http://bank.example"),
            "http://evil.example/login?next=http://bank.example"
        );
        assert_eq!(
            with_scheme("evil.example#http://bank.example"),
            "http://evil.example#http://bank.example"
        );
        assert_eq!(with_scheme("://example.com"), "http://://example.com");
    }

    #[test]
    fn test_extract_hostname_plain() {
        assert_eq!(extract_hostname("example.com"), Some("example.com".to_string()));
        assert_eq!(extract_hostname("Sub.Example.COM"), Some("sub.example.com".to_string()));
    }

    #[test]
    fn test_extract_hostname_strips_url_parts() {
        assert_eq!(
            extract_hostname("https://www.example.com/a/b?c=d"),
            Some("www.example.com".to_string())
        );
        assert_eq!(
            extract_hostname("evil.example/login?next=http://bank.example"),
            Some("evil.example".to_string())
        );
        assert_eq!(
            extract_hostname("user@example.org:8080/path"),
            Some("example.org".to_string())
        );
    }

    #[test]
    fn test_extract_hostname_rejects_malformed() {
        assert_eq!(extract_hostname(""), None);
        assert_eq!(extract_hostname("foo bar.com"), None);
        assert_eq!(extract_hostname("file:///etc/hosts"), None);
    }
}
