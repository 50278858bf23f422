// src/graph/url.rs
//! URL clean-up applied before pages and links are matched against each other.

/// Normalizes a crawled URL so that equivalent links compare equal.
///
/// A trailing `index.html` is dropped; otherwise any `#fragment` is removed.
/// Line breaks and surrounding whitespace never survive.
#[must_use]
pub fn sanitize(url: &str) -> String {
    let cleaned: String = url.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let cleaned = cleaned.trim();

    if let Some(stripped) = cleaned.strip_suffix("index.html") {
        return stripped.to_string();
    }

    match cleaned.find('#') {
        Some(idx) => cleaned[..idx].to_string(),
        None => cleaned.to_string(),
    }
}

/// Resolves a link `href` against the URL of the page it appeared on.
///
/// Absolute URLs pass through. Scheme-relative (`//host/p`), root-relative
/// (`/p`), query or fragment only (`?q`, `#f`) and path-relative (`p`, `../p`)
/// forms are joined onto `base`, with `.` and `..` segments removed.
#[must_use]
pub fn resolve(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return base.to_string();
    }
    if has_scheme(href) {
        return href.to_string();
    }
    let Some((scheme, rest)) = base.split_once("://") else {
        return href.to_string();
    };
    if let Some(network) = href.strip_prefix("//") {
        return format!("{scheme}://{network}");
    }

    let (authority, base_path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, "/"),
    };
    let base_path = base_path.split(['?', '#']).next().unwrap_or("/");

    if href.starts_with('#') || href.starts_with('?') {
        return format!("{scheme}://{authority}{base_path}{href}");
    }
    let joined = if href.starts_with('/') {
        href.to_string()
    } else {
        let dir = match base_path.rfind('/') {
            Some(idx) => &base_path[..=idx],
            None => "/",
        };
        format!("{dir}{href}")
    };
    format!("{scheme}://{authority}{}", remove_dot_segments(&joined))
}

fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `path` must start with `/`. Any query or fragment is kept as is.
fn remove_dot_segments(path: &str) -> String {
    let (path, tail) = match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    };
    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let mut out: Vec<&str> = Vec::with_capacity(segments.len());
    for (idx, segment) in segments.iter().enumerate() {
        let last = idx + 1 == segments.len();
        match *segment {
            "." => {}
            ".." => {
                out.pop();
            }
            other => {
                out.push(other);
                continue;
            }
        }
        if last {
            out.push("");
        }
    }
    format!("/{}{tail}", out.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_forms() {
        let base = "http://a.edu/olin/hours.html";
        assert_eq!(resolve(base, "maps"), "http://a.edu/olin/maps");
        assert_eq!(resolve(base, "/maps"), "http://a.edu/maps");
        assert_eq!(resolve(base, "../maps/"), "http://a.edu/maps/");
        assert_eq!(resolve(base, "./"), "http://a.edu/olin/");
        assert_eq!(resolve(base, ".."), "http://a.edu/");
        assert_eq!(resolve(base, "#today"), "http://a.edu/olin/hours.html#today");
        assert_eq!(resolve(base, "//b.edu/x"), "http://b.edu/x");
    }

    #[test]
    fn test_resolve_keeps_absolute_and_bare_host() {
        assert_eq!(resolve("http://a.edu/x", "https://b.edu/y"), "https://b.edu/y");
        assert_eq!(resolve("http://a.edu/x", "mailto:desk@a.edu"), "mailto:desk@a.edu");
        assert_eq!(resolve("http://a.edu", "maps"), "http://a.edu/maps");
        assert_eq!(resolve("http://a.edu/x?q=1", "y"), "http://a.edu/y");
        assert_eq!(resolve("http://a.edu/x", ""), "http://a.edu/x");
    }

    #[test]
    fn test_strips_index_html() {
        assert_eq!(
            sanitize("http://www.library.cornell.edu/olin/index.html"),
            "http://www.library.cornell.edu/olin/"
        );
    }

    #[test]
    fn test_strips_fragment() {
        assert_eq!(sanitize("http://a.edu/hours#today"), "http://a.edu/hours");
        assert_eq!(sanitize("http://a.edu/#"), "http://a.edu/");
    }

    #[test]
    fn test_removes_line_breaks() {
        assert_eq!(sanitize("  http://a.edu/\nmaps\r\n"), "http://a.edu/maps");
    }

    #[test]
    fn test_plain_url_unchanged() {
        assert_eq!(sanitize("http://a.edu/maps"), "http://a.edu/maps");
    }
}
