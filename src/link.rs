//! Link detection for text message bodies.

use regex::Regex;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"https?://\S+").ok());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedLink {
    pub url: String,
    /// Host part shown in the link preview, without a leading `www.`.
    pub domain: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
}

/// First `http(s)://` link in `body`, if any.
pub fn extract_link(body: &str) -> Option<DetectedLink> {
    let m = LINK_RE.as_ref()?.find(body)?;
    let url = m.as_str().to_string();
    let domain = domain_of(&url);
    Some(DetectedLink { url, domain })
}

fn domain_of(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let host = rest.split('/').next().unwrap_or(rest);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Splits `body` into plain and link runs, in order.
pub fn split_links(body: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let Some(re) = LINK_RE.as_ref() else {
        out.push(Segment::Text(body.to_string()));
        return out;
    };
    let mut last = 0;
    for m in re.find_iter(body) {
        if m.start() > last {
            out.push(Segment::Text(body[last..m.start()].to_string()));
        }
        out.push(Segment::Link(m.as_str().to_string()));
        last = m.end();
    }
    if last < body.len() {
        out.push(Segment::Text(body[last..].to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_pattern_compiles() {
        assert!(LINK_RE.is_some());
    }

    #[test]
    fn test_extracts_url_and_domain() {
        let link = extract_link("check this https://example.com/path out").unwrap();
        assert_eq!(link.url, "https://example.com/path");
        assert_eq!(link.domain, "example.com");
    }

    #[test]
    fn test_strips_www_and_accepts_http() {
        let link = extract_link("http://www.strava.com/activities/1").unwrap();
        assert_eq!(link.domain, "strava.com");
    }

    #[test]
    fn test_domain_without_path() {
        let link = extract_link("see https://runclub.io").unwrap();
        assert_eq!(link.url, "https://runclub.io");
        assert_eq!(link.domain, "runclub.io");
    }

    #[test]
    fn test_first_match_wins() {
        let body = "a https://one.org/x b https://two.org/y";
        assert_eq!(extract_link(body).unwrap().domain, "one.org");
        assert_eq!(extract_link(body), extract_link(body));
    }

    #[test]
    fn test_no_link() {
        assert_eq!(extract_link("no links here, just ftp://nope"), None);
        assert_eq!(extract_link(""), None);
    }

    #[test]
    fn test_split_links() {
        let parts = split_links("go https://a.com/x now");
        assert_eq!(
            parts,
            vec![
                Segment::Text("go ".into()),
                Segment::Link("https://a.com/x".into()),
                Segment::Text(" now".into()),
            ]
        );
        assert!(split_links("").is_empty());
    }
}
