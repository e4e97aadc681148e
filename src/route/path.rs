//! Browser path normalization.

use percent_encoding::percent_decode_str;
use std::sync::OnceLock;

/// A navigation path, split into decoded segments.
///
/// Segments are split before decoding, so an encoded `%2F` stays inside its
/// segment. Empty segments, the query string and the fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    /// Create from a browser path (strip query and fragment, then decode each segment).
    ///
    /// A segment that is not UTF-8 after decoding keeps its encoded form.
    pub fn from_browser(encoded: &str) -> Self {
        // A leading `//` would parse as a host
        let rooted = format!("/{}", encoded.trim().trim_start_matches('/'));
        let path = strip_query_fragment(&rooted);
        Self::from_segments(path.split('/').map(decode_segment))
    }

    /// Build from already decoded segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        Self { segments }
    }

    /// Non-empty decoded segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

/// `/`-joined, with a literal `/` inside a segment shown as `%2F`.
impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for seg in &self.segments {
            write!(f, "/{}", seg.replace('/', "%2F"))?;
        }
        Ok(())
    }
}

fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Drop query and fragment, keeping the path percent-encoded.
fn strip_query_fragment(path: &str) -> String {
    static BASE: OnceLock<Option<url::Url>> = OnceLock::new();

    let joined = BASE
        .get_or_init(|| url::Url::parse("http://x").ok())
        .as_ref()
        .and_then(|base| base.join(path).ok());

    match joined {
        Some(parsed) => parsed.path().to_string(),
        None => path.split(['?', '#']).next().unwrap_or(path).to_string(),
    }
}
