//! Route path patterns.
//!
//! | Segment  | Matches                          |
//! |----------|----------------------------------|
//! | `wall`   | exactly `wall`                   |
//! | `:id`    | one non-empty segment, as `id`   |
//! | `*`      | everything left, including none  |

use std::collections::BTreeMap;

use super::RoutePath;

/// Captured `:name` parameters.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw {
            "*" => Self::CatchAll,
            _ => match raw.strip_prefix(':') {
                Some(name) => Self::Param(name.to_string()),
                None => Self::Static(raw.to_string()),
            },
        }
    }
}

/// A parsed route path such as `/session/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: &'static str,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern. Malformed patterns still parse; [`Pattern::problem`]
    /// reports what is wrong with them.
    pub fn parse(raw: &'static str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        Self { raw, segments }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.raw
    }

    /// Whether the pattern ends in `*`.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll))
    }

    /// Shape of the pattern with parameter names erased.
    ///
    /// `/profile/:id` and `/profile/:user` share the key `/profile/:`, since
    /// they claim the same concrete paths.
    pub fn key(&self) -> String {
        let parts: Vec<_> = self
            .segments
            .iter()
            .map(|seg| match seg {
                Segment::Static(s) => s.as_str(),
                Segment::Param(_) => ":",
                Segment::CatchAll => "*",
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Whether every path `other` matches is already matched by this
    /// catch-all pattern.
    pub fn covers(&self, other: &Pattern) -> bool {
        let Some((Segment::CatchAll, prefix)) = self.segments.split_last() else {
            return false;
        };
        prefix.len() <= other.segments.len()
            && prefix.iter().zip(&other.segments).all(|pair| match pair {
                (Segment::Static(a), Segment::Static(b)) => a == b,
                (Segment::Param(_), Segment::Static(_) | Segment::Param(_)) => true,
                _ => false,
            })
    }

    /// Describe a malformed pattern, if it is one.
    pub fn problem(&self) -> Option<String> {
        if !self.raw.starts_with('/') && self.raw != "*" {
            return Some("pattern must start with `/`".to_string());
        }

        let mut seen = Vec::new();
        for (i, seg) in self.segments.iter().enumerate() {
            match seg {
                Segment::Param(name) if name.is_empty() => {
                    return Some("parameter without a name".to_string());
                }
                Segment::Param(name) if seen.contains(&name) => {
                    return Some(format!("parameter `{name}` appears twice"));
                }
                Segment::Param(name) => seen.push(name),
                Segment::CatchAll if i + 1 != self.segments.len() => {
                    return Some("`*` must be the last segment".to_string());
                }
                _ => {}
            }
        }
        None
    }

    /// Match a path, returning the captured parameters.
    pub fn matches(&self, path: &RoutePath) -> Option<Params> {
        let mut params = Params::new();
        let mut segments = path.segments();

        for seg in &self.segments {
            match seg {
                Segment::CatchAll => return Some(params),
                Segment::Static(expected) => {
                    if segments.next()? != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), segments.next()?.to_string());
                }
            }
        }

        segments.next().is_none().then_some(params)
    }

    /// Fill `:name` segments from `params`.
    ///
    /// Unknown parameters stay as written, so `/blog/:slug` with no `slug`
    /// renders unchanged. Parameter values are already decoded and are not
    /// decoded again.
    pub fn render(&self, params: &Params) -> RoutePath {
        RoutePath::from_segments(self.segments.iter().map(|seg| match seg {
            Segment::Static(s) => s.clone(),
            Segment::Param(name) => params
                .get(name)
                .cloned()
                .unwrap_or_else(|| format!(":{name}")),
            Segment::CatchAll => "*".to_string(),
        }))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw)
    }
}
