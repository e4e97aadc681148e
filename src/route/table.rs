//! Ordered route table with validation and resolution.

use std::collections::HashMap;

use thiserror::Error;

use super::{Params, RouteEntry, RoutePath, RouteTarget};

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 8;

/// A defect in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteIssue {
    #[error("route `{path}` is malformed: {reason}")]
    Malformed { path: &'static str, reason: String },

    #[error("route `{path}` claims the same paths as `{first}`")]
    Duplicate {
        path: &'static str,
        first: &'static str,
    },

    #[error("catch-all `{path}` is not last and shadows: {}", shadowed.join(", "))]
    ShadowingCatchAll {
        path: &'static str,
        shadowed: Vec<&'static str>,
    },

    #[error("redirect `{from}` -> `{to}` matches no route")]
    DanglingRedirect { from: &'static str, to: &'static str },

    #[error("redirect `{from}` -> `{to}` does not settle within {} hops", MAX_REDIRECTS)]
    RedirectLoop { from: &'static str, to: &'static str },
}

/// A resolved navigation.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// Entry the path finally landed on (never a redirect).
    pub entry: &'a RouteEntry,
    pub params: Params,
    /// Path after redirects.
    pub path: RoutePath,
    /// Paths that redirected, in order.
    pub redirects: Vec<RoutePath>,
}

#[derive(Debug, PartialEq, Eq)]
enum Unresolved {
    NoMatch,
    TooManyRedirects,
}

/// Routes in declaration order; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Check the table, collecting every issue.
    pub fn validate(&self) -> Result<(), Vec<RouteIssue>> {
        let mut issues = Vec::new();
        self.check_patterns(&mut issues);
        self.check_duplicates(&mut issues);
        self.check_catch_alls(&mut issues);
        self.check_redirects(&mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    fn check_patterns(&self, issues: &mut Vec<RouteIssue>) {
        for entry in &self.entries {
            if let Some(reason) = entry.pattern.problem() {
                issues.push(RouteIssue::Malformed {
                    path: entry.pattern.as_str(),
                    reason,
                });
            }
        }
    }

    fn check_duplicates(&self, issues: &mut Vec<RouteIssue>) {
        let mut seen: HashMap<String, &'static str> = HashMap::new();
        for entry in &self.entries {
            let path = entry.pattern.as_str();
            if let Some(&first) = seen.get(&entry.pattern.key()) {
                issues.push(RouteIssue::Duplicate { path, first });
            } else {
                seen.insert(entry.pattern.key(), path);
            }
        }
    }

    fn check_catch_alls(&self, issues: &mut Vec<RouteIssue>) {
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.pattern.is_catch_all() {
                continue;
            }
            let shadowed: Vec<_> = self.entries[i + 1..]
                .iter()
                .filter(|later| entry.pattern.covers(&later.pattern))
                .map(|later| later.pattern.as_str())
                .collect();
            if !shadowed.is_empty() {
                issues.push(RouteIssue::ShadowingCatchAll {
                    path: entry.pattern.as_str(),
                    shadowed,
                });
            }
        }
    }

    fn check_redirects(&self, issues: &mut Vec<RouteIssue>) {
        for entry in &self.entries {
            let RouteTarget::Redirect(to) = &entry.target else {
                continue;
            };
            let (from, target) = (entry.pattern.as_str(), to.as_str());
            match self.follow(to.render(&Params::new())) {
                Ok(_) => {}
                Err(Unresolved::NoMatch) => {
                    issues.push(RouteIssue::DanglingRedirect { from, to: target });
                }
                Err(Unresolved::TooManyRedirects) => {
                    issues.push(RouteIssue::RedirectLoop { from, to: target });
                }
            }
        }
    }

    /// Resolve a browser path, following redirects.
    ///
    /// Returns `None` when nothing matches or redirects do not settle.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.follow(RoutePath::from_browser(path)).ok()
    }

    fn first_match(&self, path: &RoutePath) -> Option<(&RouteEntry, Params)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
    }

    fn follow(&self, mut path: RoutePath) -> Result<RouteMatch<'_>, Unresolved> {
        let mut redirects = Vec::new();
        loop {
            let (entry, params) = self.first_match(&path).ok_or(Unresolved::NoMatch)?;
            let RouteTarget::Redirect(to) = &entry.target else {
                return Ok(RouteMatch {
                    entry,
                    params,
                    path,
                    redirects,
                });
            };
            if redirects.len() == MAX_REDIRECTS {
                return Err(Unresolved::TooManyRedirects);
            }
            let next = to.render(&params);
            redirects.push(std::mem::replace(&mut path, next));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{Layout, View};

    fn home() -> View {
        View::new("Home")
    }

    fn page() -> View {
        View::new("Page")
    }

    fn table(entries: Vec<RouteEntry>) -> RouteTable {
        RouteTable::new(entries)
    }

    #[test]
    fn test_first_match_wins() {
        let t = table(vec![
            RouteEntry::view("/a", "first", page),
            RouteEntry::view("/:any", "second", page),
        ]);
        assert_eq!(t.resolve("/a").unwrap().entry.name, Some("first"));
        assert_eq!(t.resolve("/b").unwrap().entry.name, Some("second"));
    }

    #[test]
    fn test_resolve_params() {
        let t = table(vec![RouteEntry::view("/session/:id", "Session", page).layout(Layout::Main)]);
        let m = t.resolve("/session/42?tab=log").unwrap();
        assert_eq!(m.params["id"], "42");
        assert_eq!(m.entry.effective_layout(), Layout::Main);
        assert!(m.redirects.is_empty());
    }

    #[test]
    fn test_resolve_without_match() {
        let t = table(vec![RouteEntry::view("/", "Home", home)]);
        assert!(t.resolve("/missing").is_none());
    }

    #[test]
    fn test_redirect_followed() {
        let t = table(vec![
            RouteEntry::view("/", "Home", home),
            RouteEntry::redirect("*", "/"),
        ]);
        let m = t.resolve("/nowhere/at/all").unwrap();
        assert_eq!(m.entry.name, Some("Home"));
        assert_eq!(m.path.to_string(), "/");
        assert_eq!(m.redirects, [RoutePath::from_browser("/nowhere/at/all")]);
    }

    #[test]
    fn test_redirect_carries_params() {
        let t = table(vec![
            RouteEntry::redirect("/blog/:slug", "/articles/:slug"),
            RouteEntry::view("/articles/:slug", "Article", page),
        ]);
        let m = t.resolve("/blog/hello").unwrap();
        assert_eq!(m.entry.name, Some("Article"));
        assert_eq!(m.params["slug"], "hello");
    }

    #[test]
    fn test_redirect_param_not_decoded_twice() {
        let t = table(vec![
            RouteEntry::redirect("/blog/:slug", "/articles/:slug"),
            RouteEntry::view("/articles/:slug", "Article", page),
        ]);
        let m = t.resolve("/blog/100%2525").unwrap();
        assert_eq!(m.params["slug"], "100%25");
        let m = t.resolve("/blog/a%2Fb").unwrap();
        assert_eq!(m.params["slug"], "a/b");
    }

    #[test]
    fn test_redirect_loop_gives_up() {
        let t = table(vec![
            RouteEntry::redirect("/a", "/b"),
            RouteEntry::redirect("/b", "/a"),
        ]);
        assert!(t.resolve("/a").is_none());
        let issues = t.validate().unwrap_err();
        assert_eq!(
            issues,
            [
                RouteIssue::RedirectLoop { from: "/a", to: "/b" },
                RouteIssue::RedirectLoop { from: "/b", to: "/a" },
            ]
        );
    }

    #[test]
    fn test_validate_duplicates() {
        let t = table(vec![
            RouteEntry::view("/profile/:id", "Profile", page),
            RouteEntry::view("/profile/:user/", "Other", page),
            RouteEntry::view("/wall", "Wall", page),
        ]);
        assert_eq!(
            t.validate().unwrap_err(),
            [RouteIssue::Duplicate {
                path: "/profile/:user/",
                first: "/profile/:id",
            }]
        );
    }

    #[test]
    fn test_validate_non_terminal_catch_all() {
        let t = table(vec![
            RouteEntry::view("/", "Home", home),
            RouteEntry::redirect("*", "/"),
            RouteEntry::view("/signup", "Signup", page),
            RouteEntry::blank("/invite/:code", "Invite"),
        ]);
        let issues = t.validate().unwrap_err();
        assert_eq!(
            issues,
            [RouteIssue::ShadowingCatchAll {
                path: "*",
                shadowed: vec!["/signup", "/invite/:code"],
            }]
        );
        assert!(issues[0].to_string().contains("/signup, /invite/:code"));
        // still resolvable: the catch-all swallows the later route
        assert_eq!(t.resolve("/signup").unwrap().entry.name, Some("Home"));
    }

    #[test]
    fn test_validate_dangling_redirect() {
        let t = table(vec![
            RouteEntry::view("/", "Home", home),
            RouteEntry::redirect("/old", "/new"),
        ]);
        assert_eq!(
            t.validate().unwrap_err(),
            [RouteIssue::DanglingRedirect { from: "/old", to: "/new" }]
        );
    }

    #[test]
    fn test_validate_malformed() {
        let t = table(vec![RouteEntry::view("/a/*/b", "Bad", page)]);
        let issues = t.validate().unwrap_err();
        assert!(matches!(issues[0], RouteIssue::Malformed { path: "/a/*/b", .. }));
    }

    #[test]
    fn test_validate_ok() {
        let t = table(vec![
            RouteEntry::view("/", "Home", home),
            RouteEntry::view("/docs/*", "Docs", page),
            RouteEntry::view("/wall", "Wall", page),
            RouteEntry::redirect("*", "/"),
        ]);
        assert_eq!(t.validate(), Ok(()));
    }
}
