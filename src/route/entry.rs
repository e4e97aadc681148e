//! Route table entries.

use super::Pattern;

/// Page layout wrapping a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Application shell with navigation.
    Main,
    /// Bare page, used when a route names no layout.
    #[default]
    Default,
}

impl Layout {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Opaque handle to a loaded view component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View(&'static str);

impl View {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Deferred view load, invoked only when its route is activated.
pub type ViewLoader = fn() -> View;

/// What a route leads to.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    View(ViewLoader),
    /// Navigate elsewhere; `:name` segments are filled from the match.
    Redirect(Pattern),
    /// Named route with no component of its own.
    Blank,
}

/// One declared route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: Pattern,
    pub name: Option<&'static str>,
    pub layout: Option<Layout>,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn view(path: &'static str, name: &'static str, loader: ViewLoader) -> Self {
        Self {
            pattern: Pattern::parse(path),
            name: Some(name),
            layout: None,
            target: RouteTarget::View(loader),
        }
    }

    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            pattern: Pattern::parse(path),
            name: None,
            layout: None,
            target: RouteTarget::Redirect(Pattern::parse(to)),
        }
    }

    pub fn blank(path: &'static str, name: &'static str) -> Self {
        Self {
            pattern: Pattern::parse(path),
            name: Some(name),
            layout: None,
            target: RouteTarget::Blank,
        }
    }

    /// Tag the route with a layout.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Layout the route renders in.
    pub fn effective_layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    /// Short description of the target for listings. Does not load views.
    pub fn describe_target(&self) -> String {
        match &self.target {
            RouteTarget::View(_) => "view".to_string(),
            RouteTarget::Redirect(to) => format!("-> {to}"),
            RouteTarget::Blank => "(blank)".to_string(),
        }
    }
}
