//! Application shell: theme plus a validated route table.

use thiserror::Error;

use super::{Layout, Params, RouteIssue, RouteTable, RouteTarget, View, app_routes};
use crate::debug;

/// Theme settings, resolved once before start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    pub dark: bool,
    /// Icon font family, e.g. `mdi`.
    pub icon_font: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark: false,
            icon_font: "mdi".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartError {
    #[error("route table has {} issue(s):\n{}", .0.len(), render_issues(.0))]
    InvalidRoutes(Vec<RouteIssue>),
}

fn render_issues(issues: &[RouteIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub name: Option<&'static str>,
    pub layout: Layout,
    pub params: Params,
    /// Loaded view; `None` for routes without a component.
    pub view: Option<View>,
    /// Path after redirects.
    pub path: String,
}

pub struct App {
    routes: RouteTable,
    theme: ThemeSettings,
}

impl App {
    /// Start with the built-in routes.
    pub fn start(theme: ThemeSettings) -> Result<Self, StartError> {
        Self::with_routes(app_routes(), theme)
    }

    /// Start with a custom table, refusing it when invalid.
    pub fn with_routes(routes: RouteTable, theme: ThemeSettings) -> Result<Self, StartError> {
        routes.validate().map_err(StartError::InvalidRoutes)?;
        debug!("routes"; "started with {} routes, dark={}", routes.entries().len(), theme.dark);
        Ok(Self { routes, theme })
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    /// Resolve `path` and load its view.
    pub fn navigate(&self, path: &str) -> Option<Navigation> {
        let matched = self.routes.resolve(path)?;
        let view = match matched.entry.target {
            RouteTarget::View(load) => {
                let view = load();
                debug!("routes"; "loaded view {view} for {}", matched.path);
                Some(view)
            }
            _ => None,
        };

        Some(Navigation {
            name: matched.entry.name,
            layout: matched.entry.effective_layout(),
            params: matched.params,
            view,
            path: matched.path.to_string(),
        })
    }
}
