//! Route table of the web application.
//!
//! ```text
//! app_routes() ──► RouteTable ──validate──► App::start
//!                                              │
//!                  navigate(path) ◄────────────┘
//!                  └─► RoutePath ─► first matching Pattern ─► redirects ─► view loader
//! ```

mod app;
mod entry;
mod path;
mod pattern;
mod table;
mod views;

pub use app::{App, Navigation, ThemeSettings};
pub use entry::{Layout, RouteEntry, RouteTarget, View};
pub use path::RoutePath;
pub use pattern::{Params, Pattern};
pub use table::{RouteIssue, RouteTable};
pub use views::app_routes;
