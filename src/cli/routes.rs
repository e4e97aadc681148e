//! `distlens routes`: list the route table or resolve one path.

use anyhow::{Result, bail};
use std::fmt::Write;

use crate::config::AppConfig;
use crate::log;
use crate::route::{App, Navigation, RouteTable};

pub fn run_routes(config: &AppConfig, path: Option<&str>) -> Result<()> {
    let app = App::start(config.theme.settings())?;
    log!(
        "routes";
        "theme: {}, icons: {}",
        if app.theme().dark { "dark" } else { "light" },
        app.theme().icon_font
    );

    match path {
        None => print!("{}", render_table(app.routes())),
        Some(path) => match app.navigate(path) {
            Some(nav) => print!("{}", render_navigation(&nav)),
            None => bail!("no route matches `{path}`"),
        },
    }
    Ok(())
}

fn render_table(table: &RouteTable) -> String {
    let width = table
        .entries()
        .iter()
        .map(|e| e.pattern.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in table.entries() {
        let _ = writeln!(
            out,
            "{:<width$}  {:<16}  {:<8}  {}",
            entry.pattern.as_str(),
            entry.name.unwrap_or("-"),
            entry.effective_layout(),
            entry.describe_target(),
        );
    }
    out
}

fn render_navigation(nav: &Navigation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "route:  {}", nav.name.unwrap_or("-"));
    let _ = writeln!(out, "path:   {}", nav.path);
    let _ = writeln!(out, "layout: {}", nav.layout);
    let _ = writeln!(
        out,
        "view:   {}",
        nav.view.map_or_else(|| "(none)".to_string(), |v| v.to_string())
    );
    for (name, value) in &nav.params {
        let _ = writeln!(out, "param:  {name} = {value}");
    }
    out
}
