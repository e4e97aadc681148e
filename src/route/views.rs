//! The application's route table.

use super::{Layout, RouteEntry, RouteTable, View};

/// Declare one lazy loader per view component.
macro_rules! view_loaders {
    ($($loader:ident => $id:literal),* $(,)?) => {
        $(
            fn $loader() -> View {
                View::new($id)
            }
        )*
    };
}

view_loaders! {
    home => "Home",
    activity_page => "ActivityPage",
    welcome => "Welcome",
    login => "Login",
    your_activity => "YourActivity",
    active_notices => "ActiveNotices",
    settings => "Settings",
    server_error => "Err",
    ban => "Ban",
    staff => "Staff",
    profile => "Profile",
    signup => "Signup",
    forbidden => "Forbidden",
    automation => "Automation",
    wall => "Wall",
    audit => "Audit",
    sessions => "Sessions",
    session => "Session",
    not_ready => "NotReady",
    tasks => "Tasks",
}

/// Routes in match order; the catch-all redirect comes last.
pub fn app_routes() -> RouteTable {
    use Layout::Main;

    RouteTable::new(vec![
        RouteEntry::view("/", "Home", home).layout(Main),
        RouteEntry::view("/audit", "audit", audit).layout(Main),
        RouteEntry::view("/automation", "automation", automation).layout(Main),
        RouteEntry::view("/sessions", "Sessions", sessions).layout(Main),
        RouteEntry::view("/nr", "Not ready", not_ready).layout(Layout::Default),
        RouteEntry::view("/session/:id", "Session", session).layout(Main),
        RouteEntry::view("/wall", "Wall", wall).layout(Main),
        RouteEntry::view("/welcome", "Welcome", welcome),
        RouteEntry::view("/signup", "Signup", signup),
        RouteEntry::blank("/invite/:code", "Invite"),
        RouteEntry::view("/error", "Server Error", server_error),
        RouteEntry::view("/forbidden", "Forbidden", forbidden),
        RouteEntry::view("/settings", "Settings", settings).layout(Main),
        RouteEntry::view("/profile/:id", "Profile", profile).layout(Main),
        RouteEntry::view("/login", "Login", login),
        RouteEntry::view("/activity", "activity", activity_page).layout(Main),
        RouteEntry::view("/youractivity", "Your activity", your_activity).layout(Main),
        RouteEntry::view("/reviewa", "Revuiew notices", active_notices).layout(Main),
        RouteEntry::view("/staff", "Staff", staff).layout(Main),
        RouteEntry::view("/ban", "ban", ban).layout(Main),
        RouteEntry::view("/tasks", "Tasks", tasks).layout(Main),
        RouteEntry::redirect("*", "/"),
    ])
}
