#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests for the shell (screen dispatcher)
//!
//! Validates the shell's responsibilities against the admin console:
//! - Initial render derived from the Router State at mount
//! - Re-render on every Navigation Event
//! - "Page Not Found" fallback for unmatched paths and unregistered screens
//! - Capability-filtered nav bar with the active entry highlighted
//! - No renders after unmount

use navrouter::admin::{self, caps, AdminScreen};
use navrouter::capabilities::{AllowAll, CapabilitySet, DenyAll};
use navrouter::dispatcher::{Body, ScreenTable, Shell, ShellState, NOT_FOUND_PLACEHOLDER};
use navrouter::navigation::{MemoryHistory, NavigateOptions, Router, RouterConfig};
use navrouter::router::RouteParams;
use std::sync::Arc;

fn admin_router(initial_url: &str) -> Router<AdminScreen> {
    Router::new(
        admin::route_table().expect("built-in routes"),
        Arc::new(MemoryHistory::new(initial_url)),
        RouterConfig::with_root(admin::ADMIN_ROOT),
    )
}

/// Screens render a short description of what they would show.
fn admin_screens() -> ScreenTable<AdminScreen, String> {
    ScreenTable::new()
        .screen(AdminScreen::Dashboard, |_: &Router<AdminScreen>, _: &RouteParams| {
            "dashboard".to_string()
        })
        .screen(AdminScreen::Doctor, |_: &Router<AdminScreen>, p: &RouteParams| {
            format!(
                "doctor {} / {}",
                p.get("doctorID").unwrap_or_default(),
                p.get("page").unwrap_or_default()
            )
        })
        .screen(AdminScreen::Pathways, |_: &Router<AdminScreen>, p: &RouteParams| {
            format!("pathways {}", p.get("page").unwrap_or_default())
        })
        .screen(AdminScreen::Visit, |router: &Router<AdminScreen>, p: &RouteParams| {
            format!("visit {} at {}", p.get("page").unwrap_or_default(), router.state().path)
        })
}

#[test]
fn test_initial_render_from_router_state() {
    let router = admin_router("/admin/pathways");
    let shell = Shell::mount(router, admin_screens(), &admin::menu().unwrap(), &AllowAll);
    assert_eq!(shell.state(), ShellState::Rendering(AdminScreen::Pathways));
    assert_eq!(shell.frame().body.to_string(), "pathways list");
}

#[test]
fn test_every_navigation_rerenders() {
    let router = admin_router("/admin/");
    let shell = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &AllowAll);

    router.navigate("doctors/42/profile", NavigateOptions::default());
    assert_eq!(shell.frame().body.to_string(), "doctor 42 / profile");

    router.navigate("case/c1/visit/v2", NavigateOptions::default());
    assert_eq!(shell.frame().body.to_string(), "visit details at case/c1/visit/v2");

    router.navigate("pathways/edit", NavigateOptions::replace());
    assert_eq!(shell.frame().body.to_string(), "pathways edit");
    assert_eq!(shell.render_count(), 4);
}

#[test]
fn test_not_found_fallbacks() {
    let router = admin_router("/admin/");
    let shell = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &AllowAll);

    router.navigate("unknown/path", NavigateOptions::default());
    assert_eq!(shell.state(), ShellState::NotFound);
    assert_eq!(shell.frame().body.to_string(), NOT_FOUND_PLACEHOLDER);

    // Matched route, but no render function registered for the screen
    router.navigate("drugs", NavigateOptions::default());
    assert_eq!(router.state().current.screen(), Some(&AdminScreen::Drugs));
    assert_eq!(shell.state(), ShellState::NotFound);
    assert_eq!(shell.frame().body, Body::NotFound);

    // Fully recoverable by navigating elsewhere
    router.navigate("", NavigateOptions::default());
    assert_eq!(shell.state(), ShellState::Rendering(AdminScreen::Dashboard));
}

#[test]
fn test_nav_bar_respects_capabilities() {
    let menu = admin::menu().unwrap();

    let everyone = Shell::mount(admin_router("/admin/"), admin_screens(), &menu, &DenyAll);
    let names: Vec<String> = everyone.frame().nav.left.iter().map(|l| l.name.clone()).collect();
    assert_eq!(names, vec!["Dashboard", "Drugs"]);

    let guides = CapabilitySet::parse(caps::RESOURCE_GUIDES_VIEW);
    let shell = Shell::mount(admin_router("/admin/"), admin_screens(), &menu, &guides);
    assert!(shell.frame().nav.left.iter().any(|l| l.name == "Guides"));

    let closure = |c: &str| c == caps::FINANCIAL_VIEW;
    let shell = Shell::mount(admin_router("/admin/"), admin_screens(), &menu, &closure);
    let financial = shell
        .frame()
        .nav
        .left
        .iter()
        .find(|l| l.name == "Financial")
        .cloned()
        .expect("financial entry visible");
    assert_eq!(financial.href, "/admin/financial/incoming");
}

#[test]
fn test_active_entry_follows_navigation() {
    let router = admin_router("/admin/");
    let shell = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &AllowAll);
    assert_eq!(shell.frame().nav.active().unwrap().name, "Dashboard");

    router.navigate("pathways/p1/details", NavigateOptions::default());
    assert_eq!(shell.frame().nav.active().unwrap().name, "Pathways");

    router.navigate("nowhere", NavigateOptions::default());
    assert!(shell.frame().nav.active().is_none());
}

#[test]
fn test_unmounted_shell_ignores_navigation() {
    let router = admin_router("/admin/");
    let mut shell = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &AllowAll);
    shell.unmount();

    router.navigate("doctors/1/profile", NavigateOptions::default());
    assert_eq!(shell.frame().body.to_string(), "dashboard");
    assert_eq!(shell.render_count(), 1);
    assert_eq!(router.listener_count(), 0);
}

#[test]
fn test_two_shells_share_one_router() {
    let router = admin_router("/admin/");
    let a = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &AllowAll);
    let b = Shell::mount(router.clone(), admin_screens(), &admin::menu().unwrap(), &DenyAll);

    router.navigate("doctors/9/notes", NavigateOptions::default());
    assert_eq!(a.frame().body, b.frame().body);
    assert_ne!(a.frame().nav.left.len(), b.frame().nav.left.len());

    drop(a);
    assert_eq!(router.listener_count(), 1);
}
