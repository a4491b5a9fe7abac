#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::router::RouteTable;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn table() -> RouteTable<String> {
    RouteTable::builder()
        .route("", "dashboard".to_string())
        .unwrap()
        .route("doctors", "doctorSearch".to_string())
        .unwrap()
        .route("doctors/:id", "doctorDetail".to_string())
        .unwrap()
        .build()
}

fn router_at(url: &str) -> (Router<String>, Arc<MemoryHistory>) {
    let history = Arc::new(MemoryHistory::new(url));
    let router = Router::new(
        table(),
        Arc::clone(&history) as Arc<dyn History>,
        RouterConfig::with_root("/admin/"),
    );
    (router, history)
}

fn screen(s: &str) -> Current<String> {
    Current::Screen(s.to_string())
}

#[test]
fn test_initial_state_from_history() {
    let (router, history) = router_at("/admin/doctors/3");
    let state = router.state();
    assert_eq!(state.current, screen("doctorDetail"));
    assert_eq!(state.params.get("id"), Some("3"));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_navigate_pushes_history_and_emits() {
    let (router, history) = router_at("/admin/");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = router.on_route_change(move |ev| {
        seen_clone
            .lock()
            .unwrap()
            .push((ev.cause, ev.state.path.clone(), ev.previous.path.clone()));
    });

    router.navigate("doctors/7", NavigateOptions::push());

    assert_eq!(history.entries(), vec!["/admin/", "/admin/doctors/7"]);
    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![(NavigationCause::Push, "doctors/7".to_string(), String::new())]
    );
}

#[test]
fn test_navigate_replace_history() {
    let (router, history) = router_at("/admin/");
    router.navigate("doctors", NavigateOptions::replace());
    assert_eq!(history.entries(), vec!["/admin/doctors"]);
}

#[test]
fn test_navigate_is_idempotent_in_result() {
    let (router, _history) = router_at("/admin/");
    let first = router.navigate("doctors/7", NavigateOptions::default());
    let second = router.navigate("doctors/7", NavigateOptions::default());
    assert_eq!(*first, *second);
}

#[test]
fn test_unknown_path_is_not_found() {
    let (router, history) = router_at("/admin/");
    let state = router.navigate("unknown/path", NavigateOptions::default());
    assert!(state.current.is_not_found());
    assert!(state.params.is_empty());
    assert_eq!(state.path, "unknown/path");
    assert_eq!(history.current_url(), "/admin/unknown/path");
}

#[test]
fn test_query_is_kept_but_not_matched() {
    let (router, history) = router_at("/admin/");
    let state = router.navigate("/doctors?q=smith", NavigateOptions::replace());
    assert_eq!(state.current, screen("doctorSearch"));
    assert_eq!(state.query.get("q"), Some("smith"));
    assert_eq!(history.current_url(), "/admin/doctors?q=smith");
}

#[test]
fn test_repeated_query_keys_survive_history_and_reload() {
    let (router, history) = router_at("/admin/");
    let state = router.navigate("doctors?id=1&id=2&sort=name", NavigateOptions::push());
    assert_eq!(state.query.get("id"), Some("2"));
    assert_eq!(history.current_url(), "/admin/doctors?id=1&id=2&sort=name");

    let state = router.replace_table(table());
    assert_eq!(state.raw_query, "id=1&id=2&sort=name");
    assert_eq!(state.location(), "doctors?id=1&id=2&sort=name");

    router.navigate("doctors/4", NavigateOptions::push());
    let url = history.back().unwrap();
    let state = router.handle_pop_state(&url);
    assert_eq!(state.location(), "doctors?id=1&id=2&sort=name");
}

#[test]
fn test_unsubscribed_listener_gets_nothing() {
    let (router, _history) = router_at("/admin/");
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = Arc::clone(&count);
    let sub = router.on_route_change(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    router.navigate("doctors", NavigateOptions::default());
    router.off_route_change(&sub);
    router.off_route_change(&sub);
    for _ in 0..10 {
        router.navigate("doctors/1", NavigateOptions::default());
    }

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(router.listener_count(), 0);
}

#[test]
fn test_dropping_subscription_deregisters() {
    let (router, _history) = router_at("/admin/");
    {
        let _sub = router.on_route_change(|_| {});
        assert_eq!(router.listener_count(), 1);
    }
    assert_eq!(router.listener_count(), 0);
}

#[test]
fn test_listener_removed_mid_dispatch_is_skipped() {
    let (router, _history) = router_at("/admin/");
    let second_calls = Arc::new(AtomicUsize::new(0));
    let victim: Arc<Mutex<Option<Subscription<String>>>> = Arc::new(Mutex::new(None));

    let victim_clone = Arc::clone(&victim);
    let _first = router.on_route_change(move |_| {
        if let Some(sub) = victim_clone.lock().unwrap().as_ref() {
            sub.cancel();
        }
    });
    let calls = Arc::clone(&second_calls);
    let second = router.on_route_change(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
    });
    *victim.lock().unwrap() = Some(second);

    router.navigate("doctors", NavigateOptions::default());
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_pop_state_does_not_write_history() {
    let (router, history) = router_at("/admin/");
    router.navigate("doctors", NavigateOptions::default());
    router.navigate("doctors/9", NavigateOptions::default());

    let causes = Arc::new(Mutex::new(Vec::new()));
    let causes_clone = Arc::clone(&causes);
    let _sub = router.on_route_change(move |ev| causes_clone.lock().unwrap().push(ev.cause));

    let url = history.back().unwrap();
    let state = router.handle_pop_state(&url);
    assert_eq!(state.current, screen("doctorSearch"));
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 1);

    let url = history.forward().unwrap();
    let state = router.handle_pop_state(&url);
    assert_eq!(state.params.get("id"), Some("9"));
    assert_eq!(history.len(), 3);

    assert_eq!(
        *causes.lock().unwrap(),
        vec![NavigationCause::PopState, NavigationCause::PopState]
    );
}

#[test]
fn test_follow_link() {
    let (router, history) = router_at("/admin/");
    match router.follow_link("/admin/doctors/4") {
        LinkOutcome::Handled(state) => assert_eq!(state.params.get("id"), Some("4")),
        LinkOutcome::External => panic!("expected in-app navigation"),
    }

    let before = router.state();
    assert!(matches!(router.follow_link("/logout"), LinkOutcome::External));
    assert!(matches!(
        router.follow_link("https://example.com/admin/doctors"),
        LinkOutcome::External
    ));
    assert_eq!(*router.state(), *before);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_replace_table_re_resolves() {
    let (router, history) = router_at("/admin/drugs");
    assert!(router.state().current.is_not_found());

    let table = RouteTable::builder()
        .route("drugs", "drugs".to_string())
        .unwrap()
        .build();
    let state = router.replace_table(table);
    assert_eq!(state.current, screen("drugs"));
    assert_eq!(history.len(), 1);
    assert_eq!(router.table().len(), 1);
}

/// Session history that yields the thread on every write, so concurrent
/// navigations interleave more often.
struct YieldingHistory(MemoryHistory);

impl History for YieldingHistory {
    fn current_url(&self) -> String {
        self.0.current_url()
    }

    fn push(&self, url: &str) {
        std::thread::yield_now();
        self.0.push(url);
    }

    fn replace(&self, url: &str) {
        std::thread::yield_now();
        self.0.replace(url);
    }
}

#[test]
fn test_reload_never_reverts_concurrent_navigation() {
    let history = Arc::new(YieldingHistory(MemoryHistory::new("/admin/")));
    let router = Router::new(
        table(),
        Arc::clone(&history) as Arc<dyn History>,
        RouterConfig::with_root("/admin/"),
    );

    let reverted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&reverted);
    let _sub = router.on_route_change(move |ev| {
        if ev.cause == NavigationCause::Reload && ev.state.location() != ev.previous.location() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let navigator = {
        let router = router.clone();
        std::thread::spawn(move || {
            for i in 0..200 {
                router.navigate(&format!("doctors/{}", i), NavigateOptions::push());
            }
        })
    };
    let reloader = {
        let router = router.clone();
        std::thread::spawn(move || {
            for _ in 0..200 {
                router.replace_table(table());
            }
        })
    };
    navigator.join().unwrap();
    reloader.join().unwrap();

    assert_eq!(reverted.load(Ordering::SeqCst), 0);
    assert_eq!(router.state().path, "doctors/199");
    assert_eq!(history.current_url(), router.href(&router.state().location()));
}

#[test]
fn test_listener_may_navigate() {
    let (router, _history) = router_at("/admin/");
    let weak = router.downgrade();
    let _sub = router.on_route_change(move |ev| {
        if ev.state.current.is_not_found() {
            if let Some(r) = weak.upgrade() {
                r.navigate("", NavigateOptions::replace());
            }
        }
    });
    router.navigate("nowhere", NavigateOptions::default());
    assert_eq!(router.state().current, screen("dashboard"));
}

#[test]
fn test_superseded_event_is_not_delivered_to_later_listeners() {
    let (router, _history) = router_at("/admin/");
    let weak = router.downgrade();
    let _redirect = router.on_route_change(move |ev| {
        if ev.state.current.is_not_found() {
            if let Some(r) = weak.upgrade() {
                r.navigate("doctors", NavigateOptions::replace());
            }
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _recorder = router.on_route_change(move |ev| {
        sink.lock().unwrap().push((ev.cause, ev.state.current.clone()));
    });

    router.navigate("nowhere", NavigateOptions::default());

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(NavigationCause::Replace, screen("doctorSearch"))]
    );
}

#[test]
fn test_teardown_clears_listeners() {
    let (router, _history) = router_at("/admin/");
    let sub = router.on_route_change(|_| {});
    router.teardown();
    assert_eq!(router.listener_count(), 0);
    // Cancelling after teardown is a no-op
    sub.cancel();
}

#[test]
fn test_href() {
    let (router, _history) = router_at("/admin/");
    assert_eq!(router.root(), "/admin/");
    assert_eq!(router.href("doctors"), "/admin/doctors");
    assert_eq!(router.href(""), "/admin/");
}
