use std::cell::RefCell;

use super::*;
use crate::routing::table::RouteEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Questions,
    Form,
    Quiz,
}

fn table() -> RouteTable<Page> {
    RouteTable::new(vec![
        RouteEntry::exact("/", Page::Questions),
        RouteEntry::exact("/add", Page::Form).guarded(),
        RouteEntry::exact("/play", Page::Quiz),
        RouteEntry::wildcard(Page::Questions),
    ])
    .unwrap()
}

fn navigator() -> Navigator<Page> {
    Navigator::new(table(), "/", DEFAULT_MAX_REDIRECTS).unwrap()
}

fn signed_in() -> SessionState {
    let mut session = SessionState::new();
    session.authenticate();
    session
}

#[derive(Default)]
struct RecordingSink {
    paths: RefCell<Vec<String>>,
}

impl NavigationSink for RecordingSink {
    fn redirect(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

// =============================================================
// navigate
// =============================================================

#[test]
fn unguarded_route_renders_without_session() {
    let outcome = navigator().navigate(&NavigationRequest::new("/"), &SessionState::new());
    assert_eq!(outcome, NavigationOutcome::Render(Page::Questions));
}

#[test]
fn guarded_route_redirects_without_session() {
    let outcome = navigator().navigate(&NavigationRequest::new("/add"), &SessionState::new());
    assert_eq!(outcome, NavigationOutcome::RedirectTo("/".to_owned()));
}

#[test]
fn guarded_route_renders_with_session() {
    let outcome = navigator().navigate(&NavigationRequest::new("/add"), &signed_in());
    assert_eq!(outcome, NavigationOutcome::Render(Page::Form));
}

#[test]
fn guard_follows_session_transitions() {
    let nav = navigator();
    let request = NavigationRequest::new("/add");
    let mut session = SessionState::new();

    session.authenticate();
    assert_eq!(nav.navigate(&request, &session), NavigationOutcome::Render(Page::Form));

    session.signout();
    assert_eq!(nav.navigate(&request, &session), NavigationOutcome::RedirectTo("/".to_owned()));
}

#[test]
fn navigate_does_not_touch_session() {
    let session = SessionState::new();
    let before = session;
    let _outcome = navigator().navigate(&NavigationRequest::new("/add"), &session);
    assert_eq!(session, before);
}

#[test]
fn unmapped_path_renders_default_view() {
    let outcome = navigator().navigate(&NavigationRequest::new("/xyz"), &SessionState::new());
    assert_eq!(outcome, NavigationOutcome::Render(Page::Questions));
}

#[test]
fn unguarded_routes_render_for_either_session() {
    let nav = navigator();
    for session in [SessionState::new(), signed_in()] {
        assert_eq!(nav.navigate(&NavigationRequest::new("/play"), &session), NavigationOutcome::Render(Page::Quiz));
    }
}

#[test]
fn redirect_target_is_configured_fallback() {
    let nav = Navigator::new(table(), "/play", DEFAULT_MAX_REDIRECTS).unwrap();
    let outcome = nav.navigate(&NavigationRequest::new("/add"), &SessionState::new());
    assert_eq!(outcome, NavigationOutcome::RedirectTo("/play".to_owned()));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_direct_render_has_no_redirects() {
    let resolution = navigator().resolve(&NavigationRequest::new("/play/"), &SessionState::new()).unwrap();
    assert_eq!(resolution, Resolution { view: Page::Quiz, path: "/play".to_owned(), redirects: 0 });
}

#[test]
fn resolve_follows_redirect_to_fallback() {
    let resolution = navigator().resolve(&NavigationRequest::new("/add"), &SessionState::new()).unwrap();
    assert_eq!(resolution, Resolution { view: Page::Questions, path: "/".to_owned(), redirects: 1 });
}

#[test]
fn resolve_fallback_always_renders() {
    let nav = navigator();
    for session in [SessionState::new(), signed_in()] {
        let resolution = nav.resolve(&NavigationRequest::new(nav.fallback_path()), &session).unwrap();
        assert_eq!(resolution.redirects, 0);
    }
}

#[test]
fn resolve_agrees_with_navigate_on_repeated_slashes() {
    let nav = navigator();
    for session in [SessionState::new(), signed_in()] {
        let request = NavigationRequest::new("/add//");
        let resolution = nav.resolve(&request, &session).unwrap();
        match nav.navigate(&request, &session) {
            NavigationOutcome::Render(view) => {
                assert_eq!(resolution.view, view);
                assert_eq!(resolution.redirects, 0);
            }
            NavigationOutcome::RedirectTo(target) => {
                assert_eq!(resolution.path, target);
                assert_eq!(resolution.redirects, 1);
            }
        }
    }
}

#[test]
fn repeated_slashes_reach_the_guarded_route() {
    let nav = navigator();
    assert_eq!(nav.navigate(&NavigationRequest::new("/add//"), &signed_in()), NavigationOutcome::Render(Page::Form));
    let resolution = nav.resolve(&NavigationRequest::new("/add//"), &signed_in()).unwrap();
    assert_eq!(resolution, Resolution { view: Page::Form, path: "/add".to_owned(), redirects: 0 });
}

// =============================================================
// Startup checks
// =============================================================

#[test]
fn guarded_fallback_is_a_redirect_cycle() {
    let err = Navigator::new(table(), "/add", DEFAULT_MAX_REDIRECTS).unwrap_err();
    assert!(matches!(err, ConfigError::RedirectCycle { max_redirects: 1, .. }));
    assert!(err.to_string().contains("redirect cycle"));
}

#[test]
fn fallback_caught_by_guarded_prefix_is_a_cycle() {
    let table = RouteTable::new(vec![
        RouteEntry::prefix("/admin", Page::Form).guarded(),
        RouteEntry::wildcard(Page::Questions),
    ])
    .unwrap();
    let err = Navigator::new(table, "/admin/login", DEFAULT_MAX_REDIRECTS).unwrap_err();
    assert!(matches!(err, ConfigError::RedirectCycle { .. }));
}

#[test]
fn zero_redirect_budget_rejects_guarded_routes() {
    let err = Navigator::new(table(), "/", 0).unwrap_err();
    assert!(matches!(err, ConfigError::RedirectCycle { ref path, max_redirects: 0 } if path == "/add"));
}

#[test]
fn zero_redirect_budget_accepts_open_table() {
    let table = RouteTable::new(vec![RouteEntry::exact("/play", Page::Quiz), RouteEntry::wildcard(Page::Questions)])
        .unwrap();
    assert!(Navigator::new(table, "/", 0).is_ok());
}

#[test]
fn redirect_bound_above_limit_is_rejected() {
    let err = Navigator::new(table(), "/add", 20_000_000).unwrap_err();
    assert!(matches!(err, ConfigError::RedirectLimit { max_redirects: 20_000_000, limit: MAX_REDIRECT_LIMIT }));
    assert!(Navigator::new(table(), "/", usize::MAX).is_err());
}

#[test]
fn redirect_bound_at_limit_is_accepted() {
    let nav = Navigator::new(table(), "/", MAX_REDIRECT_LIMIT).unwrap();
    assert_eq!(nav.max_redirects(), MAX_REDIRECT_LIMIT);
}

#[test]
fn guarded_fallback_cycle_is_found_on_first_revisit() {
    let err = Navigator::new(table(), "/add", MAX_REDIRECT_LIMIT).unwrap_err();
    assert!(matches!(err, ConfigError::RedirectCycle { max_redirects: MAX_REDIRECT_LIMIT, .. }));
}

#[test]
fn relative_fallback_is_rejected() {
    let err = Navigator::new(table(), "home", DEFAULT_MAX_REDIRECTS).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFallback { ref path } if path == "home"));
}

#[test]
fn fallback_path_is_normalized() {
    let nav = Navigator::new(table(), "/play/", DEFAULT_MAX_REDIRECTS).unwrap();
    assert_eq!(nav.fallback_path(), "/play");
    assert_eq!(nav.max_redirects(), DEFAULT_MAX_REDIRECTS);
    assert_eq!(nav.table().len(), 4);
}

// =============================================================
// Resolution::report_to
// =============================================================

#[test]
fn report_skips_sink_without_redirect() {
    let sink = RecordingSink::default();
    let resolution = navigator().resolve(&NavigationRequest::new("/"), &SessionState::new()).unwrap();
    resolution.report_to(&sink);
    assert!(sink.paths.borrow().is_empty());
}

#[test]
fn report_sends_final_path_after_redirect() {
    let sink = RecordingSink::default();
    let resolution = navigator().resolve(&NavigationRequest::new("/add"), &SessionState::new()).unwrap();
    resolution.report_to(&sink);
    assert_eq!(sink.paths.borrow().as_slice(), &["/".to_owned()]);
}

#[test]
fn clones_share_the_table() {
    let nav = navigator();
    let copy = nav.clone();
    assert!(std::ptr::eq(nav.table(), copy.table()));
}
