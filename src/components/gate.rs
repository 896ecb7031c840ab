//! Route gate: renders whatever the navigator decides for the current URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every pathname change is resolved against the session. When a redirect
//! was needed the final address is pushed to the configured sink, which
//! triggers one more (redirect-free) resolution for the new path.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{self, ViewId};
use crate::routing::navigator::{NavigationRequest, Navigator};
use crate::routing::sink::{NavigationStrategy, StrategySink};
use crate::state::session::SessionState;

#[component]
pub fn RouteGate(navigator: Navigator<ViewId>, strategy: NavigationStrategy) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let sink = StrategySink::new(strategy, use_navigate());

    let resolution = Memo::new(move |_| {
        let request = NavigationRequest::new(location.pathname.get());
        match session.with(|state| navigator.resolve(&request, state)) {
            Ok(resolution) => Some(resolution),
            Err(err) => {
                log::error!("navigation to {} failed: {err}", request.target_path());
                None
            }
        }
    });

    Effect::new(move |_| {
        if let Some(resolution) = resolution.get() {
            resolution.report_to(&sink);
        }
    });

    move || match resolution.get() {
        Some(resolution) => pages::render(resolution.view),
        None => view! { <p class="route-error">"This page is unavailable."</p> }.into_any(),
    }
}
