//! Root application component, startup checks and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{gate::RouteGate, header::Header};
use crate::config::RouterConfig;
use crate::error::ConfigError;
use crate::pages::ViewId;
use crate::routing::navigator::Navigator;
use crate::routing::sink::NavigationStrategy;
use crate::state::session::SessionState;

/// Validated routing setup handed to [`App`].
#[derive(Clone, Debug)]
pub struct Routing {
    pub navigator: Navigator<ViewId>,
    pub strategy: NavigationStrategy,
}

/// Build the product routing and run every configuration check.
///
/// # Errors
///
/// Any [`ConfigError`]; the app must not start when this fails.
pub fn startup() -> Result<Routing, ConfigError> {
    let config = RouterConfig::product();
    let strategy = config.strategy;
    let navigator = config.build()?;
    log::info!(
        "router ready: {} routes, fallback {}, {strategy:?} navigation",
        navigator.table().len(),
        navigator.fallback_path()
    );
    Ok(Routing { navigator, strategy })
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, routing: Routing) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App routing/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session flag for the lifetime of the page and provides it to
/// the header (writer) and the route gate (reader).
#[component]
pub fn App(routing: Routing) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::new());
    provide_context(session);

    let Routing { navigator, strategy } = routing;

    view! {
        <Stylesheet id="leptos" href="/pkg/trivia.css"/>
        <Title text="Trivia"/>

        <Router>
            <div class="App">
                <Header strategy/>
                <RouteGate navigator strategy/>
            </div>
        </Router>
    }
}
