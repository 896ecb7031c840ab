//! Navigation sinks: where redirect decisions become address changes.
//!
//! The navigator only decides. A sink carries the decision out, either by
//! pushing onto the router's history (session survives) or by a full page
//! load (session is discarded and the user must log in again).

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};

/// Receiver for redirect outcomes.
pub trait NavigationSink {
    fn redirect(&self, path: &str);
}

/// How address changes are carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStrategy {
    /// In-app history update. Keeps the session.
    #[default]
    History,
    /// Full page load. Drops the session.
    Reload,
}

impl NavigationStrategy {
    /// Whether following a link under this strategy keeps the session flag.
    #[must_use]
    pub fn preserves_session(self) -> bool {
        matches!(self, Self::History)
    }
}

/// Redirects through the router's navigate function, replacing the
/// current history entry so "back" skips the guarded address.
#[derive(Clone)]
pub struct HistorySink<F> {
    navigate: F,
}

impl<F> HistorySink<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> NavigationSink for HistorySink<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect(&self, path: &str) {
        log::debug!("history redirect to {path}");
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Redirects by assigning `window.location`, reloading the app.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReloadSink;

impl NavigationSink for ReloadSink {
    fn redirect(&self, path: &str) {
        log::warn!("full page load to {path}; session state will be discarded");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(path) {
                    log::warn!("failed to assign location {path}: {err:?}");
                }
            }
        }
    }
}

/// Sink selected by [`NavigationStrategy`] at startup.
#[derive(Clone)]
pub enum StrategySink<F> {
    History(HistorySink<F>),
    Reload(ReloadSink),
}

impl<F> StrategySink<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(strategy: NavigationStrategy, navigate: F) -> Self {
        match strategy {
            NavigationStrategy::History => Self::History(HistorySink::new(navigate)),
            NavigationStrategy::Reload => Self::Reload(ReloadSink),
        }
    }
}

impl<F> NavigationSink for StrategySink<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect(&self, path: &str) {
        match self {
            Self::History(sink) => sink.redirect(path),
            Self::Reload(sink) => sink.redirect(path),
        }
    }
}
