//! Guarded navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL collaborator hands every address change to [`Navigator::resolve`].
//! A guarded route reached without a session becomes a redirect to the
//! configured fallback path, which is evaluated again through the same
//! guard logic. Redirect chains are capped so a fallback that is itself
//! guarded is reported instead of looping; [`Navigator::new`] runs that
//! check eagerly so it surfaces before the app mounts.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::fmt::Debug;
use std::sync::Arc;

use super::sink::NavigationSink;
use super::table::{RouteTable, normalize_path};
use crate::error::ConfigError;
use crate::state::session::SessionState;

pub const DEFAULT_MAX_REDIRECTS: usize = 1;
/// Largest redirect bound a configuration may ask for.
pub const MAX_REDIRECT_LIMIT: usize = 8;

/// A single navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    target_path: String,
}

impl NavigationRequest {
    #[must_use]
    pub fn new(target_path: impl Into<String>) -> Self {
        Self { target_path: target_path.into() }
    }

    #[must_use]
    pub fn target_path(&self) -> &str {
        &self.target_path
    }
}

/// Result of evaluating one request: exactly one of render or redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome<V> {
    Render(V),
    RedirectTo(String),
}

/// Final view after following redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<V> {
    pub view: V,
    /// Normalized path that produced `view`.
    pub path: String,
    /// Number of redirects followed to get here.
    pub redirects: usize,
}

impl<V> Resolution<V> {
    /// Push the final address to `sink` when the request was redirected.
    pub fn report_to(&self, sink: &impl NavigationSink) {
        if self.redirects > 0 {
            sink.redirect(&self.path);
        }
    }
}

/// Navigation controller composing the route table and the session guard.
#[derive(Debug)]
pub struct Navigator<V> {
    table: Arc<RouteTable<V>>,
    fallback_path: Arc<str>,
    max_redirects: usize,
}

impl<V> Clone for Navigator<V> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            fallback_path: Arc::clone(&self.fallback_path),
            max_redirects: self.max_redirects,
        }
    }
}

impl<V: Clone + Debug> Navigator<V> {
    /// Build a navigator and verify no redirect chain exceeds `max_redirects`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RedirectLimit`] if `max_redirects` exceeds
    /// [`MAX_REDIRECT_LIMIT`], [`ConfigError::InvalidFallback`] if
    /// `fallback_path` is not rooted and [`ConfigError::RedirectCycle`] if an
    /// unauthenticated visit to the fallback or to any route cannot be
    /// resolved within the bound.
    pub fn new(table: RouteTable<V>, fallback_path: &str, max_redirects: usize) -> Result<Self, ConfigError> {
        if max_redirects > MAX_REDIRECT_LIMIT {
            return Err(ConfigError::RedirectLimit { max_redirects, limit: MAX_REDIRECT_LIMIT });
        }
        if !fallback_path.starts_with('/') {
            return Err(ConfigError::InvalidFallback { path: fallback_path.to_owned() });
        }
        let navigator =
            Self { table: Arc::new(table), fallback_path: normalize_path(fallback_path).into(), max_redirects };
        navigator.check_redirects()?;
        Ok(navigator)
    }

    /// Decide a single step: render the matched view or redirect.
    #[must_use]
    pub fn navigate(&self, request: &NavigationRequest, session: &SessionState) -> NavigationOutcome<V> {
        let route = self.table.match_path(request.target_path());
        if route.requires_auth && !session.is_authenticated() {
            log::debug!("navigate: {} requires auth, redirecting to {}", request.target_path(), self.fallback_path);
            return NavigationOutcome::RedirectTo(self.fallback_path.to_string());
        }
        log::debug!("navigate: {} renders {:?}", request.target_path(), route.view);
        NavigationOutcome::Render(route.view.clone())
    }

    /// Follow redirects until a view renders.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RedirectCycle`] when more than `max_redirects` redirects
    /// would be needed or a redirect lands on a path already visited.
    pub fn resolve(&self, request: &NavigationRequest, session: &SessionState) -> Result<Resolution<V>, ConfigError> {
        let mut path = normalize_path(request.target_path());
        let mut visited = vec![path.clone()];
        loop {
            match self.navigate(&NavigationRequest::new(path.as_str()), session) {
                NavigationOutcome::Render(view) => {
                    return Ok(Resolution { view, path, redirects: visited.len() - 1 });
                }
                NavigationOutcome::RedirectTo(next) => {
                    let next = normalize_path(&next);
                    if visited.len() > self.max_redirects || visited.contains(&next) {
                        return Err(ConfigError::RedirectCycle {
                            path: request.target_path().to_owned(),
                            max_redirects: self.max_redirects,
                        });
                    }
                    visited.push(next.clone());
                    path = next;
                }
            }
        }
    }

    // An authenticated session never redirects, so checking a fresh
    // unauthenticated one covers every runtime request.
    fn check_redirects(&self) -> Result<(), ConfigError> {
        let session = SessionState::new();
        self.resolve(&NavigationRequest::new(&*self.fallback_path), &session)?;
        for literal in self.table.entries().filter_map(|entry| entry.pattern.literal()) {
            self.resolve(&NavigationRequest::new(literal), &session)?;
        }
        Ok(())
    }
}

impl<V> Navigator<V> {
    #[must_use]
    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }
}
