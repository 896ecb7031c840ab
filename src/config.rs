//! Static router configuration supplied once at startup.
//!
//! The table can come from JSON or from the compiled-in product default.
//! Either way [`RouterConfig::build`] runs every startup check; there is no
//! API for registering routes afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pages::ViewId;
use crate::routing::navigator::{DEFAULT_MAX_REDIRECTS, Navigator};
use crate::routing::sink::NavigationStrategy;
use crate::routing::table::{RouteEntry, RouteTable};

pub const DEFAULT_FALLBACK_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig<V> {
    /// Entries in match order, catch-all last.
    pub routes: Vec<RouteEntry<V>>,
    /// Redirect target for guarded routes visited without a session.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    #[serde(default)]
    pub strategy: NavigationStrategy,
}

fn default_fallback_path() -> String {
    DEFAULT_FALLBACK_PATH.to_owned()
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

impl<V: DeserializeOwned> RouterConfig<V> {
    /// Parse a config from JSON. Validation happens in [`Self::build`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown view names.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl<V: Clone + Debug> RouterConfig<V> {
    /// Validate the table and redirect bound and build the navigator.
    ///
    /// # Errors
    ///
    /// Any table or redirect error from [`RouteTable::new`] and
    /// [`Navigator::new`].
    pub fn build(self) -> Result<Navigator<V>, ConfigError> {
        let table = RouteTable::new(self.routes)?;
        Navigator::new(table, &self.fallback_path, self.max_redirects)
    }
}

impl RouterConfig<ViewId> {
    /// The trivia product's route table.
    #[must_use]
    pub fn product() -> Self {
        Self {
            routes: vec![
                RouteEntry::exact("/", ViewId::Questions),
                RouteEntry::exact("/add", ViewId::AddQuestion).guarded(),
                RouteEntry::exact("/play", ViewId::Play),
                RouteEntry::wildcard(ViewId::Questions),
            ],
            fallback_path: default_fallback_path(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            strategy: NavigationStrategy::History,
        }
    }
}
