//! Ordered route table with a single deterministic matcher.
//!
//! Entries are evaluated first-match-wins. The catch-all entry is held apart
//! from the ordered list so matching is total without a runtime check.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Structural pattern a route matches against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPattern {
    /// The path itself and nothing else.
    Exact(String),
    /// The path and everything nested below it (`/play`, `/play/round/2`).
    Prefix(String),
    /// Any path. Only valid as the last entry.
    Wildcard,
}

impl PathPattern {
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Literal path of an exact or prefix pattern.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Exact(path) | Self::Prefix(path) => Some(path),
            Self::Wildcard => None,
        }
    }

    /// Test a path that has already gone through [`normalize_path`].
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(pattern) => path.eq_ignore_ascii_case(pattern),
            Self::Prefix(pattern) => prefix_matches(pattern, path),
            Self::Wildcard => true,
        }
    }

    fn normalized(self) -> Result<Self, ConfigError> {
        match self {
            Self::Exact(path) => Ok(Self::Exact(checked_literal(path)?)),
            Self::Prefix(path) => Ok(Self::Prefix(checked_literal(path)?)),
            Self::Wildcard => Ok(Self::Wildcard),
        }
    }
}

fn checked_literal(path: String) -> Result<String, ConfigError> {
    if path.starts_with('/') {
        Ok(normalize_path(&path))
    } else {
        Err(ConfigError::InvalidPattern { pattern: path })
    }
}

fn prefix_matches(pattern: &str, path: &str) -> bool {
    if pattern == "/" {
        return path.starts_with('/');
    }
    let Some(head) = path.get(..pattern.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(pattern) && matches!(path.as_bytes().get(pattern.len()), None | Some(b'/'))
}

/// Canonical form used for matching.
///
/// Drops any query string or fragment and every trailing slash; an empty
/// path becomes `/`. Applying it twice gives the same result.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    let path = path.trim_end_matches('/');
    if path.is_empty() { "/".to_owned() } else { path.to_owned() }
}

/// One row of the route table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry<V> {
    pub pattern: PathPattern,
    pub view: V,
    #[serde(default)]
    pub requires_auth: bool,
}

impl<V> RouteEntry<V> {
    #[must_use]
    pub fn exact(path: impl Into<String>, view: V) -> Self {
        Self { pattern: PathPattern::Exact(path.into()), view, requires_auth: false }
    }

    #[must_use]
    pub fn prefix(path: impl Into<String>, view: V) -> Self {
        Self { pattern: PathPattern::Prefix(path.into()), view, requires_auth: false }
    }

    #[must_use]
    pub fn wildcard(view: V) -> Self {
        Self { pattern: PathPattern::Wildcard, view, requires_auth: false }
    }

    /// Require an authenticated session to render this entry.
    #[must_use]
    pub fn guarded(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// Immutable, validated route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<RouteEntry<V>>,
    fallback: RouteEntry<V>,
}

impl<V> RouteTable<V> {
    /// Validate ordering and build the table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingWildcard`] if the last entry is not a wildcard,
    /// [`ConfigError::WildcardNotLast`] if a wildcard appears earlier,
    /// [`ConfigError::GuardedWildcard`] if the catch-all requires auth and
    /// [`ConfigError::InvalidPattern`] for a literal not starting with `/`.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, ConfigError> {
        let mut routes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if routes.last().is_some_and(|prev: &RouteEntry<V>| prev.pattern.is_wildcard()) {
                return Err(ConfigError::WildcardNotLast { index: index - 1 });
            }
            let RouteEntry { pattern, view, requires_auth } = entry;
            routes.push(RouteEntry { pattern: pattern.normalized()?, view, requires_auth });
        }

        let fallback = match routes.pop() {
            Some(entry) if entry.pattern.is_wildcard() => entry,
            _ => return Err(ConfigError::MissingWildcard),
        };
        if fallback.requires_auth {
            return Err(ConfigError::GuardedWildcard);
        }

        Ok(Self { routes, fallback })
    }

    /// First entry matching `path`, or the catch-all.
    #[must_use]
    pub fn match_path(&self, path: &str) -> &RouteEntry<V> {
        let path = normalize_path(path);
        self.routes.iter().find(|entry| entry.pattern.matches(&path)).unwrap_or(&self.fallback)
    }

    /// Entries in evaluation order, catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }

    #[must_use]
    pub fn fallback(&self) -> &RouteEntry<V> {
        &self.fallback
    }

    /// Number of entries including the catch-all.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }
}
