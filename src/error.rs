//! Startup configuration errors.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is detected while building the navigator, before the app
//! mounts. A live navigation never produces one of these: route matching is
//! total and session operations cannot fail.

/// Error returned by [`crate::config::RouterConfig::build`] and the routing
/// constructors it calls.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The route table has no catch-all entry.
    #[error("route table has no wildcard fallback entry")]
    MissingWildcard,
    /// A wildcard entry appears before the end of the table.
    #[error("wildcard route at index {index} must be the last entry")]
    WildcardNotLast { index: usize },
    /// The catch-all entry is marked as requiring authentication.
    #[error("wildcard fallback route must not require authentication")]
    GuardedWildcard,
    /// An exact or prefix pattern does not start with `/`.
    #[error("invalid route pattern '{pattern}': paths must start with '/'")]
    InvalidPattern { pattern: String },
    /// The redirect target for guarded routes is not a usable path.
    #[error("invalid fallback path '{path}': paths must start with '/'")]
    InvalidFallback { path: String },
    /// Resolving `path` needs more redirects than the configured bound.
    #[error("redirect cycle resolving '{path}': more than {max_redirects} redirect(s) required")]
    RedirectCycle { path: String, max_redirects: usize },
    /// The configured redirect bound is larger than the supported maximum.
    #[error("max_redirects {max_redirects} exceeds the limit of {limit}")]
    RedirectLimit { max_redirects: usize, limit: usize },
    /// Static JSON configuration could not be parsed.
    #[error("failed to parse router config: {0}")]
    Parse(#[from] serde_json::Error),
}
