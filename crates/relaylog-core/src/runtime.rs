//! Runtime context capability
//!
//! Everything the interpolator and path cleaner read from the host
//! environment goes through `RuntimeContext`: request data, an optional
//! session store, environment variables, the environment name and the three
//! well-known root paths. Nothing is read from implicit global state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Environment variable holding the environment name for `ProcessContext`
pub const ENVIRONMENT_VAR: &str = "RELAYLOG_ENV";

/// Environment name used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Host-provided ambient data
pub trait RuntimeContext: Send + Sync {
    /// Submitted form/body data of the current request
    fn post_data(&self) -> Value;

    /// Query data of the current request
    fn get_data(&self) -> Value;

    /// Session contents, `None` when no session is active
    fn session_data(&self) -> Option<Value>;

    /// Look up an environment variable
    fn env_var(&self, name: &str) -> Option<String>;

    /// Name of the running environment (e.g. "production")
    fn environment(&self) -> String;

    fn app_root(&self) -> Option<&str>;

    fn framework_root(&self) -> Option<&str>;

    fn public_root(&self) -> Option<&str>;
}

/// The three well-known root paths used when cleaning file names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRoots {
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub public: Option<String>,
}

/// Production context backed by the real process environment
///
/// Request data is empty and there is no session; a host serving requests
/// supplies its own `RuntimeContext` instead.
#[derive(Debug, Clone, Default)]
pub struct ProcessContext {
    roots: PathRoots,
}

impl ProcessContext {
    pub fn new(roots: PathRoots) -> Self {
        Self { roots }
    }
}

impl RuntimeContext for ProcessContext {
    fn post_data(&self) -> Value {
        Value::Object(Default::default())
    }

    fn get_data(&self) -> Value {
        Value::Object(Default::default())
    }

    fn session_data(&self) -> Option<Value> {
        None
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn environment(&self) -> String {
        std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
    }

    fn app_root(&self) -> Option<&str> {
        self.roots.app.as_deref()
    }

    fn framework_root(&self) -> Option<&str> {
        self.roots.framework.as_deref()
    }

    fn public_root(&self) -> Option<&str> {
        self.roots.public.as_deref()
    }
}

/// Fully in-memory context
///
/// # Example
///
/// ```
/// use relaylog_core::runtime::{RuntimeContext, StaticContext};
///
/// let ctx = StaticContext::new("testing")
///     .with_env("DB_HOST", "localhost")
///     .with_app_root("/srv/site/app");
///
/// assert_eq!(ctx.environment(), "testing");
/// assert_eq!(ctx.env_var("DB_HOST").as_deref(), Some("localhost"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    environment: String,
    post: Value,
    get: Value,
    session: Option<Value>,
    env: BTreeMap<String, String>,
    roots: PathRoots,
}

impl StaticContext {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            post: Value::Object(Default::default()),
            get: Value::Object(Default::default()),
            ..Default::default()
        }
    }

    pub fn with_post(mut self, post: Value) -> Self {
        self.post = post;
        self
    }

    pub fn with_get(mut self, get: Value) -> Self {
        self.get = get;
        self
    }

    /// Mark a session as active with the given contents
    pub fn with_session(mut self, session: Value) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    pub fn with_app_root(mut self, root: impl Into<String>) -> Self {
        self.roots.app = Some(root.into());
        self
    }

    pub fn with_framework_root(mut self, root: impl Into<String>) -> Self {
        self.roots.framework = Some(root.into());
        self
    }

    pub fn with_public_root(mut self, root: impl Into<String>) -> Self {
        self.roots.public = Some(root.into());
        self
    }
}

impl RuntimeContext for StaticContext {
    fn post_data(&self) -> Value {
        self.post.clone()
    }

    fn get_data(&self) -> Value {
        self.get.clone()
    }

    fn session_data(&self) -> Option<Value> {
        self.session.clone()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn environment(&self) -> String {
        self.environment.clone()
    }

    fn app_root(&self) -> Option<&str> {
        self.roots.app.as_deref()
    }

    fn framework_root(&self) -> Option<&str> {
        self.roots.framework.as_deref()
    }

    fn public_root(&self) -> Option<&str> {
        self.roots.public.as_deref()
    }
}
