use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Session settings applied while a handler runs inside the legacy runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyScopeConfig {
    pub legacy_dir: PathBuf,
    pub legacy_session_name: String,
    pub default_session_name: String,
}

impl Default for LegacyScopeConfig {
    fn default() -> Self {
        Self {
            legacy_dir: PathBuf::from("legacy"),
            legacy_session_name: "LEGACYSESSID".to_string(),
            default_session_name: "PHPSESSID".to_string(),
        }
    }
}

impl LegacyScopeConfig {
    pub fn new(
        legacy_dir: impl Into<PathBuf>,
        legacy_session_name: impl Into<String>,
        default_session_name: impl Into<String>,
    ) -> Self {
        Self {
            legacy_dir: legacy_dir.into(),
            legacy_session_name: legacy_session_name.into(),
            default_session_name: default_session_name.into(),
        }
    }
}

/// Shared state of the legacy runtime scope. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct LegacyScopeState {
    config: Arc<LegacyScopeConfig>,
    active: Arc<AtomicUsize>,
}

impl LegacyScopeState {
    pub fn new(config: LegacyScopeConfig) -> Self {
        Self {
            config: Arc::new(config),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Opens a scope for `handler`. The scope closes when the guard drops.
    pub fn enter(&self, handler: &'static str) -> LegacyScopeGuard {
        let depth = self.active.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(
            handler,
            session = %self.config.legacy_session_name,
            legacy_dir = %self.config.legacy_dir.display(),
            depth,
            "Legacy scope opened"
        );

        LegacyScopeGuard {
            state: self.clone(),
            handler,
        }
    }

    pub fn active_scopes(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.active_scopes() > 0
    }

    pub fn config(&self) -> &LegacyScopeConfig {
        &self.config
    }
}

/// Open legacy scope. Dropping it restores the default session.
#[derive(Debug)]
#[must_use = "the legacy scope closes as soon as the guard is dropped"]
pub struct LegacyScopeGuard {
    state: LegacyScopeState,
    handler: &'static str,
}

impl LegacyScopeGuard {
    pub fn session_name(&self) -> &str {
        &self.state.config.legacy_session_name
    }

    pub fn handler(&self) -> &'static str {
        self.handler
    }
}

impl Drop for LegacyScopeGuard {
    fn drop(&mut self) {
        let remaining = self.state.active.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);

        tracing::debug!(
            handler = self.handler,
            session = %self.state.config.default_session_name,
            remaining,
            "Legacy scope closed"
        );
    }
}
