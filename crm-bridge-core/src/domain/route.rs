use std::collections::BTreeMap;

/// Legacy entry point script served under the install base.
pub const LEGACY_ENTRY_SCRIPT: &str = "/index.php";

/// Transport-independent view of an inbound HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyRequest {
    /// Request path, without query string.
    pub path: String,
    /// Decoded query parameters. Later duplicates win.
    pub query: BTreeMap<String, String>,
    /// Install base (e.g. `/suiteinstance`) when hosted under a sub path.
    pub base: Option<String>,
}

impl LegacyRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
            base: None,
        }
    }

    /// Parses a request target such as `/crm/index.php?module=Contacts`.
    pub fn from_uri(uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };

        let mut request = Self::new(if path.is_empty() { "/" } else { path });
        if let Some(query) = query {
            request.query = url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
        }
        request
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let trimmed = base.trim_end_matches('/');
        self.base = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Non-empty query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Path relative to the install base, with the legacy entry script removed.
    pub fn path_info(&self) -> &str {
        let mut path = self.path.as_str();

        if let Some(base) = self.base.as_deref() {
            if let Some(rest) = path.strip_prefix(base) {
                if rest.is_empty() || rest.starts_with('/') {
                    path = rest;
                }
            }
        }

        path.strip_prefix(LEGACY_ENTRY_SCRIPT).unwrap_or(path)
    }

    /// True when the path addresses the legacy entry point rather than an API.
    pub fn targets_entry_point(&self) -> bool {
        matches!(self.path_info(), "" | "/")
    }
}

/// Module, action and record extracted from legacy query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteIntent {
    pub module: String,
    pub action: Option<String>,
    pub record: Option<String>,
}

impl RouteIntent {
    pub fn from_request(request: &LegacyRequest) -> Option<Self> {
        let module = request.param("module")?;

        Some(Self {
            module: module.to_string(),
            action: request.param("action").map(str::to_string),
            record: request.param("record").map(str::to_string),
        })
    }
}
