//! Frontend configuration.
//!
//! The configuration is embedded in the bundle as TOML. Navigation rules
//! (aliases, division landing pages, admin-only pages) are business data and
//! are consumed here as-is.

use crate::layout::pages::PageId;
use contracts::system::auth::UserInfo;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use thiserror::Error;

use crate::shared::scheduler::RetryPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("default page `{0}` cannot be admin-only")]
    AdminDefaultPage(PageId),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
    pub readiness: ReadinessConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend port on the host serving the bundle.
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationConfig {
    pub default_page: PageId,
    /// localStorage key holding the last visited page.
    pub storage_key: String,
    #[serde(default)]
    pub session_exempt_pages: Vec<PageId>,
    #[serde(default)]
    pub admin_pages: Vec<PageId>,
    /// Logical page → page whose container renders it.
    #[serde(default)]
    pub aliases: HashMap<PageId, PageId>,
    /// Division → forced landing page.
    #[serde(default)]
    pub division_landing: HashMap<String, PageId>,
}

impl NavigationConfig {
    pub fn container_page<'a>(&'a self, page: &'a PageId) -> &'a PageId {
        self.aliases.get(page).unwrap_or(page)
    }

    pub fn requires_admin(&self, page: &PageId) -> bool {
        self.admin_pages.contains(page)
    }

    pub fn exempt_pages(&self) -> HashSet<PageId> {
        self.session_exempt_pages.iter().cloned().collect()
    }

    pub fn landing_for(&self, user: &UserInfo) -> Option<PageId> {
        let division = user.division.as_deref()?;
        self.division_landing
            .get(&division.to_lowercase())
            .cloned()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReadinessConfig {
    /// Delays between fallback readiness checks, each relative to the previous.
    pub fallback_delays_ms: Vec<u64>,
}

impl ReadinessConfig {
    pub fn fallback_delays(&self) -> Vec<Duration> {
        self.fallback_delays_ms
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModulesConfig {
    pub retry_delay_ms: u64,
    pub max_retries: u32,
}

impl ModulesConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.retry_delay_ms))
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[navigation]
default_page = "dashboard"
storage_key = "lastPage"
session_exempt_pages = ["dashboard"]
admin_pages = ["admin-clientes"]

[navigation.aliases]
metals-laser = "metals-produccion"
metals-plegado = "metals-produccion"
metals-punzonado = "metals-produccion"
metals-soldadura = "metals-produccion"
metals-pintura = "metals-produccion"

[navigation.division_landing]
frimetals = "metals-inicio"

[readiness]
fallback_delays_ms = [1000, 3000]

[modules]
retry_delay_ms = 800
max_retries = 1
"#;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(source)?;
    if config.navigation.requires_admin(&config.navigation.default_page) {
        return Err(ConfigError::AdminDefaultPage(
            config.navigation.default_page.clone(),
        ));
    }
    Ok(config)
}
