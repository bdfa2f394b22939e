use crate::shared::storage::KeyValueStore;
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// localStorage key of an optional TOML override of the embedded defaults
pub const CONFIG_OVERRIDE_KEY: &str = "app_config_override_v1";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
request_timeout_ms = 15000
fetch_limit = 10000

[tables]
default_page_size = 10
page_size_options = [10, 25, 50, 100]

[export]
company_name = "Warehouse Management"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Port of the backend on the page's host
    pub port: u16,
    pub request_timeout_ms: u32,
    /// `?limit=` sent with every list request; the whole dataset is loaded at once
    pub fetch_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            request_timeout_ms: 15000,
            fetch_limit: 10000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TablesConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub company_name: String,
    /// Logo for the print header; a missing or broken logo leaves a text-only header
    pub logo_url: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            company_name: "Warehouse Management".to_string(),
            logo_url: None,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; missing sections and keys keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// Embedded defaults, overridden by the stored TOML if it parses.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let base = Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!("embedded config is invalid: {}", e);
            Self::builtin()
        });

        match store.get(CONFIG_OVERRIDE_KEY) {
            Ok(Some(raw)) => match Self::from_toml(&raw) {
                Ok(config) => {
                    log::info!("Using configuration override from {}", CONFIG_OVERRIDE_KEY);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring invalid configuration override: {}", e);
                    base
                }
            },
            Ok(None) => base,
            Err(e) => {
                log::warn!("{}", e);
                base
            }
        }
    }

    fn builtin() -> Self {
        Self {
            api: ApiConfig::default(),
            tables: TablesConfig::default(),
            export: ExportConfig::default(),
        }
    }

    fn normalize(&mut self) {
        if self.tables.default_page_size == 0 {
            self.tables.default_page_size = TablesConfig::default().default_page_size;
        }
        self.tables.page_size_options.retain(|n| *n > 0);
        if !self
            .tables
            .page_size_options
            .contains(&self.tables.default_page_size)
        {
            self.tables
                .page_size_options
                .push(self.tables.default_page_size);
        }
        self.tables.page_size_options.sort_unstable();
        self.tables.page_size_options.dedup();
        if self.api.fetch_limit == 0 {
            self.api.fetch_limit = ApiConfig::default().fetch_limit;
        }
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Application-wide configuration, loaded once at start-up.
pub fn init_config(store: &dyn KeyValueStore) -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(store))
}

/// Loaded configuration, or the embedded defaults before `init_config`.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::builtin)
}
