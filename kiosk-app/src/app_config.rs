use serde::Deserialize;
use std::env;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use kiosk_catalog::{default_catalog, validate_catalog, CatalogError, Menu};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Replaces the built-in menu when present
    #[serde(default)]
    pub catalog: Option<Vec<Menu>>,
}

impl Config {
    /// Layered load: defaults, then optional files under `config/`, then
    /// `KIOSK__*` environment variables. Nothing is required to exist.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("KIOSK_RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("KIOSK").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder().set_default("log_filter", DEFAULT_LOG_FILTER)
    }

    /// Menus to serve: the configured catalog if any, else the built-in one
    pub fn menus(&self) -> Result<Vec<Menu>, CatalogError> {
        match &self.catalog {
            Some(menus) => {
                validate_catalog(menus)?;
                Ok(menus.clone())
            }
            None => Ok(default_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Config {
        Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_use_builtin_catalog() {
        let config = from_toml("");
        assert_eq!(config.log_filter, "warn");
        assert!(config.catalog.is_none());

        let menus = config.menus().unwrap();
        assert_eq!(menus.len(), 3);
        assert_eq!(menus[0].category(), "Burgers");
    }

    #[test]
    fn test_configured_catalog() {
        let config = from_toml(
            r#"
            log_filter = "kiosk_order=info"

            [[catalog]]
            category = "Sides"

            [[catalog.items]]
            name = "Fries"
            price = 3.5
            description = "Crinkle cut"
            "#,
        );
        assert_eq!(config.log_filter, "kiosk_order=info");

        let menus = config.menus().unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].category(), "Sides");
        assert_eq!(menus[0].item(1).unwrap().price(), 3.5);
    }

    #[test]
    fn test_configured_catalog_is_validated() {
        let config = from_toml(
            r#"
            [[catalog]]
            category = "Sides"
            "#,
        );
        assert!(matches!(config.menus(), Err(CatalogError::EmptyCategory(_))));
    }
}
