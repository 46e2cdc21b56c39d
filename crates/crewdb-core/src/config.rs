//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `CREWDB_*`
//! env vars. Provides a helper to expand `~` and `${VAR}` in path values.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::PathBuf;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("CREWDB_"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Catalog location from `data.catalog_path`, with `~`/`${VAR}` expanded.
    pub fn catalog_path(&self) -> PathBuf {
        let raw: String = self
            .get("data.catalog_path")
            .unwrap_or_else(|_| "data/workers.json".to_string());
        expand_path(raw)
    }

    /// Page size from `query.page_size`, if configured.
    pub fn page_size(&self) -> Option<usize> {
        self.get("query.page_size").ok()
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Ok(size) = self.get::<usize>("query.page_size") {
            if size == 0 {
                anyhow::bail!("query.page_size must be at least 1");
            }
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
