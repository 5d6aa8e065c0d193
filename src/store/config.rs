use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use tokio::fs;

use super::utils::home_path;
use crate::config::{CONFIG_STORE_PATH, ENV_INSTANCE_REGIONS, ENV_NAME, ENV_REGION};
use crate::utils::non_empty;

/// Fallback values for flags that were not passed on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub instance_regions: Option<String>,
}

impl Config {
    /// Loads the config file. An explicit path must exist, the default one may not.
    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (home_path(CONFIG_STORE_PATH)?, false),
        };

        if fs::metadata(&path).await.is_err() {
            if explicit {
                bail!("Config file `{}` does not exist", path.display());
            }

            log::debug!("No config file at {}, using defaults", path.display());

            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config file `{}`", path.display()))?;

        log::debug!("Loaded config from {}", path.display());

        Self::parse(&path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(content).map_err(|e| anyhow!(e)),
            Some("yml" | "yaml") => serde_yaml::from_str(content).map_err(|e| anyhow!(e)),
            // json is valid yaml
            _ => serde_yaml::from_str(content).map_err(|e| anyhow!(e)),
        };

        config.with_context(|| format!("Invalid config file `{}`", path.display()))
    }

    /// Overrides file values with any non-empty environment variables.
    #[must_use]
    pub fn with_env<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: non_empty(lookup(ENV_NAME)).or(self.name),
            region: non_empty(lookup(ENV_REGION)).or(self.region),
            instance_regions: non_empty(lookup(ENV_INSTANCE_REGIONS)).or(self.instance_regions),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stack-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_yaml() {
        let config = Config::parse(
            Path::new("config.yaml"),
            "name: foo\nregion: us-west-2\ninstance-regions: us-west-2,us-east-1\n",
        )
        .unwrap();

        assert_eq!(config.name.as_deref(), Some("foo"));
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert_eq!(
            config.instance_regions.as_deref(),
            Some("us-west-2,us-east-1")
        );
    }

    #[test]
    fn test_parse_json_partial() {
        let config = Config::parse(Path::new("config.json"), r#"{"name": "foo"}"#).unwrap();

        assert_eq!(
            config,
            Config {
                name: Some("foo".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse(Path::new("config.json"), "name: foo").is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let env = HashMap::from([
            (ENV_NAME, "from-env".to_string()),
            (ENV_REGION, String::new()),
        ]);

        let config = Config {
            name: Some("from-file".to_string()),
            region: Some("eu-west-1".to_string()),
            instance_regions: None,
        }
        .with_env(|key| env.get(key).cloned());

        assert_eq!(config.name.as_deref(), Some("from-env"));
        // empty env values do not shadow the file
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.instance_regions, None);
    }

    #[tokio::test]
    async fn test_load_explicit_path() {
        let path = temp_file("explicit.yml", "name: foo\nregion: us-east-1\n");

        let config = Config::load(Some(path)).await.unwrap();

        assert_eq!(config.name.as_deref(), Some("foo"));
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn test_load_missing_explicit_path() {
        let path = std::env::temp_dir().join("stack-cli-test-does-not-exist.yaml");

        assert!(Config::load(Some(path)).await.is_err());
    }
}
