use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::OnceCell;

use crate::cloud::{AwsCloud, Cloud};
use crate::store::config::Config;

pub struct State {
    /// Global flags, applied before any fallback.
    pub overrides: Overrides,
    pub cloud: Box<dyn Cloud>,
    config_path: Option<PathBuf>,
    config: OnceCell<Config>,
}

#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub region: Option<String>,
    pub instance_regions: Option<String>,
}

#[derive(Debug, Default)]
pub struct StateOptions {
    pub override_region: Option<String>,
    pub override_instance_regions: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl State {
    pub fn new(options: StateOptions) -> Self {
        Self::with_cloud(options, Box::new(AwsCloud::new()))
    }

    pub fn with_cloud(options: StateOptions, cloud: Box<dyn Cloud>) -> Self {
        State {
            overrides: Overrides {
                region: options.override_region,
                instance_regions: options.override_instance_regions,
            },
            cloud,
            config_path: options.config_path,
            config: OnceCell::new(),
        }
    }

    /// Skips the config file and uses `config` as the fallback values.
    #[cfg(test)]
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = OnceCell::new_with(Some(config));
        self
    }

    /// File and environment fallbacks, loaded on first use so commands
    /// without fallbacks never touch the config file.
    pub async fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| async {
                let config = Config::load(self.config_path.clone())
                    .await?
                    .with_env(|key| std::env::var(key).ok());

                log::debug!("Resolved config: {config:?}");

                Ok(config)
            })
            .await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cloud::MockCloud;

    #[tokio::test]
    async fn test_preset_config_is_used() {
        let state = State::with_cloud(StateOptions::default(), Box::new(MockCloud::new()))
            .with_config(Config {
                name: Some("foo".to_string()),
                ..Default::default()
            });

        assert_eq!(state.config().await.unwrap().name.as_deref(), Some("foo"));
    }

    #[tokio::test]
    async fn test_invalid_config_only_fails_on_access() {
        let path = std::env::temp_dir().join(format!(
            "stack-cli-state-test-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "name: [unterminated").unwrap();

        let state = State::with_cloud(
            StateOptions {
                config_path: Some(path),
                ..Default::default()
            },
            Box::new(MockCloud::new()),
        );

        assert!(state.config().await.is_err());
    }
}
