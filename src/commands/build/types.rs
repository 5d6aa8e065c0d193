use anyhow::{Context, Result};

use super::utils::split_regions;
use crate::cloud::types::Instance;
use crate::state::State;
use crate::utils::{format_time, non_empty, resolve};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartParams {
    pub name: String,
    pub region: String,
}

impl StartParams {
    pub async fn resolve(name: Option<String>, state: &State) -> Result<Self> {
        let config = state.config().await?;

        let name = resolve(name, config.name.as_deref()).context("must provide a stack name")?;
        let region = resolve(state.overrides.region.clone(), config.region.as_deref())
            .context("must provide stack region")?;

        Ok(Self { name, region })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminateParams {
    pub instance_id: String,
    pub region: String,
}

impl TerminateParams {
    /// Flags only, the config file is never consulted here.
    pub fn resolve(instance_id: Option<String>, state: &State) -> Result<Self> {
        let instance_id =
            non_empty(instance_id).context("must provide an instance id to terminate")?;
        let region = non_empty(state.overrides.region.clone())
            .context("must provide region for instance to terminate")?;

        Ok(Self {
            instance_id,
            region,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub name: String,
    pub regions: Vec<String>,
}

impl ListParams {
    pub async fn resolve(name: Option<String>, state: &State) -> Result<Self> {
        let config = state.config().await?;

        let name = resolve(name, config.name.as_deref()).context("must provide a stack name")?;
        let regions = resolve(
            state.overrides.instance_regions.clone(),
            config.instance_regions.as_deref(),
        )
        .context("must provide instance regions")?;

        Ok(Self {
            name,
            regions: split_regions(&regions),
        })
    }
}

/// A running instance belonging to the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBuild {
    pub region: String,
    pub instance: Instance,
}

#[derive(Debug, Default)]
pub struct ListSummary {
    pub builds: Vec<ActiveBuild>,
}

impl ListSummary {
    pub fn running(&self) -> usize {
        self.builds.len()
    }

    /// One line per build, or a single line saying there are none.
    pub fn report_lines(&self) -> Vec<String> {
        if self.builds.is_empty() {
            return vec!["No active builds found".to_string()];
        }

        self.builds
            .iter()
            .map(|ActiveBuild { region, instance }| {
                format!(
                    "Instance '{}': ip='{}' region='{}' launched='{}'",
                    instance.id,
                    instance.public_ip.as_deref().unwrap_or("-"),
                    region,
                    format_time(instance.launch_time),
                )
            })
            .collect()
    }
}
