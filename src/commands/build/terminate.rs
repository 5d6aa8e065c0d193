use anyhow::{Context, Result};
use clap::Parser;

use super::types::TerminateParams;
use crate::cloud::Cloud;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Terminate a running build")]
#[group(skip)]
pub struct Options {
    #[clap(
        short,
        long,
        help = "EC2 instance id you want to terminate (e.g. i-07ff0f2ed84ff2e8d)"
    )]
    pub instance_id: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let params = TerminateParams::resolve(options.instance_id, &state)?;

    let message = terminate_build(state.cloud.as_ref(), &params).await?;

    log::info!("{message}");

    Ok(())
}

/// Existence and state checks are left to the provider.
///
/// Returns the line to report once the instance is terminated.
pub async fn terminate_build(cloud: &dyn Cloud, params: &TerminateParams) -> Result<String> {
    let TerminateParams {
        instance_id,
        region,
    } = params;

    cloud
        .terminate_instance(region, instance_id)
        .await
        .with_context(|| {
            format!("Failed to terminate EC2 instance {instance_id} in region {region}")
        })?;

    Ok(format!(
        "Terminated instance {instance_id} in region {region}"
    ))
}
