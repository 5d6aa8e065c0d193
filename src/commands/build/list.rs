use anyhow::{Context, Result};
use clap::Parser;

use super::types::{ActiveBuild, ListParams, ListSummary};
use super::utils::instance_profile_name;
use crate::cloud::Cloud;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List in progress builds")]
#[group(skip)]
pub struct Options {
    #[clap(long, help = "Name of the stack")]
    pub name: Option<String>,

    #[clap(short, long, help = "Only print the IDs of the instances")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let params = ListParams::resolve(options.name, &state).await?;

    // stdout only carries the ids when quiet
    if !options.quiet {
        log::info!(
            "Looking for builds for stack {} in the following regions: {}",
            params.name,
            params.regions.join(",")
        );
    }

    let summary = find_builds(state.cloud.as_ref(), &params).await?;

    if options.quiet {
        if let Some(ids) = quiet_ids(&summary) {
            println!("{ids}");
        }

        return Ok(());
    }

    for line in summary.report_lines() {
        log::info!("{line}");
    }

    Ok(())
}

fn quiet_ids(summary: &ListSummary) -> Option<String> {
    if summary.builds.is_empty() {
        return None;
    }

    Some(
        summary
            .builds
            .iter()
            .map(|b| b.instance.id.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Walks the regions in order and collects running instances with the stack's profile.
///
/// A failing region aborts the whole walk, nothing is reported for the regions before it.
pub async fn find_builds(cloud: &dyn Cloud, params: &ListParams) -> Result<ListSummary> {
    let profile = instance_profile_name(&params.name);
    let mut summary = ListSummary::default();

    for region in &params.regions {
        let reservations = cloud
            .describe_running_instances(region)
            .await
            .with_context(|| format!("Failed to describe EC2 instances in region {region}"))?;

        // only the first reservation is checked for emptiness
        if reservations
            .first()
            .map_or(true, |reservation| reservation.instances.is_empty())
        {
            log::debug!("No running instances in {region}");
            continue;
        }

        for reservation in reservations {
            for instance in reservation.instances {
                log::debug!(
                    "Instance {} in {region} is {} with profile {:?}",
                    instance.id,
                    instance.state.as_deref().unwrap_or("unknown"),
                    instance.profile_name()
                );

                if instance.profile_name() != Some(profile.as_str()) {
                    continue;
                }

                summary.builds.push(ActiveBuild {
                    region: region.clone(),
                    instance,
                });
            }
        }
    }

    Ok(summary)
}
