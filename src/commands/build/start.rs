use anyhow::{Context, Result};
use clap::Parser;

use super::types::StartParams;
use super::utils::build_function_name;
use crate::cloud::Cloud;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Manually start a build")]
#[group(skip)]
pub struct Options {
    #[clap(long, help = "Name of the stack")]
    pub name: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let params = StartParams::resolve(options.name, &state).await?;

    let message = start_build(state.cloud.as_ref(), &params).await?;

    log::info!("{message}");

    Ok(())
}

/// Waits for the stack's build function to respond, one attempt only.
///
/// Returns the line to report once the build has started.
pub async fn start_build(cloud: &dyn Cloud, params: &StartParams) -> Result<String> {
    let function = build_function_name(&params.name);

    log::debug!("Invoking `{function}` in {}", params.region);

    cloud
        .invoke_function(&params.region, &function)
        .await
        .context("Failed to start manual build")?;

    Ok(format!(
        "Successfully started manual build for stack {}",
        params.name
    ))
}

#[cfg(test)]
mod test {
    use anyhow::anyhow;
    use mockall::predicate::eq;

    use super::*;
    use crate::cloud::MockCloud;
    use crate::state::StateOptions;
    use crate::store::config::Config;

    fn params() -> StartParams {
        StartParams {
            name: "foo".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invokes_build_function() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_invoke_function()
            .with(eq("us-east-1"), eq("foo-build"))
            .times(1)
            .returning(|_, _| Ok(()));

        let message = start_build(&cloud, &params()).await.unwrap();

        assert_eq!(message, "Successfully started manual build for stack foo");
    }

    #[tokio::test]
    async fn test_invoke_failure_reports_no_success() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_invoke_function()
            .times(1)
            .returning(|_, _| Err(anyhow!("ResourceNotFoundException")));

        let error = start_build(&cloud, &params()).await.unwrap_err();

        assert_eq!(error.to_string(), "Failed to start manual build");
        assert!(!format!("{error:#}").contains("Successfully"));
    }

    #[tokio::test]
    async fn test_handle_validates_before_invoking() {
        // no expectations, any invoke fails the test
        let state = State::with_cloud(
            StateOptions {
                override_region: Some(String::new()),
                ..Default::default()
            },
            Box::new(MockCloud::new()),
        )
        .with_config(Config::default());

        let error = handle(
            Options {
                name: Some(String::new()),
            },
            state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.to_string(), "must provide a stack name");
    }

    #[tokio::test]
    async fn test_handle_uses_global_region() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_invoke_function()
            .with(eq("eu-west-1"), eq("foo-build"))
            .times(1)
            .returning(|_, _| Ok(()));

        let state = State::with_cloud(
            StateOptions {
                override_region: Some("eu-west-1".to_string()),
                ..Default::default()
            },
            Box::new(cloud),
        )
        .with_config(Config::default());

        handle(
            Options {
                name: Some("foo".to_string()),
            },
            state,
        )
        .await
        .unwrap();
    }
}
