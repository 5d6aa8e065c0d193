use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ec2::types::Filter;
use aws_sdk_lambda::types::InvocationType;
use chrono::DateTime;

use super::types::{Instance, Reservation};
use super::Cloud;

/// Talks to AWS, loading a fresh session for every call.
#[derive(Debug, Default)]
pub struct AwsCloud;

impl AwsCloud {
    pub fn new() -> Self {
        Self
    }

    /// Credentials come from the default provider chain (env, profile, instance role).
    async fn session(region: &str) -> SdkConfig {
        log::debug!("Loading AWS session for region {region}");

        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await
    }
}

#[async_trait]
impl Cloud for AwsCloud {
    async fn invoke_function(&self, region: &str, function_name: &str) -> Result<()> {
        let client = aws_sdk_lambda::Client::new(&Self::session(region).await);

        let response = client
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .send()
            .await
            .with_context(|| format!("Failed to invoke function `{function_name}`"))?;

        log::debug!(
            "Function `{function_name}` responded with status {}",
            response.status_code()
        );

        if let Some(error) = response.function_error() {
            bail!("Function `{function_name}` failed: {error}");
        }

        Ok(())
    }

    async fn terminate_instance(&self, region: &str, instance_id: &str) -> Result<()> {
        let client = aws_sdk_ec2::Client::new(&Self::session(region).await);

        client
            .terminate_instances()
            .instance_ids(instance_id)
            .send()
            .await?;

        Ok(())
    }

    async fn describe_running_instances(&self, region: &str) -> Result<Vec<Reservation>> {
        let client = aws_sdk_ec2::Client::new(&Self::session(region).await);

        let response = client
            .describe_instances()
            .filters(
                Filter::builder()
                    .name("instance-state-name")
                    .values("running")
                    .build(),
            )
            .send()
            .await?;

        Ok(response
            .reservations()
            .iter()
            .map(|reservation| Reservation {
                instances: reservation.instances().iter().map(Instance::from).collect(),
            })
            .collect())
    }
}

impl From<&aws_sdk_ec2::types::Instance> for Instance {
    fn from(instance: &aws_sdk_ec2::types::Instance) -> Self {
        Instance {
            id: instance.instance_id().unwrap_or_default().to_string(),
            public_ip: instance.public_ip_address().map(str::to_string),
            launch_time: instance
                .launch_time()
                .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
            state: instance
                .state()
                .and_then(|s| s.name())
                .map(|name| name.as_str().to_string()),
            iam_profile_arn: instance
                .iam_instance_profile()
                .and_then(|p| p.arn())
                .map(str::to_string),
        }
    }
}
