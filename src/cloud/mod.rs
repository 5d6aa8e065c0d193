mod aws;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;

pub use self::aws::AwsCloud;
use self::types::Reservation;

/// The cloud calls the build commands are made of.
///
/// Every call is scoped to a single region and made exactly once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Cloud: Send + Sync {
    /// Invoke a function and wait for it to respond.
    async fn invoke_function(&self, region: &str, function_name: &str) -> Result<()>;

    async fn terminate_instance(&self, region: &str, instance_id: &str) -> Result<()>;

    /// Reservations holding the instances in the `running` state, in provider order.
    async fn describe_running_instances(&self, region: &str) -> Result<Vec<Reservation>>;
}
