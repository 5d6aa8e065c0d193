use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub public_ip: Option<String>,
    pub launch_time: Option<DateTime<Utc>>,
    pub state: Option<String>,
    pub iam_profile_arn: Option<String>,
}

impl Instance {
    /// Short name of the attached instance profile, the segment after the first `/` of its ARN.
    pub fn profile_name(&self) -> Option<&str> {
        self.iam_profile_arn.as_deref()?.split('/').nth(1)
    }
}
