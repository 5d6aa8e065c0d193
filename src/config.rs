#[cfg(not(windows))]
pub const EXEC_NAME: &str = "stack";
#[cfg(windows)]
pub const EXEC_NAME: &str = "stack.exe";

/// Relative to the user's home directory.
pub const CONFIG_STORE_PATH: &str = ".stack/config.yaml";

pub const ENV_NAME: &str = "STACK_NAME";
pub const ENV_REGION: &str = "STACK_REGION";
pub const ENV_INSTANCE_REGIONS: &str = "STACK_INSTANCE_REGIONS";

pub const BUILD_FUNCTION_SUFFIX: &str = "-build";
pub const INSTANCE_PROFILE_SUFFIX: &str = "-ec2";
