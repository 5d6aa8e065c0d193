use crate::config::{BUILD_FUNCTION_SUFFIX, INSTANCE_PROFILE_SUFFIX};

pub fn build_function_name(stack: &str) -> String {
    format!("{stack}{BUILD_FUNCTION_SUFFIX}")
}

pub fn instance_profile_name(stack: &str) -> String {
    format!("{stack}{INSTANCE_PROFILE_SUFFIX}")
}

/// Splits on `,` as is, without trimming or removing duplicates.
pub fn split_regions(regions: &str) -> Vec<String> {
    regions.split(',').map(str::to_string).collect()
}
