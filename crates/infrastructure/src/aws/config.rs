//! AWS SDK configuration loading.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ssm::config::Region;

/// Overrides applied on top of the standard AWS configuration chain.
///
/// Anything left as `None` falls back to the environment, shared config
/// files, and instance metadata, in the order the SDK defines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    /// Region to use instead of the resolved default.
    pub region: Option<String>,
    /// Named profile from the shared config files.
    pub profile: Option<String>,
}

impl AwsSettings {
    /// Sets the region override.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the profile override.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Loads the shared SDK configuration used by every provider client.
pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }

    loader.load().await
}
