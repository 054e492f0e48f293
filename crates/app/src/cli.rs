//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tplr_infrastructure::AwsSettings;

/// Render a template, replacing `{{aws:ssm:...}}` and
/// `{{aws:secretsmanager:...}}` placeholders with their values.
#[derive(Debug, Clone, Parser)]
#[command(name = "tplr")]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Template file to render
    #[arg(short, long, visible_alias = "file", value_name = "PATH")]
    pub source: PathBuf,

    /// Output file; standard output when omitted
    #[arg(short, long, visible_alias = "out", value_name = "PATH")]
    pub dest: Option<PathBuf>,

    /// Environment name available as `{{env}}` inside reference paths
    #[arg(long, env = "ENV", default_value = "", value_name = "NAME")]
    pub env: String,

    /// AWS region, overriding the SDK default chain
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// AWS profile from the shared config files
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Deadline for each provider call, in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Log provider calls and render summary
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// AWS overrides taken from the command line.
    #[must_use]
    pub fn aws_settings(&self) -> AwsSettings {
        AwsSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }

    /// Per-call deadline, if one was requested.
    #[must_use]
    pub fn call_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
