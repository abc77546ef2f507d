//! Subcommand implementations

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use navguard_core::{GuardConfig, GuardVariant};

pub mod check;
pub mod show;
pub mod validate;

/// Where the guard configuration comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Built-in preset (admin or user); defaults to admin
    #[arg(long, value_parser = parse_variant, conflicts_with = "config")]
    pub variant: Option<GuardVariant>,

    /// TOML or JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    /// Load the configuration this source names.
    pub fn resolve(&self) -> anyhow::Result<GuardConfig> {
        match (&self.config, self.variant) {
            (Some(path), _) => Ok(GuardConfig::load(path)?),
            (None, Some(variant)) => Ok(variant.config()),
            (None, None) => Ok(GuardVariant::Admin.config()),
        }
    }
}

fn parse_variant(s: &str) -> Result<GuardVariant, String> {
    s.parse().map_err(|e: navguard_core::GuardError| e.to_string())
}

/// Rendering for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}
