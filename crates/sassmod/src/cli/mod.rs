use std::path::PathBuf;

use anyhow::Result;
use sassmod_importer::ImporterConfig;

use crate::env::SassmodEnv;

pub mod app;
pub mod config;
pub mod resolve;

/// Options shared by every command that builds an importer.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct CommonArgs {
    /// Config file (defaults to $SASSMOD_CONFIG, then ./sassmod.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root for imports from the entry point
    #[arg(long, value_name = "DIR")]
    pub basedir: Option<PathBuf>,

    /// Extra directory searched for local partials
    #[arg(short = 'I', long = "include-path", value_name = "DIR")]
    pub include_paths: Vec<PathBuf>,
}

impl CommonArgs {
    /// Config file values overlaid with command-line flags.
    pub fn effective(&self, env: &SassmodEnv) -> Result<ImporterConfig> {
        let file = match self.config.clone().or_else(|| env.config_path()) {
            Some(path) => crate::config::load(&path)?,
            None => ImporterConfig::default(),
        };

        let flags = ImporterConfig {
            basedir: self.basedir.as_ref().map(|dir| env.pwd().join(dir)),
            include_paths: self.include_paths.iter().map(|dir| env.pwd().join(dir)).collect(),
        };

        Ok(file.merge(flags))
    }
}
