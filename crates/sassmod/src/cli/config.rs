use anyhow::{Context, Result};

use super::CommonArgs;
use crate::env::SassmodEnv;

#[derive(Clone, Debug, clap::Args)]
pub struct ConfigArg {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl ConfigArg {
    pub fn run(self, env: &SassmodEnv) -> Result<()> {
        let config = self.common.effective(env)?;
        let text = toml::to_string_pretty(&config).context("Failed to encode config")?;
        print!("{text}");
        Ok(())
    }
}
