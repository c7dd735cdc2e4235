use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE: &str = "sassmod.toml";
pub const CONFIG_ENV: &str = "SASSMOD_CONFIG";

#[derive(Debug, Clone)]
pub struct SassmodEnv {
    pwd: PathBuf,
    config: Option<PathBuf>,
}

impl SassmodEnv {
    pub fn new() -> Result<Self> {
        let pwd = env::current_dir().context("Failed to get current directory")?;
        let config = env::var_os(CONFIG_ENV).map(PathBuf::from);
        Ok(Self::with_parts(pwd, config))
    }

    pub fn with_parts(pwd: PathBuf, config: Option<PathBuf>) -> Self {
        Self { pwd, config }
    }

    pub fn pwd(&self) -> &Path {
        &self.pwd
    }

    /// Explicit config path, else `sassmod.toml` in the working directory
    /// when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let default = self.pwd.join(CONFIG_FILE);
            default.is_file().then_some(default)
        })
    }
}
