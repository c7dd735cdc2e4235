use std::io::Write;

use anyhow::{Context, Result};
use sassmod_importer::{ImporterOptions, ModuleImporter};

use super::CommonArgs;
use crate::env::SassmodEnv;

#[derive(Clone, Debug, clap::Args)]
pub struct ResolveArg {
    /// Specifiers as written after @import
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// File issuing the imports; "stdin" means the entry point
    #[arg(long, default_value = "stdin", value_name = "FILE")]
    pub from: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ResolveArg {
    /// Print one JSON host value per specifier. Unresolved specifiers are
    /// printed as bare strings and do not fail the command.
    pub async fn run(self, env: &SassmodEnv) -> Result<()> {
        let config = self.common.effective(env)?;
        let importer = ModuleImporter::new(ImporterOptions::from(config));

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for url in &self.urls {
            let result = importer
                .import(url, &self.from)
                .await
                .with_context(|| format!("Failed to resolve '{url}'"))?;
            if !result.is_resolved() {
                tracing::warn!(url = %url, "file to import not found or unreadable");
            }
            let line = serde_json::to_string(&result).context("Failed to encode result")?;
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}
