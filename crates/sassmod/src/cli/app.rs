use clap::{Parser, Subcommand};

use super::config::ConfigArg;
use super::resolve::ResolveArg;

#[derive(Clone, Debug, Parser)]
#[command(name = "sassmod", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "r", name = "resolve", about = "Resolve @import specifiers")]
    Resolve(ResolveArg),
    #[command(alias = "cfg", name = "config", about = "Print the effective importer config")]
    Config(ConfigArg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let app = App::try_parse_from([
            "sassmod", "resolve", "bootstrap", "colors", "--from", "/site/main.scss", "-I", "vendor",
        ])
        .unwrap();

        let Commands::Resolve(arg) = app.cmd else {
            panic!("expected resolve");
        };
        assert_eq!(arg.urls, vec!["bootstrap".to_string(), "colors".to_string()]);
        assert_eq!(arg.from, "/site/main.scss");
        assert_eq!(arg.common.include_paths.len(), 1);
    }

    #[test]
    fn test_from_defaults_to_stdin() {
        let app = App::try_parse_from(["sassmod", "r", "grid"]).unwrap();
        let Commands::Resolve(arg) = app.cmd else {
            panic!("expected resolve");
        };
        assert_eq!(arg.from, "stdin");
    }
}
