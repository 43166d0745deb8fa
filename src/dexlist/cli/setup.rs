use clap::{Parser, ValueEnum};
use dexlist::list::Strategy;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `(R) name` lines, then one `[i] record` line per entry
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dexlist", bin_name = "dexlist", version = get_version())]
#[command(
    about = "Replay positional insert/remove commands from stdin against a creature catalog",
    long_about = None
)]
pub struct Cli {
    /// Catalog CSV (defaults to the configured path)
    pub catalog: Option<PathBuf>,

    /// List storage: bounded (array) or linked
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Slot count for the bounded list
    #[arg(short, long)]
    pub capacity: Option<usize>,

    /// Maximum number of catalog records to load
    #[arg(long)]
    pub limit: Option<usize>,

    /// Config file (defaults to config.json in the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_strategy_and_capacity() {
        let cli = Cli::try_parse_from(["dexlist", "data.csv", "-s", "linked", "-c", "3"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.strategy, Some(Strategy::Linked));
        assert_eq!(cli.capacity, Some(3));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["dexlist", "--strategy", "tree"]).is_err());
    }
}
