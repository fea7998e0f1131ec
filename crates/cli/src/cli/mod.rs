//! CLI command definitions.

pub mod calendars;
pub mod events;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

/// Query the eventdash dataset from the terminal.
#[derive(Debug, Parser)]
#[command(name = "eventdash")]
#[command(version, about = "Query the eventdash dataset", long_about = None)]
pub struct Cli {
    /// Dataset JSON file, overriding `EVENTDASH_DATA`. Generated seed data is
    /// used when neither is set.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Clock value used for date ranges and the "Today" label (YYYY-MM-DDTHH:MM:SS).
    #[arg(long, global = true)]
    pub now: Option<NaiveDateTime>,

    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter, sort and list events.
    Events(events::EventsCommand),
    /// List the category, location and tag options present in the dataset.
    Facets,
    /// Filter and sort calendars.
    Calendars(calendars::CalendarsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_events_command() {
        let cli = Cli::try_parse_from([
            "eventdash",
            "--format",
            "json",
            "events",
            "--search",
            "ai",
            "--tag",
            "tech",
            "--tag",
            "design",
            "--range",
            "week",
            "--view",
            "timeline",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Events(cmd) = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(cmd.search.as_deref(), Some("ai"));
        assert_eq!(cmd.tags, vec!["tech", "design"]);
        assert_eq!(cmd.range, events::RangeArg::Week);
        assert_eq!(cmd.view, events::ViewArg::Timeline);
        assert_eq!(cmd.screen, events::ScreenArg::Events);
    }

    #[test]
    fn test_parse_now() {
        let cli = Cli::try_parse_from(["eventdash", "facets", "--now", "2024-03-10T12:00:00"])
            .unwrap();
        assert!(cli.now.is_some());
    }
}
