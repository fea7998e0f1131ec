//! Command execution.
//!
//! Each command builds its query from parsed arguments, runs it through the
//! core pipeline and renders the result as a string.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use eventdash_core::query::{
    classify_events, query_calendars, run_classified, summarize_events, FacetOptions,
    QueryContext, QueryState,
};
use uuid::Uuid;

use crate::cli::calendars::CalendarsCommand;
use crate::cli::events::EventsCommand;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::data::Dataset;
use crate::error::Result;
use crate::output::json::EventsReport;
use crate::output::{format_output, pretty};

/// Runs the parsed command and returns the text to print.
pub fn execute(cli: &Cli, config: &Config) -> Result<String> {
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    let dataset = load_dataset(cli, config, now)?;

    match &cli.command {
        Commands::Events(cmd) => run_events(cmd, &dataset, now, cli.format, config),
        Commands::Facets => {
            let options = FacetOptions::from_records(&dataset.events);
            Ok(format_output(&options, cli.format, pretty::format_facets))
        }
        Commands::Calendars(cmd) => run_calendars(cmd, &dataset, cli.format, config),
    }
}

fn load_dataset(cli: &Cli, config: &Config, now: NaiveDateTime) -> Result<Dataset> {
    match cli.data.as_ref().or(config.data_path.as_ref()) {
        Some(path) => Dataset::load(path),
        None => {
            tracing::debug!(count = config.seed_count, %now, "Generating seed dataset");
            Ok(Dataset::seed(now, config.seed_count))
        }
    }
}

/// Builds the query state for the events command.
///
/// Search text is normalized first; text the normalizer rejects stops the
/// command before any filtering happens.
pub fn build_query_state(cmd: &EventsCommand, config: &Config) -> Result<QueryState> {
    let mut state = QueryState::new()
        .with_tab(cmd.tab.into())
        .with_tags(cmd.tags.iter().map(|tag| tag.trim()).filter(|tag| !tag.is_empty()))
        .with_date_range(cmd.range.into())
        .with_sort(cmd.sort.into());

    if let Some(raw) = &cmd.search {
        state.set_search(raw, &config.normalizer())?;
    }
    if let Some(category) = cmd.category.as_deref().filter(|c| !c.trim().is_empty()) {
        state = state.with_category(category);
    }
    if let Some(location) = cmd.location.as_deref().filter(|l| !l.trim().is_empty()) {
        state = state.with_location(location);
    }

    Ok(state)
}

fn run_events(
    cmd: &EventsCommand,
    dataset: &Dataset,
    now: NaiveDateTime,
    format: OutputFormat,
    config: &Config,
) -> Result<String> {
    let state = build_query_state(cmd, config)?;
    let saved: HashSet<Uuid> = cmd.saved.iter().copied().collect();
    let ctx = QueryContext::new(now)
        .with_saved(&saved)
        .with_facets(cmd.facets())
        .with_view(cmd.view.into());

    let classified = classify_events(&dataset.events);
    let outcome = run_classified(&classified, &state, &ctx);
    tracing::info!(
        total = outcome.total,
        matched = outcome.matched,
        filters = ?outcome.active_filters,
        "Events query complete"
    );

    let summaries = cmd
        .summary
        .then(|| summarize_events(&outcome.view.events(), &classified));

    let report = EventsReport {
        outcome: &outcome,
        summaries,
    };
    Ok(format_output(&report, format, |report| {
        pretty::format_outcome(report.outcome, report.summaries.as_deref())
    }))
}

fn run_calendars(
    cmd: &CalendarsCommand,
    dataset: &Dataset,
    format: OutputFormat,
    config: &Config,
) -> Result<String> {
    let term = match &cmd.search {
        Some(raw) => eventdash_core::query::normalize_search_input(raw, &config.normalizer())?,
        None => String::new(),
    };

    let calendars = query_calendars(
        &dataset.calendars,
        &term,
        cmd.status.map(Into::into),
        cmd.sort.into(),
    );

    Ok(format_output(&calendars, format, |calendars| {
        pretty::format_calendars(calendars)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use std::path::PathBuf;

    const NOW: &str = "2024-03-10T12:00:00";

    fn run(args: &[&str]) -> Result<String> {
        let mut argv = vec!["eventdash", "--now", NOW];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        execute(&cli, &Config::default())
    }

    #[test]
    fn test_events_pretty() {
        let output = run(&["events"]).unwrap();
        assert!(output.starts_with("EVENTS ("));
    }

    #[test]
    fn test_events_json_is_deterministic() {
        let first = run(&["--format", "json", "events", "--view", "timeline"]).unwrap();
        let second = run(&["--format", "json", "events", "--view", "timeline"]).unwrap();
        assert_eq!(first, second);

        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(value["view"]["mode"], "timeline");
        assert!(value["matched"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_events_with_summaries() {
        let output = run(&["--format", "json", "events", "--summary"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value["summaries"].as_array().unwrap().len() as u64,
            value["matched"].as_u64().unwrap()
        );
    }

    #[test]
    fn test_events_search_too_long_is_not_accepted() {
        let long = "x".repeat(101);
        let err = run(&["events", "--search", &long]).unwrap_err();
        assert!(matches!(err, CliError::InputNotAccepted(_)));
    }

    #[test]
    fn test_events_no_match_message() {
        let output = run(&["events", "--search", "no such event anywhere"]).unwrap();
        assert_eq!(output, "No events match the current filters.");
    }

    #[test]
    fn test_events_saved_tab() {
        // Seed event IDs are derived from their index.
        let saved = Uuid::from_u128(0x0e00_0000).to_string();
        let output = run(&["--format", "json", "events", "--tab", "saved", "--saved", &saved])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["matched"], 1);
    }

    #[test]
    fn test_build_query_state_ignores_blank_selections() {
        let cli = Cli::try_parse_from([
            "eventdash",
            "events",
            "--category",
            " ",
            "--location",
            "",
            "--tag",
            " ",
            "--search",
            "  ai ",
        ])
        .unwrap();
        let Commands::Events(cmd) = &cli.command else {
            panic!("expected events command");
        };

        let state = build_query_state(cmd, &Config::default()).unwrap();

        assert_eq!(state.search(), "ai");
        assert!(state.category.is_none());
        assert!(state.location.is_none());
        assert!(state.tags.is_empty());
    }

    #[test]
    fn test_data_flag_overrides_configured_path() {
        let config = Config {
            data_path: Some(PathBuf::from("/nonexistent/configured.json")),
            ..Config::default()
        };
        let now = NOW.parse().unwrap();

        let cli = Cli::try_parse_from(["eventdash", "facets"]).unwrap();
        assert!(cli.data.is_none());
        let err = load_dataset(&cli, &config, now).unwrap_err();
        assert!(
            matches!(err, CliError::ReadDataset { ref path, .. } if path.ends_with("configured.json"))
        );

        let cli =
            Cli::try_parse_from(["eventdash", "--data", "/nonexistent/flag.json", "facets"]).unwrap();
        let err = load_dataset(&cli, &config, now).unwrap_err();
        assert!(matches!(err, CliError::ReadDataset { ref path, .. } if path.ends_with("flag.json")));
    }

    #[test]
    fn test_facets_pretty() {
        let output = run(&["facets"]).unwrap();
        assert!(output.contains("Categories: Hackathon"));
        assert!(output.contains("Locations: "));
    }

    #[test]
    fn test_calendars_filtered() {
        let output = run(&["calendars", "--status", "archived"]).unwrap();
        assert!(output.starts_with("CALENDARS (1)"));
        assert!(output.contains("Founders Circle"));
    }
}
