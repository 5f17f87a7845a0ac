//! CLI interface for Docket.
//!
//! With no subcommand, Docket opens the interactive dashboard. The
//! `schedule` and `shipments` subcommands are non-interactive: they wait
//! for the fetch, print once, and exit.

mod format;

use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::clock::Clock;
use crate::config::Config;
use crate::fetch::{self, FetchGate, Source};
use crate::model::{FetchResult, Shipment, WindowSpec};
use crate::schedule::build_schedule;
use crate::table;
use crate::tui;
use crate::view::{self, Presentation, present};

use format::{format_schedule, format_table};

/// Docket — upcoming shipments, one day at a time.
#[derive(Debug, Parser)]
#[command(name = "docket", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file to use instead of `~/.docket/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference instant (RFC 3339, e.g. `2026-10-19T12:00:00Z`).
    /// Defaults to the current time.
    #[arg(long, global = true)]
    now: Option<Timestamp>,

    #[command(subcommand)]
    command: Option<Command>,
}

const USAGE_HELP: &str = r"Examples:
  docket                              open the dashboard
  docket schedule                     the next seven days
  docket schedule --weeks 3           the next three weeks
  docket schedule --anchor 2026-11-02 the week starting on that date
  docket shipments --json             every shipment as JSON

Dashboard keys:
  ← →  page the anchored week     +  expand the range by a week
  m    switch anchored/growing    tab  switch dashboard/shipments";

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the interactive dashboard (the default).
    Tui,

    /// Print upcoming shipments bucketed by arrival day.
    ///
    /// Shows the next seven days unless `--weeks` or `--anchor` is given.
    /// Shipments that have already arrived are never shown.
    Schedule {
        /// Show this many weeks starting today.
        #[arg(long, conflicts_with = "anchor")]
        weeks: Option<NonZeroU32>,

        /// Show the seven days starting at this date (`YYYY-MM-DD`).
        #[arg(long)]
        anchor: Option<Date>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print every fetched shipment as a flat table.
    Shipments {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: &Cli, config: &Config) -> Result<(), String> {
    let tz = config.time_zone().map_err(|e| e.to_string())?;
    let clock = match cli.now {
        Some(ts) => Clock::Pinned(ts.to_zoned(tz)),
        None => Clock::Live(tz),
    };

    tracing::debug!(?clock, command = ?cli.command, "starting");

    let output = match &cli.command {
        None | Some(Command::Tui) => {
            return tui::run(config.source.clone(), clock)
                .map_err(|e| format!("terminal error: {e}"));
        }
        Some(Command::Schedule {
            weeks,
            anchor,
            json,
        }) => {
            let window = window_for(*weeks, *anchor);
            schedule_output(&config.source, window, &clock.now(), *json)?
        }
        Some(Command::Shipments { json }) => {
            shipments_output(&config.source, clock.time_zone(), *json)?
        }
    };

    print!("{output}");
    Ok(())
}

/// Pick the window shape from the `schedule` flags.
fn window_for(weeks: Option<NonZeroU32>, anchor: Option<Date>) -> WindowSpec {
    match (weeks, anchor) {
        (Some(weeks), _) => WindowSpec::Growing { weeks },
        (None, Some(anchor)) => WindowSpec::Anchored { anchor },
        (None, None) => WindowSpec::Fixed,
    }
}

/// Fetch shipments and wait for the outcome.
fn fetch_blocking(source: &Source) -> FetchResult {
    let source = source.clone();
    FetchGate::spawn(move || fetch::fetch(&source)).wait()
}

/// Fetch and render the schedule for `window` as of `now`.
fn schedule_output(
    source: &Source,
    window: WindowSpec,
    now: &Zoned,
    json: bool,
) -> Result<String, String> {
    let result = fetch_blocking(source);

    match present(&result, |shipments| build_schedule(shipments, window, now)) {
        Presentation::Loading => Ok(format!("{}\n", view::LOADING)),
        Presentation::Error => Err(view::ERROR.to_string()),
        Presentation::Ready(buckets) if json => serde_json::to_string_pretty(&buckets)
            .map(|json| json + "\n")
            .map_err(|e| format!("failed to serialize schedule: {e}")),
        Presentation::Ready(buckets) => Ok(format_schedule(&buckets, now.time_zone())),
    }
}

/// Fetch and render every shipment as a table.
fn shipments_output(source: &Source, tz: &TimeZone, json: bool) -> Result<String, String> {
    let result = fetch_blocking(source);

    match present(&result, <[Shipment]>::to_vec) {
        Presentation::Loading => Ok(format!("{}\n", view::LOADING)),
        Presentation::Error => Err(view::ERROR.to_string()),
        Presentation::Ready(shipments) if json => serde_json::to_string_pretty(&shipments)
            .map(|json| json + "\n")
            .map_err(|e| format!("failed to serialize shipments: {e}")),
        Presentation::Ready(shipments) if shipments.is_empty() => {
            Ok(format!("{}\n", view::NO_SHIPMENTS))
        }
        Presentation::Ready(shipments) => Ok(format_table(
            &table::COLUMNS,
            &table::rows(&shipments, tz),
        )),
    }
}
