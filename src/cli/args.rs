use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focal")]
#[command(about = "A focus timer for your terminal")]
#[command(long_about = "focal - A focus timer for your terminal

Run countdown focus sessions with category tracking and distraction
counting, then review aggregate statistics over your history.

QUICK START:
  focal timer               Start the interactive timer
  focal timer -d 50m -c coding
                            50-minute session in the Coding category
  focal report              Show totals, 7-day chart, category split
  focal report -o json      Machine-readable statistics

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focal <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive focus timer
    ///
    /// Opens the timer screen: pick a category, adjust the duration, and
    /// start the countdown. Switching away from the terminal while the
    /// countdown runs pauses it and counts one distraction.
    ///
    /// # Key bindings
    ///
    ///   1-6          select category (idle only)
    ///   +/- or ↑/↓   adjust duration (idle only)
    ///   Enter/Space  start / pause / resume
    ///   f            finish the session
    ///   r            reset
    ///   q            quit
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Show aggregate focus statistics
    ///
    /// Prints today's and all-time focused totals, the all-time distraction
    /// count, a 7-day bar chart and the category distribution.
    #[command(alias = "r")]
    Report,

    /// List the available session categories
    Categories,

    /// Delete all recorded sessions
    Clear {
        /// Skip the confirmation requirement
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the timer command.
#[derive(Args)]
pub struct TimerArgs {
    /// Starting duration, e.g. "25", "25m", "1h30m", "90s"
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Starting category (general, study, coding, project, reading, other)
    #[arg(short, long)]
    pub category: Option<String>,
}
