use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternates focus sessions and breaks on a one-second countdown, with a
progress display and an audible alert at every transition.

QUICK START:
  pomo                      Open the interactive timer
  pomo --focus 50 --break 10
                            Open it with custom durations
  pomo run                  Run the timer as a single status line
  pomo config show          Show the effective configuration

KEYS (interactive timer):
  space/p     play or pause
  s           stop and reset durations
  k/j         focus duration up/down (while stopped)
  l/h         break duration up/down (while stopped)
  q           quit

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Log debug events (to ~/.pomo/pomo.log for the interactive timer,
    /// stderr otherwise). RUST_LOG overrides this.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Durations for the timer, also accepted before `tui` or `run`
    #[command(flatten)]
    pub timer: TimerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to execute, with top-level durations folded in.
    ///
    /// No subcommand means the interactive timer. Durations given after
    /// the subcommand win over ones given before it.
    #[must_use]
    pub fn into_command(self) -> Commands {
        match self.command {
            None => Commands::Tui(self.timer),
            Some(Commands::Tui(args)) => Commands::Tui(args.or(self.timer)),
            Some(Commands::Run(mut args)) => {
                args.timer = args.timer.or(self.timer);
                Commands::Run(args)
            }
            Some(other) => other,
        }
    }
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
    /// Open the interactive timer (default)
    ///
    /// Shows the focus and break durations, a countdown for the current
    /// session and a progress gauge. Durations can only be changed while
    /// the timer is stopped; stop resets them to the configured defaults.
    ///
    /// # Examples
    ///
    ///   pomo tui                  Start with configured durations
    ///   pomo tui --focus 45       Start with a 45-minute focus period
    Tui(TimerArgs),

    /// Run the timer as a single status line
    ///
    /// Starts a focus session immediately and prints a live countdown
    /// on one line. Each transition rings the configured alerts and is
    /// printed on its own line.
    ///
    /// # Examples
    ///
    ///   pomo run                  Run until interrupted
    ///   pomo run --sessions 2     One focus period and one break
    ///   pomo run -f 50 -b 10      Custom durations
    #[command(alias = "r")]
    Run(RunArgs),

    /// Inspect configuration
    ///
    /// Configuration is read from ~/.pomo/config.yaml. Missing fields
    /// fall back to defaults.
    Config(ConfigArgs),

    /// Generate a shell completion script
    ///
    /// # Examples
    ///
    ///   pomo completions bash > /usr/local/etc/bash_completion.d/pomo
    ///   pomo completions fish | source
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Durations to start with, overriding the configured defaults.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct TimerArgs {
    /// Focus duration in minutes (5-60, steps of 5)
    #[arg(short, long = "focus", value_name = "MINUTES")]
    pub focus_minutes: Option<u32>,

    /// Break duration in minutes (1-15)
    #[arg(short, long = "break", value_name = "MINUTES")]
    pub break_minutes: Option<u32>,
}

impl TimerArgs {
    /// Fill unset durations from `fallback`.
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        Self {
            focus_minutes: match self.focus_minutes {
                Some(m) => Some(m),
                None => fallback.focus_minutes,
            },
            break_minutes: match self.break_minutes {
                Some(m) => Some(m),
                None => fallback.break_minutes,
            },
        }
    }
}

#[derive(Args, Clone, Copy, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Stop after this many session transitions
    #[arg(short, long, value_name = "COUNT")]
    pub sessions: Option<u32>,

    /// Do not ring alerts at transitions
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}
