use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "backlog")]
#[command(about = "Keep a backlog of stories and plan sprints from it")]
#[command(long_about = "backlog - story backlog and sprint planner

Stories have an id, a point estimate and a priority (lower number = more
important). A sprint is picked greedily: highest priority first, larger
stories first within a priority, each taken if it still fits.

QUICK START:
  backlog add 1 3 1         Add story 1: 3 points, priority 1
  backlog list              Show every story
  backlog sprint 13         Plan a 13-point sprint
  backlog remove 1          Remove story 1

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file, or
    /// 'pretty' when that is unset.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Database file to use instead of the configured one
    #[arg(long, global = true, env = "BACKLOG_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file to use instead of ~/.backlog/config.yaml
    #[arg(long, global = true, env = "BACKLOG_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

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
    /// Add a story to the backlog
    ///
    /// Ids are not checked for uniqueness. A story added twice can't be
    /// removed by id until one of the copies is gone.
    ///
    /// # Examples
    ///
    ///   backlog add 1 3 1         3 points, priority 1
    ///   backlog add login 8 2     8 points, priority 2
    #[command(alias = "a")]
    Add(AddArgs),

    /// Remove a story by id
    ///
    /// Prints the removed story. Fails if no story (or more than one
    /// story) has the id.
    #[command(alias = "rm")]
    Remove {
        /// Id of the story to remove
        id: String,
    },

    /// List every story in the backlog
    ///
    /// Stories are shown in storage order, unsorted.
    #[command(alias = "ls")]
    List,

    /// Plan a sprint for a point capacity
    ///
    /// Stories are tried by priority (lowest number first), then by points
    /// (largest first). Each is taken if it still fits; a story that
    /// doesn't fit is never reconsidered.
    ///
    /// # Examples
    ///
    ///   backlog sprint 13
    ///   backlog sprint            Use sprint.default_capacity from config
    ///   backlog sprint 20 -o json
    Sprint {
        /// Total points achievable in the sprint
        #[arg(allow_hyphen_values = true)]
        capacity: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Example: backlog completions zsh > ~/.zsh/completions/_backlog
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Story id
    pub id: String,

    /// Point estimate
    #[arg(allow_negative_numbers = true)]
    pub points: i64,

    /// Priority (lower is more important)
    #[arg(allow_negative_numbers = true)]
    pub priority: i64,
}
