//! creatorrank CLI - engagement scoring and creator ranking for note snapshots

use anyhow::Result;
use clap::{Parser, Subcommand};
use rank_core::Config;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{cmd_config_init, cmd_config_show, cmd_items, cmd_profile, cmd_rank};
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "creatorrank")]
#[command(about = "Rank creators by engagement from search and profile snapshots")]
#[command(after_help = "\
QUICK START:
  creatorrank rank search.json            # Ranking report + CSV exports
  creatorrank profile profile.json        # Deep-dive on one creator
  creatorrank items search.json -c <ID>   # One creator's items as CSV
  creatorrank config --init               # Write .creatorrank.toml")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Rank all creators in a search snapshot
  Rank {
    /// Search or simplified search JSON file
    input: PathBuf,
    /// Directory for CSV exports (default: config report.output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Number of creators to show (default: config report.top_n)
    #[arg(short = 'n', long)]
    top: Option<usize>,
    /// Print the report only, write no files
    #[arg(long)]
    no_export: bool,
    /// Print the ranking as JSON instead of the text report
    #[arg(long)]
    json: bool,
  },
  /// Analyze a single creator's profile snapshot
  Profile {
    /// Profile JSON file
    input: PathBuf,
    /// Directory for CSV exports (default: config report.output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the report only, write no files
    #[arg(long)]
    no_export: bool,
  },
  /// Export the items of one creator
  Items {
    /// Snapshot JSON file
    input: PathBuf,
    /// Creator (user) ID
    #[arg(short, long)]
    creator: String,
    /// Directory for the CSV export (default: config report.output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Show or initialize configuration
  Config {
    /// Write a project config template to the current directory
    #[arg(long)]
    init: bool,
    /// Print the effective configuration (default)
    #[arg(long)]
    show: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let cwd = std::env::current_dir()?;
  let config = Config::load_for_dir(&cwd);
  init_cli_logging(&config.logging.level);

  match cli.command {
    Commands::Rank {
      input,
      output,
      top,
      no_export,
      json,
    } => cmd_rank(&config, &input, output, top, no_export, json),
    Commands::Profile {
      input,
      output,
      no_export,
    } => cmd_profile(&config, &input, output, no_export),
    Commands::Items { input, creator, output } => cmd_items(&config, &input, &creator, output),
    Commands::Config { init, show } => {
      if init {
        cmd_config_init(&cwd)?;
      }
      if show || !init {
        cmd_config_show(&cwd, &config)?;
      }
      Ok(())
    }
  }
}
