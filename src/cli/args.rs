use clap::Parser;
use std::path::PathBuf;

pub use crate::common::config::OutputFormat;

/// AppWipe: remove a Mac app's leftover files
#[derive(Parser, Debug)]
#[command(
    name = "appwipe",
    version,
    about = "Remove a macOS application's leftover support files, caches and preferences",
    long_about = "AppWipe reads an app bundle's Info.plist, searches your Library folders\n\
                   for files named after the app, shows what it found, and removes them\n\
                   once you confirm.",
    after_help = "EXAMPLES:\n  \
        appwipe /Applications/Slack.app            Find leftovers and ask before removing\n  \
        appwipe -y /Applications/Slack.app         Remove without asking (non-interactive)\n  \
        appwipe --dry-run /Applications/Slack.app  Only list what would be removed\n  \
        appwipe --format json -y ~/Applications/Foo.app"
)]
pub struct Cli {
    /// Path to the application bundle, e.g. /Applications/Slack.app
    #[arg(value_name = "APP")]
    pub app: Option<PathBuf>,

    /// Non-interactive mode: remove found files automatically without asking
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Show what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (defaults to the config file setting). In json mode a
    /// fatal error is printed as {"error": "..."} on stdout
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Home directory whose Library folders are searched
    #[arg(long, env = "APPWIPE_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}
