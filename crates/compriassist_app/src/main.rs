//! Console host for the ComprIAssist landing page.
//!
//! Drives the page widgets from typed commands (`help` lists them), calls
//! the AI backend for the demos, and prints every change the page would
//! show.

mod platform;

use std::path::PathBuf;

use clap::Parser;

use platform::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "compriassist")]
#[command(about = "ComprIAssist landing page, driven from the terminal")]
#[command(version)]
struct Args {
    /// Settings file (RON). Defaults apply when it does not exist.
    #[arg(short, long, default_value = platform::SETTINGS_FILENAME)]
    config: PathBuf,

    /// Backend address, overriding the settings file
    #[arg(long, env = "COMPRIASSIST_API")]
    base_url: Option<String>,

    /// Where log output goes
    #[arg(long, value_enum, default_value = "file")]
    log: LogDestination,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Write the default settings to --config and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.init_config {
        return platform::write_default_settings(&args.config);
    }
    platform::run_app(platform::AppOptions {
        settings_path: args.config,
        base_url: args.base_url,
        log: args.log,
        verbose: args.verbose,
    })
}
