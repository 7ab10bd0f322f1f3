//! BrightKeep command-line entry point.

use anyhow::Result;
use brightkeep::cli::{self, Cli, Commands};
use brightkeep::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Check { site, strict } => {
            cli::check::run(config, site.site_url.as_deref(), *strict)
        }
        Commands::Show { site, json } => cli::show::run(config, site.site_url.as_deref(), *json),
        Commands::Export {
            site,
            output,
            minify,
        } => cli::export::run(config, site.site_url.as_deref(), output, *minify),
        Commands::Init { force, dry } => cli::init::new_site(config, *force, *dry),
    }
}
