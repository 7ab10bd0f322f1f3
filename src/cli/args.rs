//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// BrightKeep build configuration and design tokens
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for brightkeep.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and design tokens
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        site: SiteArgs,

        /// Treat contrast warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print resolved build options and tokens
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        site: SiteArgs,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Write theme.json and tokens.css
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        site: SiteArgs,

        /// Output directory (relative to the config file)
        #[arg(short, long, default_value = "theme", value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,

        /// Minify tokens.css
        #[arg(short, long)]
        minify: bool,
    },

    /// Write a commented brightkeep.toml with the default tokens
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing brightkeep.toml
        #[arg(short, long)]
        force: bool,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Site URL resolution shared by commands that resolve a `Site`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Override the site URL (outranks PUBLIC_SITE_URL).
    ///
    /// Example: previewing a subdirectory deployment:
    ///   brightkeep show --site-url "https://example.github.io/brightkeep"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_short_flag() {
        let cli = Cli::parse_from(["brightkeep", "show", "-v"]);
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["brightkeep", "-V"]).is_err_and(|err| {
            err.kind() == clap::error::ErrorKind::DisplayVersion
        }));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["brightkeep", "check", "--strict", "-U", "https://example.org"]);
        let Commands::Check { site, strict } = cli.command else {
            panic!("expected check");
        };
        assert!(strict);
        assert_eq!(site.site_url.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::parse_from(["brightkeep", "-C", "site/brightkeep.toml", "export"]);
        assert_eq!(cli.config, Some(PathBuf::from("site/brightkeep.toml")));
        let Commands::Export { output, minify, .. } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(output, PathBuf::from("theme"));
        assert!(!minify);
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["brightkeep"]).is_err());
    }
}
