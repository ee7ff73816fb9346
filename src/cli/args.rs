//! Command-line argument definitions for the ticker symbol generator
//!
//! Generation is the only command and the default one: running the binary
//! with no arguments fetches both listing files over FTP and writes Go
//! sources under `go/`. Every flag overrides the matching configuration
//! value.

use crate::config::{Config, OutputLanguage};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the ticker symbol generator
///
/// Downloads the NASDAQ Trader symbol directory and generates one constant
/// per listed ticker symbol.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ticker-symbols",
    version,
    about = "Generate ticker symbol constants from the NASDAQ Trader symbol directory",
    long_about = "Downloads nasdaqlisted.txt and otherlisted.txt from the NASDAQ Trader \
                  anonymous FTP server, normalizes every ticker symbol into an identifier-safe \
                  constant name and writes one generated Go package (or Rust module) per file.",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Flags for the default generate command
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the listing files and generate constants (default command)
    Generate(GenerateArgs),
}

/// Arguments for the generate command
#[derive(Debug, Clone, Default, Parser)]
pub struct GenerateArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file for transfer, normalization and output
    /// settings. If not specified, uses ~/.config/ticker-symbols/config.toml
    /// when it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Root directory for generated packages
    ///
    /// Each package is written to its own subdirectory. Defaults to `go` or
    /// `rust` depending on the output language.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "PATH",
        help = "Root directory for generated packages"
    )]
    pub output_dir: Option<PathBuf>,

    /// Language of the generated sources
    #[arg(
        short = 'l',
        long = "language",
        value_enum,
        help = "Language of the generated sources"
    )]
    pub language: Option<OutputLanguage>,

    /// Read listing files from a local directory instead of FTP
    #[arg(
        short = 'i',
        long = "input-dir",
        value_name = "PATH",
        help = "Read listing files from a local directory instead of FTP"
    )]
    pub input_dir: Option<PathBuf>,

    /// FTP server to download from
    #[arg(long = "host", value_name = "HOST", help = "FTP server to download from")]
    pub host: Option<String>,

    /// Keep listings whose constant names collide
    ///
    /// By default two listings normalizing to the same constant name abort
    /// the run, since the generated file would not compile.
    #[arg(
        long = "allow-duplicates",
        help = "Do not fail when two listings share a constant name"
    )]
    pub allow_duplicates: bool,

    /// Fail when a numeric or timestamp cell cannot be decoded
    #[arg(long = "strict", help = "Fail on cells that cannot be decoded")]
    pub strict: bool,

    /// Perform a dry run without writing files
    ///
    /// Fetches, parses and renders everything, then reports what would have
    /// been written.
    #[arg(
        long = "dry-run",
        help = "Show what would be generated without writing files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// The command to run, falling back to generate with top-level flags
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Generate(self.generate.clone()))
    }
}

impl GenerateArgs {
    /// Validate the generate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(input_dir) = &self.input_dir {
            if !input_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(Error::configuration("FTP host cannot be empty"));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(language) = self.language {
            config.output.language = language;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output.root = Some(output_dir.clone());
        }
        if let Some(input_dir) = &self.input_dir {
            config.transfer.input_dir = Some(input_dir.clone());
        }
        if let Some(host) = &self.host {
            config.transfer.host = host.trim().to_string();
        }

        // Flags only ever switch behaviour on
        config.normalization.allow_duplicates |= self.allow_duplicates;
        config.normalization.strict_coercion |= self.strict;
        config.output.dry_run |= self.dry_run;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.get_command() {
            Commands::Generate(generate) => generate,
        }
    }

    #[test]
    fn test_no_arguments_defaults_to_generate() {
        let args = generate_args(&["ticker-symbols"]);

        assert!(args.language.is_none());
        assert!(args.output_dir.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_progress());
    }

    #[test]
    fn test_top_level_and_subcommand_flags() {
        let top = generate_args(&["ticker-symbols", "--language", "rust", "--dry-run"]);
        assert_eq!(top.language, Some(OutputLanguage::Rust));
        assert!(top.dry_run);

        let sub = generate_args(&[
            "ticker-symbols",
            "generate",
            "-o",
            "out",
            "--allow-duplicates",
            "--strict",
            "-vv",
        ]);
        assert_eq!(sub.output_dir, Some(PathBuf::from("out")));
        assert!(sub.allow_duplicates);
        assert!(sub.strict);
        assert_eq!(sub.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["ticker-symbols", "-q", "-v"]).is_err());

        let quiet = generate_args(&["ticker-symbols", "-q"]);
        assert_eq!(quiet.get_log_level(), "error");
        assert!(!quiet.show_progress());
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(Args::try_parse_from(["ticker-symbols", "--language", "cobol"]).is_err());
    }

    #[test]
    fn test_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = GenerateArgs {
            input_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        let missing_config = GenerateArgs {
            config_file: Some(temp_dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(missing_config.validate().is_err());

        let file_as_input = GenerateArgs {
            input_dir: Some(temp_dir.path().join("nasdaqlisted.txt")),
            ..Default::default()
        };
        assert!(file_as_input.validate().is_err());

        let blank_host = GenerateArgs {
            host: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank_host.validate().is_err());
    }

    #[test]
    fn test_apply_to_config() {
        let mut config = Config::new();
        let args = GenerateArgs {
            language: Some(OutputLanguage::Rust),
            input_dir: Some(PathBuf::from("fixtures")),
            host: Some(" ftp.example.com ".to_string()),
            allow_duplicates: true,
            ..Default::default()
        };

        args.apply_to(&mut config);

        assert_eq!(config.output.language, OutputLanguage::Rust);
        assert_eq!(config.output.root(), PathBuf::from("rust"));
        assert_eq!(config.transfer.input_dir, Some(PathBuf::from("fixtures")));
        assert_eq!(config.transfer.host, "ftp.example.com");
        assert!(config.normalization.allow_duplicates);
        assert!(!config.normalization.strict_coercion);
        assert!(!config.output.dry_run);
    }

    #[test]
    fn test_flags_do_not_clear_config_values() {
        let mut config = Config::new();
        config.output.dry_run = true;
        config.normalization.strict_coercion = true;

        GenerateArgs::default().apply_to(&mut config);

        assert!(config.output.dry_run);
        assert!(config.normalization.strict_coercion);
    }
}
