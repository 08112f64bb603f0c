use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the postdesk binary.
#[derive(Debug, Parser)]
#[command(name = "postdesk", version, about = "Blog post desk")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTDESK_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the interactive post shell.
    Shell(Box<ShellArgs>),
    /// Print the filtered post list once and exit.
    List(ListArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub overrides: RuntimeOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub overrides: RuntimeOverrides,

    /// Only show posts whose title or content contains this text.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show posts in this category; repeat to allow several.
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RuntimeOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Load posts from this JSON file at start-up.
    #[arg(long = "seed-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub seed_file: Option<PathBuf>,

    /// Override the largest accepted image, in bytes.
    #[arg(long = "images-max-bytes", value_name = "BYTES")]
    pub images_max_bytes: Option<u64>,

    /// Replace the category catalog (comma separated).
    #[arg(long = "categories", value_name = "NAMES", value_delimiter = ',')]
    pub catalog_categories: Option<Vec<String>>,
}
