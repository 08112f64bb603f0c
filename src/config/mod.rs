//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{num::NonZeroUsize, path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::domain::categories::{CategoryCatalog, DEFAULT_CATEGORIES};

pub use cli::{CliArgs, Command, ListArgs, RuntimeOverrides, ShellArgs};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "postdesk";
const ENV_PREFIX: &str = "POSTDESK";
const DEFAULT_IMAGE_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub catalog: CategoryCatalog,
    pub images: ImageSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub max_bytes: NonZeroUsize,
}

#[derive(Debug, Clone, Default)]
pub struct SeedSettings {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("catalog.categories")
            .try_parsing(true),
    );

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Shell(args)) => raw.apply_overrides(&args.overrides),
        Some(Command::List(args)) => raw.apply_overrides(&args.overrides),
        None => raw.apply_overrides(&RuntimeOverrides::default()),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    catalog: RawCatalogSettings,
    images: RawImageSettings,
    seed: RawSeedSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &RuntimeOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(path) = overrides.seed_file.as_ref() {
            self.seed.file = Some(path.clone());
        }
        if let Some(limit) = overrides.images_max_bytes {
            self.images.max_bytes = Some(limit);
        }
        if let Some(categories) = overrides.catalog_categories.as_ref() {
            self.catalog.categories = Some(categories.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            catalog,
            images,
            seed,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            catalog: build_catalog(catalog)?,
            images: build_image_settings(images)?,
            seed: build_seed_settings(seed),
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_catalog(catalog: RawCatalogSettings) -> Result<CategoryCatalog, LoadError> {
    let names = catalog.categories.unwrap_or_else(|| {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| name.to_string())
            .collect()
    });

    CategoryCatalog::new(names)
        .map_err(|err| LoadError::invalid("catalog.categories", err.to_string()))
}

fn build_image_settings(images: RawImageSettings) -> Result<ImageSettings, LoadError> {
    let value = images.max_bytes.unwrap_or(DEFAULT_IMAGE_MAX_BYTES);
    let value = usize::try_from(value).map_err(|_| {
        LoadError::invalid(
            "images.max_bytes",
            "value exceeds supported range for usize",
        )
    })?;
    let max_bytes = NonZeroUsize::new(value)
        .ok_or_else(|| LoadError::invalid("images.max_bytes", "must be greater than zero"))?;

    Ok(ImageSettings { max_bytes })
}

fn build_seed_settings(seed: RawSeedSettings) -> SeedSettings {
    let file = seed.file.filter(|path| !path.as_os_str().is_empty());
    SeedSettings { file }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCatalogSettings {
    categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawImageSettings {
    max_bytes: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSeedSettings {
    file: Option<PathBuf>,
}
