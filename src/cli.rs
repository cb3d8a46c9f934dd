use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, AppConfig};
use crate::coordinator::{
    GlobalRuntime, LanguageCoordinator, Outcome, SelectError, TranslationRuntime,
    spawn_startup_resolution,
};
use crate::geo::{DetectionSource, GeoResolver};
use crate::i18n::{self, Locale};
use crate::store::{FileStore, LocaleStore};

#[derive(Parser, Debug)]
#[command(name = "geolang")]
#[command(about = "Resolve and manage the wallet client's UI language")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub(crate) struct Cli {
    /// Log decision details (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.config/geolang/config.ron
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Pick the startup language: stored manual choice, else geo detection
    Resolve,
    /// Set the language explicitly; detection will not override it
    Select {
        /// One of: en, zh, ko, vi, ja, pt, es
        code: String,
    },
    /// Forget the manual choice so the next start detects again
    Reset,
    /// Show the stored preference and the available languages
    Show,
    /// Print the UI string table for a language (default: the stored one)
    Strings {
        code: Option<String>,
    },
    /// Run geo detection only, without storing anything
    Detect {
        /// Print the provider result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write it to the config path
        #[arg(long)]
        write: bool,
    },
}

pub(crate) fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    i18n::set_locale(config.startup.default_locale);

    match cli.command {
        Command::Resolve => resolve(&config),
        Command::Select { code } => select(&config, &code),
        Command::Reset => {
            coordinator(&config).clear_manual_flag();
            println!("manual language choice cleared");
            Ok(ExitCode::SUCCESS)
        }
        Command::Show => {
            show(coordinator(&config).store());
            Ok(ExitCode::SUCCESS)
        }
        Command::Strings { code } => strings(&config, code.as_deref()),
        Command::Detect { json } => detect(&config, json),
        Command::Config { write } => print_config(&config, cli.config.as_deref(), write),
    }
}

fn resolve(config: &AppConfig) -> Result<ExitCode> {
    let (tx, rx) = mpsc::channel();
    let deadline = config.startup.deadline();
    let outcome = if spawn_startup_resolution(coordinator(config), tx) {
        match rx.recv_timeout(deadline) {
            Ok(outcome) => outcome,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    deadline_ms = config.startup.deadline_ms,
                    "language resolution timed out, continuing with default"
                );
                Outcome::Fallback
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("language resolution thread exited without a result");
                Outcome::Error
            }
        }
    } else {
        tracing::error!("could not start language resolution thread");
        Outcome::Error
    };

    let current = GlobalRuntime.current_language();
    println!("outcome: {outcome}");
    println!(
        "{}",
        i18n::t().language_applied.replace("{}", current.display_name())
    );
    Ok(ExitCode::SUCCESS)
}

fn select(config: &AppConfig, code: &str) -> Result<ExitCode> {
    match coordinator(config).select_language(code) {
        Ok(locale) => {
            println!(
                "{}",
                i18n::t().language_applied.replace("{}", locale.display_name())
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(SelectError::Unsupported(code)) => {
            let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
            eprintln!(
                "unsupported language {code:?}; expected one of {}",
                codes.join(", ")
            );
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("failed to apply language"),
    }
}

fn show(store: &LocaleStore) {
    let stored = store.stored_language();
    println!("stored language: {}", stored.as_deref().unwrap_or("-"));
    println!("manual choice:   {}", store.is_manual_selection());
    println!();
    println!("{}:", i18n::t().language_selector_title);
    let active = stored.as_deref().and_then(Locale::from_code);
    for (&locale, name) in Locale::ALL.iter().zip(Locale::DISPLAY_NAMES) {
        let marker = if active == Some(locale) { "*" } else { " " };
        println!(" {marker} {:<3} {name}", locale.code());
    }
}

fn strings(config: &AppConfig, code: Option<&str>) -> Result<ExitCode> {
    let locale = match code {
        Some(code) => Locale::from_code(code),
        None => Some(
            open_store(config)
                .stored_language()
                .as_deref()
                .and_then(Locale::from_code)
                .unwrap_or(config.startup.default_locale),
        ),
    };
    let Some(locale) = locale else {
        eprintln!("unsupported language {:?}", code.unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    };
    println!("# {} ({})", locale.display_name(), locale.code());
    for (key, value) in locale.translations().entries() {
        println!("{key:<24} {value}");
    }
    Ok(ExitCode::SUCCESS)
}

fn detect(config: &AppConfig, json: bool) -> Result<ExitCode> {
    let detection = GeoResolver::from_config(&config.geo).infer();
    if json {
        let geo = match &detection.source {
            DetectionSource::Provider(info) => Some(info),
            DetectionSource::RuntimeTag(_) => None,
        };
        let runtime_tag = match &detection.source {
            DetectionSource::RuntimeTag(tag) => tag.as_deref(),
            DetectionSource::Provider(_) => None,
        };
        let report = serde_json::json!({
            "locale": detection.locale.code(),
            "geo": geo,
            "runtime_tag": runtime_tag,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{detection}");
    }
    Ok(ExitCode::SUCCESS)
}

fn print_config(config: &AppConfig, explicit: Option<&Path>, write: bool) -> Result<ExitCode> {
    let pretty = ron::ser::PrettyConfig::default();
    println!("{}", ron::ser::to_string_pretty(config, pretty)?);
    if !write {
        return Ok(ExitCode::SUCCESS);
    }
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(config::config_path)
        .context("no config directory available")?;
    if config::save_config_to(config, &path) {
        println!("written to {}", path.display());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("could not write {}", path.display());
        Ok(ExitCode::FAILURE)
    }
}

fn open_store(config: &AppConfig) -> LocaleStore {
    match config::preferences_path(config) {
        Some(path) => {
            let backend = FileStore::new(path);
            tracing::debug!(path = %backend.path().display(), "using preference file");
            LocaleStore::new(Box::new(backend))
        }
        None => {
            tracing::warn!("no config directory, language preference will not persist");
            LocaleStore::in_memory()
        }
    }
}

fn coordinator(config: &AppConfig) -> LanguageCoordinator<GlobalRuntime> {
    LanguageCoordinator::new(
        open_store(config),
        GeoResolver::from_config(&config.geo),
        GlobalRuntime,
    )
}
