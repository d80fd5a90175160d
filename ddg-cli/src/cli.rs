use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ddg_core::config::SettingsUpdate;

/// Generate private Duck email addresses from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "ddg",
    version,
    disable_help_subcommand = true,
    infer_subcommands = true
)]
pub struct Cli {
    /// Path to the config file (defaults to ~/.ddg.conf)
    #[arg(long, global = true, env = "DDG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a new Duck email address
    #[command(visible_alias = "generate")]
    Gen,

    /// View or change settings
    Settings(SettingsArgs),

    /// Clear all settings and start over
    Reset,

    /// Show the version
    Version,

    /// Show usage
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct SettingsArgs {
    /// Replace the stored API key
    #[arg(long, value_name = "KEY")]
    pub apikey: Option<String>,

    /// Copy generated addresses to the clipboard (yes|no)
    #[arg(long, value_name = "yes|no")]
    pub clipboard: Option<String>,

    /// Generate an address when `ddg` runs without a command (yes|no)
    #[arg(long, value_name = "yes|no")]
    pub ddggen: Option<String>,
}

impl SettingsArgs {
    pub fn any_supplied(&self) -> bool {
        self.apikey.is_some() || self.clipboard.is_some() || self.ddggen.is_some()
    }

    pub fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate::from_flags(
            self.apikey.as_deref(),
            self.clipboard.as_deref(),
            self.ddggen.as_deref(),
        )
    }
}

/// Position of the subcommand token, skipping global flags and their values.
fn command_index(args: &[OsString]) -> Option<usize> {
    let mut i = 1;
    while i < args.len() {
        match args[i].to_str() {
            Some("--") => return (i + 1 < args.len()).then_some(i + 1),
            Some("--config") => i += 2,
            Some(s) if s.starts_with('-') => i += 1,
            _ => return Some(i),
        }
    }
    None
}

/// Command names are matched case-insensitively.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if let Some(idx) = command_index(&args) {
        if let Some(s) = args[idx].to_str() {
            args[idx] = OsString::from(s.to_lowercase());
        }
    }
    args
}

/// The command name clap rejected, as the user typed it.
pub fn rejected_command(err: &clap::Error, args: &[OsString]) -> String {
    use clap::error::{ContextKind, ContextValue};

    match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(s)) => s.clone(),
        _ => command_index(args)
            .map(|i| args[i].to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}
