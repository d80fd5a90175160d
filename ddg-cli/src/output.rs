use ddg_core::error::{DdgError, ErrorKind};

const ORANGE: &str = "\x1b[38;5;214m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const BANNER: &str = r#" ____             _    ____             _     ____
|  _ \ _   _  ___| | _|  _ \ _   _  ___| | __/ ___| ___  _ __   ___
| | | | | | |/ __| |/ / | | | | | |/ __| |/ / |  _ / _ \| '_ \ / _ \
| |_| | |_| | (__|   <| |_| | |_| | (__|   <| |_| | (_) | | | |  __/
|____/ \__,_|\___|_|\_\____/ \__,_|\___|_|\_\\____|\___/|_| |_|\___|"#;

pub const HELP: &str = "Usage: ddg <command>

Commands:
  gen, generate    Generate new Duck email
  settings         View or change settings
  reset            Clear all settings and start over
  version          Show version
  help             Show this help

Settings:
  --apikey <key>         Replace the stored API key
  --clipboard yes|no     Copy generated emails to the clipboard
  --ddggen yes|no        Generate an email when running plain 'ddg'

Examples:
  ddg gen
  ddg settings
  ddg settings --clipboard no";

pub const SETUP_GUIDANCE: &str =
    "It looks like you haven't finished setting up DuckDuckGone! Please run ddg to get started.";

#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Colours are on unless `NO_COLOR` is set to a non-empty value.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self { color: !no_color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self) -> String {
        format!("{}\n", self.paint(ORANGE, BANNER))
    }

    pub fn address(&self, address: &str) -> String {
        self.paint(CYAN, address)
    }

    /// The line printed to stderr for a failed command.
    pub fn error_line(&self, err: &DdgError) -> String {
        match err.kind() {
            ErrorKind::InvalidCredential => self.paint(RED, "Error! Invalid token"),
            ErrorKind::SetupIncomplete => SETUP_GUIDANCE.to_string(),
            _ => format!("Error: {err}"),
        }
    }
}

pub fn version_line() -> String {
    format!("ddg version {}", env!("CARGO_PKG_VERSION"))
}
