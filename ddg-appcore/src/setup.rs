use std::io::{BufRead, Write};

use ddg_core::config::{Configuration, DEFAULT_AUTO_GENERATE, DEFAULT_CLIPBOARD, parse_yes_no};
use ddg_core::error::DdgError;
use ddg_runtime::ConfigStore;

use crate::terminal::Terminal;

pub const WELCOME: &str = "Hi! Looks like you haven't used DuckDuckGone before!";
pub const PROMPT_API_KEY: &str = "Enter your API key: ";
pub const PROMPT_CLIPBOARD: &str = "Copy emails to clipboard automatically? (yes/no) [yes]: ";
pub const PROMPT_AUTO_GENERATE: &str =
    "Run 'ddg' to generate an email automatically? (yes/no) [yes]: ";

/// First-run wizard. Writes and returns a completed configuration.
///
/// An empty API key aborts with `MissingCredential` before anything is
/// written.
pub fn run_wizard<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    store: &ConfigStore,
) -> Result<Configuration, DdgError> {
    let _ = term.say(WELCOME);

    let api_key = ask_trimmed(term, PROMPT_API_KEY);
    if api_key.is_empty() {
        return Err(DdgError::MissingCredential);
    }

    let clipboard = parse_yes_no(&ask_trimmed(term, PROMPT_CLIPBOARD)).unwrap_or(DEFAULT_CLIPBOARD);
    let auto_generate =
        parse_yes_no(&ask_trimmed(term, PROMPT_AUTO_GENERATE)).unwrap_or(DEFAULT_AUTO_GENERATE);

    let cfg = Configuration::completed(api_key, clipboard, auto_generate);
    store.save(&cfg)?;
    log::info!("setup complete, config written to {}", store.path().display());
    Ok(cfg)
}

fn ask_trimmed<R: BufRead, W: Write>(term: &mut Terminal<R, W>, prompt: &str) -> String {
    // Unreadable input counts as an empty answer.
    term.ask(prompt)
        .ok()
        .flatten()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
