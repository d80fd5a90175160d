use std::io::{BufRead, Write};

use ddg_core::config::Configuration;
use ddg_core::error::DdgError;
use ddg_runtime::ConfigStore;

use crate::terminal::Terminal;

pub const PROMPT_CONFIRM: &str =
    "⚠️ Are you sure you want to completely reset this application? (yes/no): ";
pub const PROMPT_PHRASE: &str =
    "Type 'Reset' to reset the application. This is your final chance to go back: ";
pub const CONFIRM_PHRASE: &str = "Reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Cancelled,
    Reset,
}

/// Double-confirmed reset. Nothing is written unless both answers match.
pub fn run_reset<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    store: &ConfigStore,
) -> Result<ResetOutcome, DdgError> {
    let first = term.ask(PROMPT_CONFIRM).ok().flatten().unwrap_or_default();
    if !first.trim().eq_ignore_ascii_case("yes") {
        let _ = term.say("❌ Reset cancelled.");
        return Ok(ResetOutcome::Cancelled);
    }

    let second = term.ask(PROMPT_PHRASE).ok().flatten().unwrap_or_default();
    if second.trim() != CONFIRM_PHRASE {
        let _ = term.say("❌ Reset cancelled.");
        return Ok(ResetOutcome::Cancelled);
    }

    store.save(&Configuration::cleared())?;
    log::info!("config reset at {}", store.path().display());
    let _ = term.say("✅ Application reset. Run 'ddg' again to set up.");
    Ok(ResetOutcome::Reset)
}
