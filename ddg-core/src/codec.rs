// Flat `key = value` format used by `~/.ddg.conf`.
//
// - `#` starts a comment that runs to the end of the line
// - keys are case-insensitive, values are trimmed of whitespace and quotes
// - lines without `=` or with unknown keys are skipped

use crate::config::{Configuration, parse_yes_no, yes_no};

pub const KEY_API: &str = "api";
pub const KEY_CLIPBOARD: &str = "clipboard";
pub const KEY_AUTO_GENERATE: &str = "ddggen";
pub const KEY_SETUP_COMPLETE: &str = "setupcomplete";

pub fn parse_config(text: &str) -> Configuration {
    let mut cfg = Configuration::default();

    for line in text.lines() {
        let Some((key, value)) = split_line(line) else {
            continue;
        };

        match key.as_str() {
            KEY_API => cfg.api_key = value.to_string(),
            KEY_CLIPBOARD => cfg.clipboard = parse_yes_no(value),
            KEY_AUTO_GENERATE => cfg.auto_generate = parse_yes_no(value),
            KEY_SETUP_COMPLETE => cfg.setup_complete = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    cfg
}

pub fn serialize_config(cfg: &Configuration) -> String {
    format!(
        "{KEY_API} = {}\n{KEY_CLIPBOARD} = {}\n{KEY_AUTO_GENERATE} = {}\n{KEY_SETUP_COMPLETE} = {}\n",
        cfg.api_key,
        cfg.clipboard.map(yes_no).unwrap_or_default(),
        cfg.auto_generate.map(yes_no).unwrap_or_default(),
        cfg.setup_complete,
    )
}

/// Returns the lowercased key and the cleaned value.
fn split_line(line: &str) -> Option<(String, &str)> {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_ascii_lowercase(), trim_quotes(value)))
}

fn trim_quotes(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '"' || c == '\'')
}
