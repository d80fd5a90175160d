use ddg_core::config::{Configuration, yes_no};

/// Human-readable view of the current settings. The key is shown as-is.
pub fn render_settings(cfg: &Configuration) -> String {
    let api_key = if cfg.api_key.is_empty() {
        "-"
    } else {
        cfg.api_key.as_str()
    };

    format!(
        "Current settings:\n\
         - API key: {}\n\
         - Clipboard copy: {}\n\
         - Run ddg auto-generate: {}\n\
         \n\
         Use 'ddg help' to learn how to change these.",
        api_key,
        yes_no(cfg.clipboard_enabled()),
        yes_no(cfg.auto_generate_on_launch()),
    )
}
