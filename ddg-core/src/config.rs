pub const CONFIG_FILE_NAME: &str = ".ddg.conf";

pub const DEFAULT_CLIPBOARD: bool = true;
pub const DEFAULT_AUTO_GENERATE: bool = true;

/// Persistent user configuration.
///
/// Preferences are `None` when the file leaves them blank (for example right
/// after a reset); the accessors resolve those to the defaults.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    pub api_key: String,
    pub clipboard: Option<bool>,
    pub auto_generate: Option<bool>,
    pub setup_complete: bool,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("Configuration")
            .field("api_key", &api_key)
            .field("clipboard", &self.clipboard)
            .field("auto_generate", &self.auto_generate)
            .field("setup_complete", &self.setup_complete)
            .finish()
    }
}

impl Configuration {
    /// The value a confirmed reset writes: everything blank, setup pending.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// A freshly completed setup.
    pub fn completed(api_key: impl Into<String>, clipboard: bool, auto_generate: bool) -> Self {
        Self {
            api_key: api_key.into(),
            clipboard: Some(clipboard),
            auto_generate: Some(auto_generate),
            setup_complete: true,
        }
    }

    pub fn clipboard_enabled(&self) -> bool {
        self.clipboard.unwrap_or(DEFAULT_CLIPBOARD)
    }

    pub fn auto_generate_on_launch(&self) -> bool {
        self.auto_generate.unwrap_or(DEFAULT_AUTO_GENERATE)
    }

    /// Requests may only be issued for a ready configuration.
    pub fn is_ready(&self) -> bool {
        !self.api_key.is_empty() && self.setup_complete
    }

    pub fn has_unset_preferences(&self) -> bool {
        self.clipboard.is_none() || self.auto_generate.is_none()
    }

    pub fn with_defaults(mut self) -> Self {
        self.clipboard.get_or_insert(DEFAULT_CLIPBOARD);
        self.auto_generate.get_or_insert(DEFAULT_AUTO_GENERATE);
        self
    }
}

/// Fields supplied to the settings command. `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub clipboard: Option<bool>,
    pub auto_generate: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.clipboard.is_none() && self.auto_generate.is_none()
    }

    /// Builds an update from raw flag values. Boolean flags only accept the
    /// tokens `yes` and `no`; anything else is dropped.
    pub fn from_flags(
        api_key: Option<&str>,
        clipboard: Option<&str>,
        auto_generate: Option<&str>,
    ) -> Self {
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            clipboard: clipboard.and_then(parse_yes_no),
            auto_generate: auto_generate.and_then(parse_yes_no),
        }
    }

    pub fn apply(&self, base: Configuration) -> Configuration {
        let mut cfg = base;
        if let Some(key) = &self.api_key {
            cfg.api_key = key.clone();
        }
        if let Some(v) = self.clipboard {
            cfg.clipboard = Some(v);
        }
        if let Some(v) = self.auto_generate {
            cfg.auto_generate = Some(v);
        }
        cfg
    }
}

pub fn parse_yes_no(raw: &str) -> Option<bool> {
    let v = raw.trim();
    if v.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if v.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

pub fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}
