use std::io::{BufRead, Write};

use ddg_core::config::{Configuration, SettingsUpdate};
use ddg_core::error::{DdgError, ErrorKind};
use ddg_engine::{Generation, Generator};
use ddg_runtime::ConfigStore;

use crate::reset::{ResetOutcome, run_reset};
use crate::setup::run_wizard;
use crate::terminal::Terminal;

/// What the bare `ddg` invocation ended up doing.
#[derive(Debug)]
pub enum Launch {
    Generated(Generation),
    ShowHelp,
}

pub struct AppService {
    config_store: ConfigStore,
    generator: Generator,
}

impl AppService {
    pub fn new(config_store: ConfigStore, generator: Generator) -> Self {
        Self {
            config_store,
            generator,
        }
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config_store
    }

    /// The stored configuration, provided setup has been completed.
    ///
    /// A missing file counts as incomplete setup; callers must never fall
    /// back to the wizard from here.
    pub fn ready_config(&self) -> Result<Configuration, DdgError> {
        match self.config_store.load_with_defaults() {
            Ok(cfg) if cfg.is_ready() => Ok(cfg),
            Ok(_) => Err(DdgError::SetupIncomplete),
            Err(e) if e.kind() == ErrorKind::ConfigUnreadable => {
                log::debug!("{e}");
                Err(DdgError::SetupIncomplete)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the ready configuration or runs the first-run wizard.
    pub fn ensure_setup<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> Result<Configuration, DdgError> {
        match self.ready_config() {
            Ok(cfg) => Ok(cfg),
            Err(e) if e.kind() == ErrorKind::SetupIncomplete => {
                run_wizard(term, &self.config_store)
            }
            Err(e) => Err(e),
        }
    }

    /// Bare invocation: set up if needed, then generate or fall back to help
    /// depending on the auto-generate preference.
    pub async fn launch<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> Result<Launch, DdgError> {
        let cfg = self.ensure_setup(term)?;
        if !cfg.auto_generate_on_launch() {
            return Ok(Launch::ShowHelp);
        }
        self.generator.generate(&cfg).await.map(Launch::Generated)
    }

    pub async fn generate(&self) -> Result<Generation, DdgError> {
        let cfg = self.ready_config()?;
        self.generator.generate(&cfg).await
    }

    pub fn current_settings(&self) -> Result<Configuration, DdgError> {
        self.ready_config()
    }

    /// Read-modify-write: only the supplied fields change.
    pub fn update_settings(&self, update: &SettingsUpdate) -> Result<Configuration, DdgError> {
        let cfg = update.apply(self.ready_config()?);
        self.config_store.save(&cfg)?;
        Ok(cfg)
    }

    pub fn reset<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> Result<ResetOutcome, DdgError> {
        run_reset(term, &self.config_store)
    }
}
