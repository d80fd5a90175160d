use std::path::{Path, PathBuf};

use ddg_core::codec::{parse_config, serialize_config};
use ddg_core::config::{CONFIG_FILE_NAME, Configuration};
use ddg_core::error::DdgError;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.ddg.conf`.
    pub fn in_home() -> Result<Self, DdgError> {
        let home = dirs::home_dir().ok_or(DdgError::HomeDirUnavailable)?;
        Ok(Self::at_path(home.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. A missing or unreadable file is a `ConfigUnreadable`
    /// error; callers that can proceed without one fall back to the default.
    pub fn load(&self) -> Result<Configuration, DdgError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| {
            DdgError::ConfigUnreadable {
                path: self.path.clone(),
                source,
            }
        })?;
        log::debug!("loaded config from {}", self.path.display());
        Ok(parse_config(&text))
    }

    pub fn save(&self, cfg: &Configuration) -> Result<(), DdgError> {
        let text = serialize_config(cfg);
        crate::fsutil::write_private_atomic(&self.path, text.as_bytes()).map_err(|e| {
            DdgError::ConfigWriteFailed {
                path: self.path.clone(),
                source: std::io::Error::other(format!("{e:#}")),
            }
        })?;
        log::debug!("saved config to {}", self.path.display());
        Ok(())
    }

    /// Loads a ready configuration and fills unset preferences with their
    /// defaults, writing them back when possible. Write failures are logged
    /// and ignored.
    pub fn load_with_defaults(&self) -> Result<Configuration, DdgError> {
        let cfg = self.load()?;
        if !cfg.is_ready() || !cfg.has_unset_preferences() {
            return Ok(cfg);
        }

        let cfg = cfg.with_defaults();
        if let Err(e) = self.save(&cfg) {
            log::warn!("could not persist default settings: {e}");
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddg_core::error::ErrorKind;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::at_path(dir.path().join(CONFIG_FILE_NAME))
    }

    #[test]
    fn round_trips_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let cfg = Configuration::completed("key-123", false, true);
        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn round_trips_cleared_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Configuration::cleared()).unwrap();
        assert_eq!(store.load().unwrap(), Configuration::cleared());
    }

    #[test]
    fn resaving_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "# written by hand\nAPI = \"abc\"\nclipboard = YES\nddggen = no\nsetupcomplete = true\n",
        )
        .unwrap();

        store.save(&store.load().unwrap()).unwrap();
        let first = std::fs::read(store.path()).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigUnreadable);
    }

    #[test]
    fn non_text_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), [0x61, 0x70, 0x69, 0x20, 0x3d, 0x20, 0xff, 0xfe, 0x0a]).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigUnreadable);
        let err = store.load_with_defaults().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigUnreadable);
    }

    #[test]
    fn saving_over_a_tmp_named_file_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("ddg.tmp"));
        store.save(&Configuration::completed("old", true, true)).unwrap();

        let cfg = Configuration::completed("new", false, false);
        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn saving_keeps_unrelated_backup_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let bak = dir.path().join(".ddg.bak");
        std::fs::write(&bak, "not ours").unwrap();

        store.save(&Configuration::completed("k", true, true)).unwrap();
        store.save(&Configuration::completed("k2", true, true)).unwrap();

        assert_eq!(std::fs::read_to_string(&bak).unwrap(), "not ours");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("nope").join(CONFIG_FILE_NAME));
        let err = store.save(&Configuration::cleared()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigWriteFailed);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Configuration::completed("k", true, true)).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn fills_and_persists_missing_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "api = k\nsetupcomplete = true\n").unwrap();

        let cfg = store.load_with_defaults().unwrap();
        assert_eq!(cfg, Configuration::completed("k", true, true));
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn leaves_incomplete_config_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let text = "api = \nclipboard = \nddggen = \nsetupcomplete = false\n";
        std::fs::write(store.path(), text).unwrap();

        let cfg = store.load_with_defaults().unwrap();
        assert!(!cfg.is_ready());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), text);
    }
}
