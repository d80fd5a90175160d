use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Writes `bytes` to a fresh temp file in the same directory, then renames it
/// over `dst` in one step.
///
/// `NamedTempFile` is created owner-only on Unix, so the secret never sits in
/// a world-readable file, even briefly. No other sibling of `dst` is touched.
pub fn write_private_atomic(dst: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in: {}", dir.display()))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed writing: {}", tmp.path().display()))?;

    tmp.persist(dst)
        .map_err(|e| anyhow::Error::new(e.error))
        .with_context(|| format!("failed to replace: {}", dst.display()))?;
    restrict_to_owner(dst)
}

#[cfg(unix)]
pub fn restrict_to_owner(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("failed to chmod: {}", path.display()))
}

#[cfg(not(unix))]
pub fn restrict_to_owner(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn replaces_existing_file_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("a.conf");
        fs::write(&dst, "old").unwrap();

        write_private_atomic(&dst, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
        assert_eq!(entries(dir.path()), vec!["a.conf".to_string()]);
    }

    #[test]
    fn target_ending_in_tmp_is_replaced_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("ddg.tmp");
        fs::write(&dst, "old").unwrap();

        write_private_atomic(&dst, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
        assert_eq!(entries(dir.path()), vec!["ddg.tmp".to_string()]);
    }

    #[test]
    fn sibling_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join(".ddg.conf");
        let bak = dir.path().join(".ddg.bak");
        let tmp = dir.path().join(".ddg.tmp");
        fs::write(&dst, "old").unwrap();
        fs::write(&bak, "mine").unwrap();
        fs::write(&tmp, "also mine").unwrap();

        write_private_atomic(&dst, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
        assert_eq!(fs::read_to_string(&bak).unwrap(), "mine");
        assert_eq!(fs::read_to_string(&tmp).unwrap(), "also mine");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("nope").join("a.conf");
        assert!(write_private_atomic(&dst, b"x").is_err());
        assert!(!dst.exists());
    }

    #[cfg(unix)]
    #[test]
    fn tightens_loose_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("a.conf");
        fs::write(&dst, "x").unwrap();
        fs::set_permissions(&dst, fs::Permissions::from_mode(0o644)).unwrap();

        write_private_atomic(&dst, b"y").unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
