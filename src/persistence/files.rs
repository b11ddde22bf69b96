use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const INBOX_DIR_NAME: &str = ".inbox";

/// Resolve the inbox directory.
///
/// An explicit override wins; otherwise a local .inbox in the current
/// directory or any ancestor; otherwise the global ~/.inbox.
pub fn get_inbox_dir(dir_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = dir_override {
        return Ok(dir.to_path_buf());
    }

    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_inbox(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(INBOX_DIR_NAME))
}

/// Find local .inbox directory by walking up the directory tree
fn find_local_inbox(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let inbox_dir = current.join(INBOX_DIR_NAME);
        if inbox_dir.is_dir() {
            return Some(inbox_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the inbox directory exists
pub fn ensure_inbox_dir(dir_override: Option<&Path>) -> Result<PathBuf> {
    let dir = get_inbox_dir(dir_override)?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .inbox directory inside `parent`
pub fn init_local_inbox(parent: &Path) -> Result<PathBuf> {
    let inbox_dir = parent.join(INBOX_DIR_NAME);

    if inbox_dir.exists() {
        anyhow::bail!("Inbox directory already exists: {}", inbox_dir.display());
    }

    fs::create_dir_all(&inbox_dir)
        .with_context(|| format!("Failed to create directory: {}", inbox_dir.display()))?;

    Ok(inbox_dir)
}

/// Path of the state snapshot inside an inbox directory
pub fn state_file(dir: &Path) -> PathBuf {
    dir.join("state.json")
}

/// Path of the log file inside an inbox directory
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join("inbox.log")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Copy a file aside as `<name>.corrupt-<timestamp>` so it is not lost on the next save
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("File path has no file name")?;
    let stem = format!("{}.corrupt-{}", file_name, timestamp);

    // Never clobber an earlier backup taken within the same millisecond
    let mut backup_path = path.with_file_name(&stem);
    let mut suffix = 1;
    while backup_path.exists() {
        backup_path = path.with_file_name(format!("{}-{}", stem, suffix));
        suffix += 1;
    }

    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to backup file: {}", path.display()))?;

    Ok(backup_path)
}
