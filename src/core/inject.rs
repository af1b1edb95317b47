//! Append rendered variables to the output file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::format::Tool;
use crate::core::types::Variables;
use crate::error::Result;

/// Outcome of an injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// File written to.
    pub path: PathBuf,
    /// Lines appended. Zero means the file was not touched.
    pub count: usize,
}

/// Append one line per variable to `path` in `tool`'s syntax.
///
/// An empty `vars` is a no-op: the file is neither created nor opened.
/// Existing content is never truncated, so repeated runs accumulate lines.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened or a write fails. Lines
/// written before the failure stay on disk.
pub fn inject(vars: &Variables, tool: Tool, path: impl AsRef<Path>) -> Result<Injection> {
    let path = path.as_ref();

    if vars.is_empty() {
        debug!("no secrets to be injected");
        return Ok(Injection {
            path: path.to_path_buf(),
            count: 0,
        });
    }

    debug!(path = %path.display(), %tool, "injecting secrets");

    // Dropped on every return path, which closes the handle.
    let mut file = open_append(path)?;

    for (name, value) in vars {
        debug!(key = %name, "injecting secret");
        let line = Zeroizing::new(tool.render(name, value));
        file.write_all(line.as_bytes())?;
    }
    file.flush()?;

    debug!(count = vars.len(), "secrets injected");

    Ok(Injection {
        path: path.to_path_buf(),
        count: vars.len(),
    })
}

fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::core::constants::SECRETS_FILE_MODE);
    }

    options.open(path)
}
