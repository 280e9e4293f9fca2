//! Launching the text editor and the scraper job
//!
//! Both block until the child exits and inherit the terminal. A non-zero
//! exit is returned to the caller as a status, not as an error.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::error::{self, Result};

/// Open `path` in `editor` and wait for it to close.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<ExitStatus> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| error::input::invalid("editor command is empty"))?;

    info!(editor, path = %path.display(), "opening editor");
    Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| spawn_error(program, &e))
}

/// Run the scraper once: `sh -c "cd <workdir> && <runner>"`.
pub fn run_job(workdir: &str, runner: &str) -> Result<ExitStatus> {
    let script = format!("cd {workdir} && {runner}");
    info!(script = %script, "running job");
    Command::new("sh")
        .arg("-c")
        .arg(&script)
        .status()
        .map_err(|e| spawn_error("sh", &e))
}

fn spawn_error(program: &str, e: &std::io::Error) -> error::TrendctlError {
    if e.kind() == ErrorKind::NotFound {
        error::tool::missing(program)
    } else {
        error::tool::launch_failed(program, e.to_string())
    }
}
