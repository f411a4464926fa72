//! Running in the background.
//!
//! The process re-launches itself with the same arguments, detached from the
//! terminal's process group, then exits. The background copy's stdout and
//! stderr are appended to a log file, so its startup failures stay visible.
//! An environment marker tells the relaunched copy not to do it again.

use std::fs::OpenOptions;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Context;

pub const DETACHED_ENV: &str = "STATICD_DETACHED";

/// True inside the relaunched background copy.
pub fn is_detached() -> bool {
    std::env::var_os(DETACHED_ENV).is_some()
}

/// Starts the background copy, logging to `log_path`, and returns its pid.
pub fn spawn_detached(log_path: &Path) -> anyhow::Result<u32> {
    let exe = std::env::current_exe().context("failed to locate own executable")?;

    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let log_err = log.try_clone().context("failed to duplicate log file handle")?;

    let mut cmd = Command::new(exe);
    cmd.args(std::env::args_os().skip(1))
        .env(DETACHED_ENV, "1")
        .stdin(Stdio::null())
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(log_err));

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let child = cmd.spawn().context("failed to start background process")?;
    Ok(child.id())
}
