use crate::error::{Error, Result};
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub program: String,
    pub args: Vec<String>,
    pub status: i32,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs `program args..` to completion, killing it once `timeout` elapses.
/// A non-zero exit is reported as [`Error::Command`] carrying stderr.
pub async fn run(program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult> {
    debug!("running {program} {}", args.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args).kill_on_drop(true);

    let out = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(out)) => out,
        Ok(Err(e)) => return Err(Error::command(program, format!("failed to run: {e}"))),
        Err(_) => {
            return Err(Error::command(program, format!("timed out after {timeout:?}")));
        }
    };

    let result = CommandResult {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        status: out.status.code().unwrap_or(-1),
        stdout: out.stdout,
        stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
    };

    if result.success() {
        return Ok(result);
    }

    Err(Error::command(
        program,
        if result.stderr.is_empty() {
            format!("exited with status {}", result.status)
        } else {
            result.stderr
        },
    ))
}
