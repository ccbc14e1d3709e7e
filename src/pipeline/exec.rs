//! External tool execution.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::Output;
use std::time::Duration;

use tokio::process::Command;

/// Why a tool invocation failed. Each stage maps this into its own error
/// kind; the tool's error stream goes to the logs, never into the error.
#[derive(Debug)]
pub enum ExecFailure {
    /// The process could not be started at all
    Spawn {
        /// Tool binary name
        tool: String,
        /// Underlying IO error
        source: std::io::Error,
    },
    /// The process ran and reported failure
    Exit {
        /// Tool binary name
        tool: String,
        /// Exit code, absent when killed by a signal
        code: Option<i32>,
    },
    /// The process outlived the configured limit and was killed
    Timeout {
        /// Tool binary name
        tool: String,
        /// The limit that was exceeded
        limit: Duration,
    },
}

impl fmt::Display for ExecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { tool, source } => write!(f, "failed to start {tool}: {source}"),
            Self::Exit {
                tool,
                code: Some(code),
            } => write!(f, "{tool} exited with status {code}"),
            Self::Exit { tool, code: None } => write!(f, "{tool} was terminated by a signal"),
            Self::Timeout { tool, limit } => write!(f, "{tool} timed out after {limit:?}"),
        }
    }
}

/// Run `tool` with `args` and wait for it to finish.
///
/// Success is a zero exit status. Anything the tool writes to its error
/// stream is logged, at debug level on success and error level on
/// failure. With `timeout` set the child is killed once the limit passes.
pub async fn run(
    tool: &Path,
    args: &[OsString],
    timeout: Option<Duration>,
) -> Result<(), ExecFailure> {
    let name = tool_name(tool);
    log::debug!("running {} {:?}", tool.display(), loggable(args));

    let mut command = Command::new(tool);
    command.args(args).kill_on_drop(true);

    let pending = command.output();
    let output = match timeout {
        Some(limit) => tokio::time::timeout(limit, pending)
            .await
            .map_err(|_| ExecFailure::Timeout {
                tool: name.clone(),
                limit,
            })?,
        None => pending.await,
    }
    .map_err(|source| ExecFailure::Spawn {
        tool: name.clone(),
        source,
    })?;

    log_stderr(&name, &output);

    if output.status.success() {
        Ok(())
    } else {
        Err(ExecFailure::Exit {
            tool: name,
            code: output.status.code(),
        })
    }
}

/// Display form of the argument vector for the debug log. The value
/// following `--signWithParams` embeds the certificate password and is
/// masked.
fn loggable(args: &[OsString]) -> Vec<String> {
    let mut mask_next = false;
    args.iter()
        .map(|arg| {
            if mask_next {
                mask_next = false;
                return "<redacted>".to_owned();
            }
            if arg == "--signWithParams" {
                mask_next = true;
            }
            arg.to_string_lossy().into_owned()
        })
        .collect()
}

fn log_stderr(tool: &str, output: &Output) {
    if output.stderr.is_empty() {
        return;
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim_end();
    if output.status.success() {
        log::debug!("{tool}: {stderr}");
    } else {
        log::error!("{tool}: {stderr}");
    }
}

fn tool_name(tool: &Path) -> String {
    tool.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| tool.display().to_string())
}
