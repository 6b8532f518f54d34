//! Runner for the external deployment process.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::time::sleep;

use crate::Error;

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

// The output readers can still be flushing after the process has exited;
// a short delay covers most of those cases.
const OUTPUT_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Runs the deployment process to completion and returns its exit status.
///
/// Stdout and stderr are drained line-by-line on background tasks and
/// forwarded to the logs. The exit status is polled on a fixed interval;
/// once the process has exited the runner waits a fixed grace period so
/// the readers can catch up.
pub async fn run_to_completion(program: &str, args: &[&str]) -> Result<ExitStatus, Error> {
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or("deployment process has no stdout handle")?;
    let stderr = child
        .stderr
        .take()
        .ok_or("deployment process has no stderr handle")?;

    drain_lines(stdout, false);
    drain_lines(stderr, true);

    loop {
        if let Some(status) = child.try_wait()? {
            sleep(OUTPUT_GRACE_PERIOD).await;
            return Ok(status);
        }

        sleep(EXIT_POLL_INTERVAL).await;
    }
}

fn drain_lines(stream: impl AsyncRead + Unpin + Send + 'static, is_error: bool) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if is_error {
                tracing::warn!(target: "deploy", "{line}");
            } else {
                tracing::info!(target: "deploy", "{line}");
            }
        }
    });
}
