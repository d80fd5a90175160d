// Copy by piping text into an external helper such as `pbcopy`.

use std::io::ErrorKind;
use std::process::Stdio;

use ddg_engine::traits::ClipboardOutcome;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub async fn pipe_to(program: &str, args: &[&str], text: &str) -> ClipboardOutcome {
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => return ClipboardOutcome::Unsupported,
        Err(e) => return ClipboardOutcome::Failed(format!("spawn {program}: {e}")),
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()).await {
            let _ = child.kill().await;
            return ClipboardOutcome::Failed(format!("write to {program}: {e}"));
        }
        // Dropping stdin closes the pipe so the helper sees EOF.
    }

    match child.wait().await {
        Ok(status) if status.success() => ClipboardOutcome::Copied,
        Ok(status) => ClipboardOutcome::Failed(format!("{program} exited with {status}")),
        Err(e) => ClipboardOutcome::Failed(format!("wait for {program}: {e}")),
    }
}
