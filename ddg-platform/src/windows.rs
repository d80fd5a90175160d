// Windows clipboard through the Win32 API.
//
// Kept behind `cfg(windows)` so the workspace builds cleanly elsewhere.

use clipboard_win::set_clipboard_string;
use ddg_engine::traits::{Clipboard, ClipboardOutcome};

#[derive(Debug, Default)]
pub struct WindowsClipboard;

#[async_trait::async_trait]
impl Clipboard for WindowsClipboard {
    async fn copy(&self, text: &str) -> ClipboardOutcome {
        match set_clipboard_string(text) {
            Ok(()) => ClipboardOutcome::Copied,
            Err(e) => ClipboardOutcome::Failed(format!("failed to write clipboard: {e}")),
        }
    }
}
