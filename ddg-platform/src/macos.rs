//! macOS clipboard via `pbcopy`.

use ddg_engine::traits::{Clipboard, ClipboardOutcome};

#[derive(Debug, Default)]
pub struct MacosClipboard;

#[async_trait::async_trait]
impl Clipboard for MacosClipboard {
    async fn copy(&self, text: &str) -> ClipboardOutcome {
        crate::pipe::pipe_to("pbcopy", &[], text).await
    }
}
