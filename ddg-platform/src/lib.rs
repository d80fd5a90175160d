//! Platform clipboard implementations.
//!
//! `system_clipboard` picks the implementation for the build target; targets
//! without one get [`test::UnsupportedClipboard`].

use std::sync::Arc;

use ddg_engine::traits::Clipboard;

#[cfg(unix)]
mod pipe;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(all(unix, not(target_os = "macos")))]
pub mod linux;

#[cfg(windows)]
pub mod windows;


pub fn system_clipboard() -> Arc<dyn Clipboard> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(macos::MacosClipboard)
    }

    #[cfg(windows)]
    {
        Arc::new(windows::WindowsClipboard)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Arc::new(linux::LinuxClipboard)
    }

    #[cfg(not(any(unix, windows)))]
    {
        Arc::new(test::UnsupportedClipboard)
    }
}
