// src/clipboard.rs
use crate::error::ProcessError;

/// Destination for the assembled document.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Clipboard`] if the clipboard cannot be reached.
    fn copy(&mut self, text: &str) -> Result<(), ProcessError>;
}

/// The desktop clipboard.
///
/// On X11 and Wayland the copying process owns the selection, and it exits
/// right after `run` returns. Without a clipboard manager running to take
/// over the contents, they are gone once the process ends. Windows and macOS
/// keep the text after exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    #[inline]
    fn copy(&mut self, text: &str) -> Result<(), ProcessError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ProcessError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ProcessError::Clipboard(err.to_string()))
    }
}

impl Clipboard for String {
    #[inline]
    fn copy(&mut self, text: &str) -> Result<(), ProcessError> {
        text.clone_into(self);
        Ok(())
    }
}
