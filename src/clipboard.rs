//! Clipboard write contract with a two-tier fallback
//!
//! The actual clipboard is a platform primitive outside this crate. The
//! engine only needs a narrow contract: attempt a write, report a boolean,
//! never panic. Hosts wire their preferred API as the primary writer and
//! their legacy path as the fallback via [`TieredClipboard`], so callers
//! handle both outcomes uniformly.

/// Something that can receive copied text
///
/// Implemented for any `FnMut(&str) -> bool` closure, which keeps test
/// doubles and host adapters equally lightweight.
pub trait ClipboardWrite {
    /// Attempt to place `text` on the clipboard; true on success
    fn write(&mut self, text: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ClipboardWrite for F {
    fn write(&mut self, text: &str) -> bool {
        self(text)
    }
}

/// Primary writer with a fallback tried on failure
///
/// Reports the fallback's outcome when the primary fails, so a caller
/// sees a single boolean regardless of which tier did the work.
pub struct TieredClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ClipboardWrite, F: ClipboardWrite> TieredClipboard<P, F> {
    /// Combine a primary writer and its fallback
    pub fn new(primary: P, fallback: F) -> Self {
        TieredClipboard { primary, fallback }
    }
}

impl<P: ClipboardWrite, F: ClipboardWrite> ClipboardWrite for TieredClipboard<P, F> {
    fn write(&mut self, text: &str) -> bool {
        if self.primary.write(text) {
            true
        } else {
            self.fallback.write(text)
        }
    }
}
