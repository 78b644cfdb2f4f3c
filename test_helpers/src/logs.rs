//! Capture of `tracing` output for assertions in tests.
//!
//! [`capture`] installs a formatting subscriber for the current thread only,
//! so tests running in parallel never see each other's events.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::logs;
//!
//! let ((), output) = logs::capture(|| tracing::warn!(attempt = 3, "retrying"));
//! assert!(output.contains("WARN"));
//! assert!(output.contains("retrying attempt=3"));
//! ```

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink shared between the subscriber and the caller.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Returns everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns its result alongside
/// the formatted events it emitted.
///
/// Output is plain text without timestamps or ANSI colours, one event per
/// line, including the event target.
pub fn capture<F, R>(f: F) -> (R, String)
where
    F: FnOnce() -> R,
{
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
