//! Output mode and the shared output sink.

use std::io::Write;
use std::sync::Mutex;

use super::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Banner, per-repository output, and the final report.
    #[default]
    Normal,
    /// Final report only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-repository output and the banner.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

enum Sink {
    Stdout,
    Buffer(Vec<u8>),
}

/// Append-only output shared by the walker and every worker.
///
/// Each call writes its whole block under one lock, so concurrent
/// repositories never interleave inside a block.
pub struct Output {
    mode: OutputMode,
    theme: Theme,
    sink: Mutex<Sink>,
}

impl Output {
    /// Create an output writing to stdout.
    pub fn new(mode: OutputMode, theme: Theme) -> Self {
        Self {
            mode,
            theme,
            sink: Mutex::new(Sink::Stdout),
        }
    }

    /// Create an output that collects everything in memory (for testing).
    pub fn buffered(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::plain(),
            sink: Mutex::new(Sink::Buffer(Vec::new())),
        }
    }

    /// Get the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a progress line (suppressed in quiet mode).
    pub fn message(&self, msg: &str) {
        if self.mode.shows_progress() {
            self.write_block(msg);
        }
    }

    /// Write a report line; always shown.
    pub fn report(&self, msg: &str) {
        self.write_block(msg);
    }

    /// Write one repository's output block (suppressed in quiet mode).
    pub fn repo_block(&self, root: &str, text: &str, failure: Option<&str>) {
        if self.mode.shows_progress() {
            let block = self.theme.format_repo_block(root, text, failure);
            self.write_block(&block);
        }
    }

    /// Everything written so far, if this output is buffered.
    pub fn contents(&self) -> Option<String> {
        let sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        match &*sink {
            Sink::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
            Sink::Stdout => None,
        }
    }

    fn write_block(&self, block: &str) {
        let mut line = String::with_capacity(block.len() + 1);
        line.push_str(block);
        line.push('\n');

        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        match &mut *sink {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(line.as_bytes());
                let _ = out.flush();
            }
            Sink::Buffer(buf) => buf.extend_from_slice(line.as_bytes()),
        }
    }
}
