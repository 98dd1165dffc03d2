//! Output destinations
//!
//! Messages go to an [`Output`]: something writable that knows whether it
//! is an interactive terminal. The terminal-backed implementation wraps
//! [`console::Term`]; [`MemoryOutput`] collects text for tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

use crate::config::{Capabilities, Mode};

/// A destination for rendered messages
pub trait Output: Write + Send {
    /// Whether this destination is an interactive terminal
    fn is_terminal(&self) -> bool;
}

/// Standard output or standard error
pub struct TermOutput {
    term: Term,
}

impl TermOutput {
    /// Standard output
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Standard error
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Write for TermOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.term.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.term.flush()
    }
}

impl Output for TermOutput {
    fn is_terminal(&self) -> bool {
        self.term.is_term()
    }
}

/// In-memory destination; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
    terminal: bool,
}

impl MemoryOutput {
    /// A buffer that claims not to be a terminal
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that claims to be a terminal
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            ..Self::default()
        }
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Forget everything written so far
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemoryOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Output for MemoryOutput {
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Whether to write the colored rendering to `output`
pub fn color_enabled(mode: Mode, caps: Capabilities, output: &dyn Output) -> bool {
    match mode {
        Mode::Never => false,
        Mode::Always => true,
        Mode::Auto => caps.auto_color && output.is_terminal(),
    }
}

/// Write `text` and flush
///
/// A destination that cannot encode the text (`InvalidData`) gets an
/// ASCII transliteration instead.
pub fn write_and_flush(output: &mut dyn Output, text: &str) -> io::Result<()> {
    match output.write_all(text.as_bytes()) {
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            log::debug!("output rejected text ({e}), writing ASCII transliteration");
            output.write_all(transliterate(text).as_bytes())?;
        }
        result => result?,
    }
    output.flush()
}

/// ASCII approximation of `text`, one character at a time
///
/// ASCII characters, whitespace and line ends included, are kept as they are.
fn transliterate(text: &str) -> String {
    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else {
            ascii.push_str(deunicode::deunicode_char(c).unwrap_or("?"));
        }
    }
    ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects anything that is not ASCII, like a legacy console
    struct AsciiOnly(Vec<u8>);

    impl Write for AsciiOnly {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !buf.is_ascii() {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "not ascii"));
            }
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output for AsciiOnly {
        fn is_terminal(&self) -> bool {
            false
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output for Broken {
        fn is_terminal(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_color_enabled() {
        let tty = MemoryOutput::terminal();
        let pipe = MemoryOutput::new();
        let full = Capabilities::full();

        assert!(color_enabled(Mode::Auto, full, &tty));
        assert!(!color_enabled(Mode::Auto, full, &pipe));
        assert!(color_enabled(Mode::Always, full, &pipe));
        assert!(!color_enabled(Mode::Never, full, &tty));
    }

    #[test]
    fn test_color_enabled_limited_platform() {
        let tty = MemoryOutput::terminal();
        let limited = Capabilities::limited();

        assert!(!color_enabled(Mode::Auto, limited, &tty));
        assert!(color_enabled(Mode::Always, limited, &tty));
    }

    #[test]
    fn test_write_and_flush() {
        let mut out = MemoryOutput::new();
        write_and_flush(&mut out, "héllo ✓\n").unwrap();
        assert_eq!(out.contents(), "héllo ✓\n");
    }

    #[test]
    fn test_write_falls_back_to_ascii() {
        let mut out = AsciiOnly(Vec::new());
        write_and_flush(&mut out, "café\n").unwrap();
        let written = String::from_utf8(out.0).unwrap();
        assert_eq!(written, "cafe\n");
    }

    #[test]
    fn test_transliterate_keeps_whitespace() {
        assert_eq!(transliterate("Doing stuff … done \n"), "Doing stuff ... done \n");
        assert_eq!(transliterate("  naïve\r\n"), "  naive\r\n");
    }

    #[test]
    fn test_other_errors_are_reported() {
        let err = write_and_flush(&mut Broken, "text").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_memory_output_shares_buffer() {
        let out = MemoryOutput::new();
        let mut writer = out.clone();
        writer.write_all(b"abc").unwrap();
        assert_eq!(out.contents(), "abc");
        out.clear();
        assert_eq!(writer.contents(), "");
    }
}
