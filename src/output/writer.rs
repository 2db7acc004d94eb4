//! Terminal writers - where a finished payload ends up

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, Clear, ClearType},
};

/// Performs the physical write of a compressed payload.
pub trait TerminalWriter {
    fn write(&mut self, payload: &str) -> io::Result<()>;
}

/// Begin a render frame (synchronized update, hide cursor, disable autowrap)
fn begin_frame<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[?2026h")?; // Begin synchronized update
    write!(out, "\x1b[?7l")?; // Disable autowrap
    execute!(out, Hide)?;
    Ok(())
}

/// End a render frame (show cursor, enable autowrap, end synchronized update, flush)
fn end_frame<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show)?;
    write!(out, "\x1b[?7h")?;
    write!(out, "\x1b[?2026l")?;
    out.flush()?;
    Ok(())
}

/// Execute a write with frame guards, ending the frame even on error
fn with_frame<W: Write, F>(out: &mut W, f: F) -> io::Result<()>
where
    F: FnOnce(&mut W) -> io::Result<()>,
{
    begin_frame(out)?;
    let result = f(out);
    let _ = end_frame(out);
    result
}

/// Writes to stdout inside the alternate screen.
pub struct CrosstermTerminal {
    initialized: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { initialized: false }
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            Clear(ClearType::All)
        )?;
        stdout.flush()?;

        self.initialized = true;
        Ok(())
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }

        let mut stdout = io::stdout();

        // In case a frame was interrupted
        write!(stdout, "\x1b[0m\x1b(B")?;
        write!(stdout, "\x1b[?7h")?;
        write!(stdout, "\x1b[?2026l")?;
        stdout.flush()?;

        execute!(stdout, Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        self.initialized = false;
        Ok(())
    }

    /// Clear the whole screen, e.g. after a resize
    pub fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All))
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter for CrosstermTerminal {
    fn write(&mut self, payload: &str) -> io::Result<()> {
        if payload.is_empty() {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        with_frame(&mut out, |out| out.write_all(payload.as_bytes()))
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Keeps every payload in memory; for tests and headless rendering.
#[derive(Debug, Default, Clone)]
pub struct Capture {
    frames: Vec<String>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads in the order they were written.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Everything written, concatenated.
    pub fn output(&self) -> String {
        self.frames.concat()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl TerminalWriter for Capture {
    fn write(&mut self, payload: &str) -> io::Result<()> {
        self.frames.push(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_guards_wrap_payload() {
        let mut out: Vec<u8> = Vec::new();
        with_frame(&mut out, |out| out.write_all(b"hello")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[?2026h\x1b[?7l"));
        assert!(text.ends_with("\x1b[?7h\x1b[?2026l"));
        let body = text.find("hello").unwrap();
        assert!(text.find("\x1b[?25l").unwrap() < body);
        assert!(text.find("\x1b[?25h").unwrap() > body);
    }

    #[test]
    fn test_frame_ends_on_error() {
        let mut out: Vec<u8> = Vec::new();
        let result = with_frame(&mut out, |_| Err(io::Error::new(io::ErrorKind::Other, "boom")));
        assert!(result.is_err());
        assert!(String::from_utf8(out).unwrap().ends_with("\x1b[?2026l"));
    }

    #[test]
    fn test_capture() {
        let mut capture = Capture::new();
        capture.write("a").unwrap();
        capture.write("b").unwrap();
        assert_eq!(capture.frames(), &["a".to_string(), "b".to_string()]);
        assert_eq!(capture.output(), "ab");
        capture.clear();
        assert!(capture.frames().is_empty());
    }
}
