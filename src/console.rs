//! Terminal line I/O
//!
//! Everything the menus need from the terminal: prompted line reads,
//! multi-line capture, ANSI colors and screen clearing. Whether escapes
//! are emitted is decided once at startup, so the rest of the code
//! never has to ask whether it is talking to a pipe.

use std::io::{self, BufRead, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Line-oriented console with optional color and screen clearing.
pub struct Console {
    color: bool,
    clear: bool,
}

impl Console {
    pub fn new(color: bool, clear: bool) -> Self {
        Self { color, clear }
    }

    /// Wrap `text` in the given escape code when color is enabled.
    pub fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Clear the screen and move the cursor to the top-left corner.
    pub fn clear_screen(&self) {
        if self.clear {
            print!("\x1b[2J\x1b[H");
        }
    }

    /// Print a prompt and read one line. `None` means stdin hit EOF.
    pub fn prompt(&self, msg: &str) -> io::Result<Option<String>> {
        print!("{msg}");
        io::stdout().flush()?;
        self.read_line()
    }

    /// Read one line without prompting. `None` means EOF.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Read lines until the first empty one. EOF also ends the capture.
    pub fn read_lines_until_blank(&self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            match self.read_line()? {
                None => break,
                Some(line) if line.is_empty() => break,
                Some(line) => lines.push(line),
            }
        }
        Ok(lines)
    }

    /// Block until the user presses Enter.
    pub fn pause(&self) -> io::Result<()> {
        print!("\nPress Enter to continue...");
        io::stdout().flush()?;
        let _ = self.read_line()?;
        Ok(())
    }

    /// Print an error message, in red when color is on.
    pub fn report(&self, err: impl std::fmt::Display) {
        println!("{}", self.paint(RED, &err.to_string()));
    }
}

/// True when stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}
