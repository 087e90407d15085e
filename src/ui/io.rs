//! Terminal streams and interactivity detection

use std::cell::RefCell;
use std::io::{self, IsTerminal, Write};
use std::rc::Rc;

/// Output sinks plus the terminal state of each standard stream
pub struct IoStreams {
    stdin_tty: bool,
    stdout_tty: bool,
    stderr_tty: bool,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl IoStreams {
    /// Streams bound to the process stdout/stderr
    pub fn system() -> Self {
        Self {
            stdin_tty: io::stdin().is_terminal(),
            stdout_tty: io::stdout().is_terminal(),
            stderr_tty: io::stderr().is_terminal(),
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }

    /// In-memory streams for tests; nothing is a terminal until set otherwise
    pub fn test() -> (Self, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let ios = Self {
            stdin_tty: false,
            stdout_tty: false,
            stderr_tty: false,
            out: Box::new(out.clone()),
            err: Box::new(err.clone()),
        };
        (ios, out, err)
    }

    pub fn set_stdin_tty(&mut self, tty: bool) {
        self.stdin_tty = tty;
    }

    #[cfg(test)]
    pub(crate) fn set_stdout_tty(&mut self, tty: bool) {
        self.stdout_tty = tty;
    }

    pub fn is_stderr_tty(&self) -> bool {
        self.stderr_tty
    }

    /// Prompting needs a terminal on both ends
    pub fn can_prompt(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }

    pub fn out(&mut self) -> &mut dyn Write {
        self.out.as_mut()
    }

    pub fn err(&mut self) -> &mut dyn Write {
        self.err.as_mut()
    }
}

/// Cloneable in-memory writer for capturing output in tests
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
