//! Status line output shared by the facade and every subsystem.
//!
//! The ordered stream of notices is the observable behavior of the player,
//! so all components write through one cloned `Console` handle. Tests use a
//! buffered console to assert exact line sequences.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
enum Sink {
    Stdout,
    Buffer(Vec<String>),
}

/// Cloneable handle to the notice stream
#[derive(Debug, Clone)]
pub struct Console {
    sink: Rc<RefCell<Sink>>,
}

impl Console {
    /// Console that prints every line to standard output
    pub fn stdout() -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Stdout)),
        }
    }

    /// Console that keeps lines in memory
    pub fn buffered() -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Buffer(Vec::new()))),
        }
    }

    /// Emit one status line
    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        match &mut *self.sink.borrow_mut() {
            Sink::Stdout => println!("{}", text),
            Sink::Buffer(lines) => lines.push(text),
        }
    }

    /// Emit an empty separator line
    pub fn blank(&self) {
        self.line("");
    }

    /// Lines captured so far. Always empty for a stdout console.
    pub fn lines(&self) -> Vec<String> {
        match &*self.sink.borrow() {
            Sink::Stdout => Vec::new(),
            Sink::Buffer(lines) => lines.clone(),
        }
    }

    /// Drain the captured lines
    pub fn take_lines(&self) -> Vec<String> {
        match &mut *self.sink.borrow_mut() {
            Sink::Stdout => Vec::new(),
            Sink::Buffer(lines) => std::mem::take(lines),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}
