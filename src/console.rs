//! Where demonstrations print.
//!
//! Every demo writes through a `&mut dyn Console` instead of calling
//! `println!` directly, so the same code prints to the terminal or records a
//! [`Transcript`] that tests compare against the documented output.

use colored::Colorize;

pub trait Console {
    fn log(&mut self, line: &str);
}

/// Formats its arguments and logs them as one line. `$out` is anything
/// that derefs to a `Console`, usually the demo's `&mut dyn Console`.
///
/// ```
/// use design_patterns::console::{say, Console, Transcript};
///
/// let mut out = Transcript::new();
/// say!(&mut out, "Paid {} using {}", 438, "Qiwi");
/// assert_eq!(out.lines(), ["Paid 438 using Qiwi"]);
/// ```
#[macro_export]
macro_rules! say {
    ($out:expr, $($arg:tt)*) => {
        $crate::console::Console::log(&mut *$out, &format!($($arg)*))
    };
}

pub use crate::say;

/// Records every line in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Prints to standard output, optionally indented and dimmed.
#[derive(Debug, Clone)]
pub struct Stdout {
    indent: usize,
    color: bool,
}

impl Stdout {
    pub fn new(color: bool) -> Self {
        Self { indent: 0, color }
    }

    pub fn indented(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn render(&self, line: &str) -> String {
        let padded = format!("{}{}", " ".repeat(self.indent), line);
        if self.color {
            padded.dimmed().to_string()
        } else {
            padded
        }
    }
}

impl Default for Stdout {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console for Stdout {
    fn log(&mut self, line: &str) {
        println!("{}", self.render(line));
    }
}
