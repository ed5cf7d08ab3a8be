//! Status output for huffer runs.
//!
//! Each line is a right-aligned verb followed by a message, e.g.
//! `  Generating 38 sprites` or `     Writing 38 sprites to output (archive)`.
//! Status lines go to stderr so `huffer list --json` and `huffer palette`
//! keep stdout clean.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Verbs are right-aligned to this column.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb or highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Green,
    Cyan,
    Yellow,
    Dim,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "\x1b[32m",
            Tone::Cyan => "\x1b[36m",
            Tone::Yellow => "\x1b[33m",
            Tone::Dim => "\x1b[2m",
        }
    }
}

/// Writes run progress to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Work in progress ("Generating", "Writing").
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Green, verb, message);
    }

    /// A finished step ("Finished", "Target").
    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Green, verb, message);
    }

    /// Counts and listings.
    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Cyan, verb, message);
    }

    /// Something worth noticing that does not fail the run.
    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Yellow, verb, message);
    }

    /// De-emphasised text, such as `(empty)` categories.
    pub fn dim(&self, text: &str) -> String {
        self.tint(Tone::Dim, text)
    }

    /// Highlighted paths.
    pub fn cyan(&self, text: &str) -> String {
        self.tint(Tone::Cyan, text)
    }

    fn tint(&self, tone: Tone, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", tone.code())
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.code())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// `plural(1, "sprite", "sprites")` is "1 sprite"; any other count takes
/// the plural form.
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{n} {word}")
}

/// A path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
