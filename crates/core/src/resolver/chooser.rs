//! Disambiguation between several search candidates.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::external_catalog::SearchCandidate;

/// Picks one candidate out of several.
///
/// Implementations return an index into `candidates`, which always holds at
/// least two entries. An out-of-range index is treated as `0` by the resolver.
pub trait Chooser {
    fn choose(&mut self, title: &str, candidates: &[SearchCandidate]) -> usize;
}

/// Non-interactive chooser: highest popularity, first seen on ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct PopularityChooser;

impl Chooser for PopularityChooser {
    fn choose(&mut self, _title: &str, candidates: &[SearchCandidate]) -> usize {
        most_popular(candidates).unwrap_or(0)
    }
}

/// Index of the most popular candidate; ties keep the earliest one.
///
/// NaN popularity never wins. If every score is NaN the first candidate is
/// returned.
pub fn most_popular(candidates: &[SearchCandidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.popularity.is_nan() {
            continue;
        }
        match best {
            Some(current) if candidates[current].popularity >= candidate.popularity => {}
            _ => best = Some(idx),
        }
    }

    best.or(if candidates.is_empty() { None } else { Some(0) })
}

/// Interactive chooser that lists candidates and reads a 1-based number.
///
/// Empty input selects the first candidate. Anything unparsable or out of
/// range also selects the first candidate, after printing a warning.
pub struct ConsoleChooser<R, W> {
    input: R,
    output: W,
}

impl ConsoleChooser<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Chooser bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the chooser, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_candidates(&mut self, title: &str, candidates: &[SearchCandidate]) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "🔍 Found {} results for '{}':",
            candidates.len(),
            title
        )?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        for (idx, candidate) in candidates.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} {}",
                idx + 1,
                candidate.kind.icon(),
                candidate.describe()
            )?;
        }
        write!(self.output, "\n👉 Choose a number (or Enter for the first one): ")?;
        self.output.flush()
    }

    fn read_choice(&mut self) -> String {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(e) => {
                warn!("Failed to read selection: {}", e);
                String::new()
            }
        }
    }

    fn warn_first(&mut self, message: &str) -> usize {
        warn!("{}", message);
        let _ = writeln!(self.output, "⚠️  {}, selecting the first one...", message);
        0
    }
}

impl<R: BufRead, W: Write> Chooser for ConsoleChooser<R, W> {
    fn choose(&mut self, title: &str, candidates: &[SearchCandidate]) -> usize {
        if let Err(e) = self.print_candidates(title, candidates) {
            warn!("Failed to print candidates: {}", e);
        }

        let choice = self.read_choice();
        if choice.is_empty() {
            return 0;
        }

        match choice.parse::<i64>() {
            Ok(n) if n >= 1 && (n as usize) <= candidates.len() => n as usize - 1,
            Ok(_) => self.warn_first("Invalid number"),
            Err(_) if is_integer(&choice) => self.warn_first("Invalid number"),
            Err(_) => self.warn_first("Invalid input"),
        }
    }
}

/// Signed run of ASCII digits, whatever its magnitude.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
