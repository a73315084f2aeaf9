//! Terminal dialogs used when no host is present.

use std::io::{self, BufRead, Write};

use super::FallbackDialogs;

/// Prints alerts to stderr and reads confirmations from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDialogs;

impl FallbackDialogs for ConsoleDialogs {
    fn alert(&self, message: &str) {
        eprintln!("[alert] {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        eprint!("[confirm] {} [y/N] ", message);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation, treating as no");
                false
            }
        }
    }
}

fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("y\n"));
        assert!(parse_answer(" YES "));
        assert!(!parse_answer(""));
        assert!(!parse_answer("nope"));
    }
}
