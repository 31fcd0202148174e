use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal. Anything but an explicit yes declines.
pub fn confirm(question: &str) -> bool {
    confirm_with(&mut io::stdin().lock(), &mut io::stdout(), question)
}

pub(crate) fn confirm_with(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> bool {
    if write!(output, "{question} [y/N] ").and_then(|_| output.flush()).is_err() {
        return false;
    }

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
