//! Line-oriented access to raw puzzle input

use crate::error::EmptyInputError;

/// Split raw input into its lines.
///
/// Input files are expected to end with a single trailing newline, so if the
/// last element after splitting on `'\n'` is the empty string, exactly that
/// one element is dropped: the final newline is a terminator, not a blank
/// record. Interior blank lines, and any blank lines before the final one,
/// are preserved and left for the day solver's grammar to reject.
///
/// Fails with [`EmptyInputError`] when nothing remains after the trim.
///
/// ```
/// use advent_solver::input;
///
/// let lines = input::lines("L44\nR35\nR4\n").unwrap();
/// assert_eq!(lines, ["L44", "R35", "R4"]);
///
/// assert!(input::lines("").is_err());
/// ```
pub fn lines(content: &str) -> Result<Vec<&str>, EmptyInputError> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(lines)
}
