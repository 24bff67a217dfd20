//! Indentation stack

/// One indentation level: its width in columns and an optional literal
/// to write instead of the computed indentation on the next first line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndentEntry {
    levels: usize,
    first_line: Option<String>,
}

/// Stack of nested indentation levels.
///
/// The stack starts with a zero-width root entry which is never popped.
/// Each entry keeps its first-line override with it, so pushing and popping
/// a list item's bullet is a single operation.
#[derive(Debug, Clone)]
pub struct IndentStack {
    indentation_char: char,
    entries: Vec<IndentEntry>,
}

impl IndentStack {
    pub fn new(indentation_char: char) -> Self {
        Self {
            indentation_char,
            entries: vec![IndentEntry {
                levels: 0,
                first_line: None,
            }],
        }
    }

    /// Indent by `levels` more columns.
    ///
    /// `first_line` replaces the computed indentation of the first line
    /// written at this depth (a list item puts its bullet there).
    pub fn push(&mut self, levels: usize, first_line: Option<String>) {
        self.entries.push(IndentEntry { levels, first_line });
    }

    /// Remove the innermost level and return its width.
    ///
    /// Pushes and pops are paired by the translator's enter/leave handlers,
    /// so the root entry is never popped.
    pub fn pop(&mut self) -> usize {
        debug_assert!(self.entries.len() > 1, "popped the root indentation level");
        if self.entries.len() > 1 {
            self.entries.pop().map_or(0, |entry| entry.levels)
        } else {
            0
        }
    }

    /// Number of entries, the root included
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Total indentation width in columns
    pub fn width(&self) -> usize {
        self.entries.iter().map(|entry| entry.levels).sum()
    }

    pub fn current_indent(&self) -> String {
        std::iter::repeat(self.indentation_char)
            .take(self.width())
            .collect()
    }

    /// Indentation of the next first line: the innermost override if one
    /// is pending, the current indentation otherwise
    pub fn current_first_line_indent(&self) -> String {
        match self.entries.last().and_then(|entry| entry.first_line.as_ref()) {
            Some(first_line) => first_line.clone(),
            None => self.current_indent(),
        }
    }

    /// Like [`current_first_line_indent`](Self::current_first_line_indent),
    /// but clears the override so only one first line gets it
    pub fn take_first_line_indent(&mut self) -> String {
        match self.entries.last_mut().and_then(|entry| entry.first_line.take()) {
            Some(first_line) => first_line,
            None => self.current_indent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let stack = IndentStack::new(' ');
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current_indent(), "");
        assert_eq!(stack.current_first_line_indent(), "");
    }

    #[test]
    fn test_levels_accumulate() {
        let mut stack = IndentStack::new(' ');
        stack.push(2, None);
        stack.push(4, None);
        assert_eq!(stack.current_indent(), "      ");
        assert_eq!(stack.pop(), 4);
        assert_eq!(stack.current_indent(), "  ");
        assert_eq!(stack.pop(), 2);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_custom_indentation_char() {
        let mut stack = IndentStack::new('\t');
        stack.push(2, None);
        assert_eq!(stack.current_indent(), "\t\t");
    }

    #[test]
    fn test_first_line_override() {
        let mut stack = IndentStack::new(' ');
        stack.push(2, Some("* ".to_string()));
        assert_eq!(stack.current_first_line_indent(), "* ");
        assert_eq!(stack.current_indent(), "  ");

        assert_eq!(stack.take_first_line_indent(), "* ");
        assert_eq!(stack.take_first_line_indent(), "  ");
        assert_eq!(stack.current_first_line_indent(), "  ");
    }

    #[test]
    fn test_override_leaves_with_its_level() {
        let mut stack = IndentStack::new(' ');
        stack.push(2, Some("* ".to_string()));
        stack.push(2, None);
        assert_eq!(stack.current_first_line_indent(), "    ");
        stack.pop();
        assert_eq!(stack.current_first_line_indent(), "* ");
        stack.pop();
        assert_eq!(stack.current_first_line_indent(), "");
    }
}
