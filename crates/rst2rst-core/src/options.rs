//! Configuration options for reStructuredText serialization

use crate::{Result, WriterError};

/// Options for reStructuredText serialization.
///
/// Per-depth tables are indexed by heading depth (0 is the outermost title)
/// or list depth (0 is the outermost list). Lookups past the end of a table
/// reuse its last entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormattingOptions {
    /// Symbols used to underline and overline titles
    pub title_chars: Vec<char>,

    /// Written before a title and its overline (typically blank lines)
    pub title_prefix: Vec<String>,

    /// Separator pending after a title's underline (typically blank lines)
    pub title_suffix: Vec<String>,

    /// Whether to overline the title
    pub title_overline: Vec<bool>,

    /// Character used for indentation
    pub indentation_char: char,

    /// Indentation width of block quotes, in columns
    pub blockquote_indent: usize,

    /// Maximum line width for wrapped prose
    pub wrap_length: usize,

    /// Bullet symbols for bullet lists
    pub bullet_character: Vec<char>,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            title_chars: vec!['#', '*', '=', '-', '^', '"'],
            title_prefix: vec![
                String::new(),
                "\n".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            title_suffix: vec!["\n\n".to_string(); 6],
            title_overline: vec![true, true, false, false, false, false],
            indentation_char: ' ',
            blockquote_indent: 2,
            wrap_length: 79,
            bullet_character: vec!['*', '-', '+'],
        }
    }
}

impl FormattingOptions {
    /// Check that every per-depth table can be indexed.
    ///
    /// The four title tables describe the same heading levels and must have
    /// the same length.
    pub fn validate(&self) -> Result<()> {
        if self.title_chars.is_empty() {
            return Err(WriterError::InvalidOptions(
                "title_chars must not be empty".to_string(),
            ));
        }
        if self.bullet_character.is_empty() {
            return Err(WriterError::InvalidOptions(
                "bullet_character must not be empty".to_string(),
            ));
        }

        let levels = self.title_chars.len();
        let tables = [
            ("title_prefix", self.title_prefix.len()),
            ("title_suffix", self.title_suffix.len()),
            ("title_overline", self.title_overline.len()),
        ];
        for (name, len) in tables {
            if len != levels {
                return Err(WriterError::InvalidOptions(format!(
                    "{name} has {len} entries but title_chars has {levels}"
                )));
            }
        }

        if self.wrap_length == 0 {
            return Err(WriterError::InvalidOptions(
                "wrap_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Title symbol for a heading depth
    pub fn title_char(&self, depth: usize) -> char {
        *clamped("title_chars", &self.title_chars, depth)
    }

    pub fn title_prefix(&self, depth: usize) -> &str {
        clamped("title_prefix", &self.title_prefix, depth).as_str()
    }

    pub fn title_suffix(&self, depth: usize) -> &str {
        clamped("title_suffix", &self.title_suffix, depth).as_str()
    }

    pub fn title_overline(&self, depth: usize) -> bool {
        *clamped("title_overline", &self.title_overline, depth)
    }

    /// Bullet symbol for a list depth
    pub fn bullet(&self, depth: usize) -> char {
        *clamped("bullet_character", &self.bullet_character, depth)
    }
}

/// Index `table`, reusing the last entry when `depth` is past the end.
///
/// Tables are checked non-empty by [`FormattingOptions::validate`].
fn clamped<'a, T>(name: &str, table: &'a [T], depth: usize) -> &'a T {
    if depth >= table.len() {
        log::warn!(
            "{name} has no entry for depth {depth}, using entry {}",
            table.len().saturating_sub(1)
        );
    }
    &table[depth.min(table.len().saturating_sub(1))]
}
