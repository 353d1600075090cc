use crate::units::Col;

/// The punctuation marks that may hang past the text column when hanging
/// punctuation is enabled
pub const DEFAULT_HANGING_PUNCTUATION: &[char] = &[',', '.', ';', ':', '"', '\'', '-'];

/// Layout settings shared by the wrapper and the justifier. There is no
/// ambient or process-wide state: every layout function takes its
/// configuration explicitly, so two documents with different settings can be
/// rendered side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The column width every justified line is stretched to
    pub columns: Col,
    /// How many columns the first line of an indented paragraph is inset by
    pub indent: Col,
    /// Render leading punctuation in a reserved column left of the text span
    pub hang_left: bool,
    /// Let trailing punctuation hang one column past the right margin
    pub hang_right: bool,
    /// Which characters are eligible for hanging
    pub hanging_punctuation: Vec<char>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            columns: Col(80),
            indent: Col(2),
            hang_left: true,
            hang_right: true,
            hanging_punctuation: DEFAULT_HANGING_PUNCTUATION.to_vec(),
        }
    }
}

impl Config {
    /// Set the column width every justified line is stretched to
    pub fn with_columns<C: Into<Col>>(mut self, columns: C) -> Config {
        self.columns = columns.into();
        self
    }

    /// Set the first-line indent width for indented paragraphs
    pub fn with_indent<C: Into<Col>>(mut self, indent: C) -> Config {
        self.indent = indent.into();
        self
    }

    /// Enable or disable hanging punctuation on either margin
    pub fn with_hanging(mut self, left: bool, right: bool) -> Config {
        self.hang_left = left;
        self.hang_right = right;
        self
    }

    pub(crate) fn hangs(&self, c: char) -> bool {
        self.hanging_punctuation.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.columns, Col(80));
        assert_eq!(config.indent, Col(2));
        assert!(config.hang_left);
        assert!(config.hang_right);
        assert!(config.hangs(','));
        assert!(config.hangs('\''));
        assert!(!config.hangs('a'));
    }

    #[test]
    fn builders() {
        let config = Config::default()
            .with_columns(40usize)
            .with_indent(4usize)
            .with_hanging(false, true);
        assert_eq!(config.columns, Col(40));
        assert_eq!(config.indent, Col(4));
        assert!(!config.hang_left);
        assert!(config.hang_right);
    }
}
