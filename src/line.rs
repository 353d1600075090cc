/// One wrapped segment of a paragraph, as produced by
/// [`wrap`](crate::layout::wrap). The text carries no leading or trailing
/// spaces; interior word boundaries are single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The exact text to render
    pub text: String,
    /// Whether the renderer reserves a first-line paragraph indent ahead of
    /// this line
    pub indent: bool,
    /// Whether this line is rendered ragged with natural spacing, never
    /// stretched to the column width. Set on the last line of a paragraph.
    pub force_no_justify: bool,
}

impl Line {
    /// A plain line with no indent that is eligible for justification
    pub fn new<S: Into<String>>(text: S) -> Line {
        Line {
            text: text.into(),
            indent: false,
            force_no_justify: false,
        }
    }

    /// Mark this line as the indented first line of a paragraph
    pub fn indented(mut self) -> Line {
        self.indent = true;
        self
    }

    /// Mark this line as ragged: rendered with natural single spaces
    pub fn ragged(mut self) -> Line {
        self.force_no_justify = true;
        self
    }
}
