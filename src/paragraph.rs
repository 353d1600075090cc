use std::io::BufRead;

use crate::error::TypesetError;

/// One blank-line-delimited block of input text, with all interior
/// whitespace (including embedded line breaks and tabs) collapsed to single
/// spaces and surrounding whitespace trimmed. A block that is empty after
/// normalization is not a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Normalize a raw block of text into a paragraph. Returns `None` when
    /// nothing remains after collapsing whitespace.
    pub fn new(raw: &str) -> Option<Paragraph> {
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            None
        } else {
            Some(Paragraph { text })
        }
    }

    /// The normalized paragraph text: single interior spaces, no surrounding
    /// whitespace
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Reads blank-line-separated paragraphs from a reader until end of input.
/// Lines containing only whitespace count as paragraph separators; runs of
/// consecutive blank lines do not produce empty paragraphs.
pub fn read_paragraphs<R: BufRead>(reader: &mut R) -> Result<Vec<Paragraph>, TypesetError> {
    let mut paragraphs = Vec::new();
    let mut block = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            paragraphs.extend(Paragraph::new(&block));
            block.clear();
        } else {
            block.push_str(&line);
            block.push('\n');
        }
    }
    paragraphs.extend(Paragraph::new(&block));

    log::debug!("read {} paragraphs", paragraphs.len());
    Ok(paragraphs)
}
